use crate::cli::commands::{log_op, open_store};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - every storage key, seeded from what is already stored or the defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing Controlarva…");
    println!("🗄️  Database   : {}", &cfg.database);

    let mut store = open_store(&cfg)?;
    store.save_all()?;

    log_op(
        &store,
        "init",
        "",
        &format!("Store initialized at {}", &cfg.database),
    );

    success(format!("Store ready at {}", &cfg.database));
    Ok(())
}
