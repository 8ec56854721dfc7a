use crate::cli::commands::log_op;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::Store;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::db::storage::{SqliteStorage, Storage, StorageKey};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
        clear_key,
        yes,
    } = cmd
    {
        // Opening the storage already applies pending migrations.
        let mut storage = SqliteStorage::open(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(storage.conn())?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *show_info {
            stats::print_db_info(storage.pool(), &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                storage
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            // every stored document must still parse
            for key in StorageKey::ALL {
                if let Some(raw) = storage.get_item(key.as_str())?
                    && let Err(e) = serde_json::from_str::<serde_json::Value>(&raw)
                {
                    println!("{}✘ {} is malformed:{} {}", RED, key.as_str(), RESET, e);
                }
            }
            println!();
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            storage.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        //
        // 5) CLEAR KEY
        //
        if let Some(raw_key) = clear_key {
            let key = StorageKey::parse(raw_key)?;
            let prompt = format!(
                "Remove stored '{}'? Its data will be lost.",
                key.as_str()
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            storage.remove_item(key.as_str())?;
            println!("{}✔ Removed {}.{}", GREEN, key.as_str(), RESET);

            // the store loads again once the bad key is gone
            if let Ok(store) = Store::load(storage) {
                log_op(&store, "del", key.as_str(), "Stored document cleared");
            }
        }
    }

    Ok(())
}
