use crate::cli::commands::{log_op, open_store};
use crate::config::Config;
use crate::core::session::{SessionGate, SessionState};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn login(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    if SessionGate::state(&store) == SessionState::Authenticated {
        info(format!("Already logged in as {}.", store.settings().user_name));
        return Ok(());
    }

    SessionGate::login(&mut store)?;
    log_op(&store, "login", "", "Session opened");
    success(format!("Welcome, {}!", store.settings().user_name));
    Ok(())
}

pub fn logout(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    if SessionGate::state(&store) == SessionState::Unauthenticated {
        info("No open session.");
        return Ok(());
    }

    SessionGate::logout(&mut store)?;
    log_op(&store, "logout", "", "Session closed");
    success("Logged out.");
    Ok(())
}

/// Session and store summary. Available without a session.
pub fn status(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let settings = store.settings();

    println!("🔐 Session    : {}", SessionGate::state(&store).as_str());
    println!("👤 User       : {} <{}>", settings.user_name, settings.email);
    println!("🎨 Theme      : {}", settings.theme.as_str());
    println!("🗄️  Database   : {}", cfg.database);

    if store.is_authenticated() {
        println!(
            "📊 Records    : {} customers, {} sales, {} visits, {} goals",
            store.customers().len(),
            store.sales().len(),
            store.visits().len(),
            store.goals().len()
        );
    }
    Ok(())
}
