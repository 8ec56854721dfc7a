use crate::cli::commands::open_session;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views;
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_session(cfg)?;
    let summary = Dashboard::build(store.state(), today());

    header("Painel Geral");
    print!(
        "{}",
        views::dashboard(&summary, store.settings(), &cfg.currency_symbol)
    );
    Ok(())
}

pub fn report(cfg: &Config) -> AppResult<()> {
    let store = open_session(cfg)?;

    header("Relatórios");
    print!("{}", views::report(store.state(), &cfg.currency_symbol));
    Ok(())
}
