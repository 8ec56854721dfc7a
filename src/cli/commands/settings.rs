use crate::cli::commands::{log_op, open_session};
use crate::cli::parser::SettingsAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::AppTheme;
use crate::ui::messages::{header, info, success};
use crate::ui::views;

pub fn handle(action: &SettingsAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        SettingsAction::Show => {
            header("Minha Conta");
            print!("{}", views::settings_view(store.settings()));
        }

        SettingsAction::Set {
            name,
            email,
            interval,
            theme,
        } => {
            if name.is_none() && email.is_none() && interval.is_none() && theme.is_none() {
                info("Nothing to change. Use --name, --email, --interval or --theme.");
                return Ok(());
            }

            if *interval == Some(0) {
                return Err(AppError::Config(
                    "contact interval must be at least 1 day".into(),
                ));
            }
            let theme = theme.as_deref().map(AppTheme::parse).transpose()?;

            store.update_settings(|s| {
                if let Some(n) = name {
                    s.user_name = n.trim().to_string();
                }
                if let Some(e) = email {
                    s.email = e.trim().to_string();
                }
                if let Some(i) = interval {
                    s.contact_interval_days = *i;
                }
                if let Some(t) = theme {
                    s.theme = t;
                }
            })?;

            log_op(&store, "settings", "", "Settings updated");
            success("Settings updated.");
            print!("{}", views::settings_view(store.settings()));
        }

        SettingsAction::Theme => {
            let theme = store.toggle_theme()?;
            log_op(&store, "settings", "theme", &format!("Theme set to {}", theme.as_str()));
            success(format!("Theme switched to {}.", theme.as_str()));
        }
    }

    Ok(())
}
