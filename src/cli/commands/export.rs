use crate::cli::commands::{log_op, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::range::parse_optional_range;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        target,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_session(cfg)?;

        let bounds = parse_optional_range(range.as_deref())?;
        info(format!(
            "Exporting {} ({}) as {}",
            target.as_str(),
            ExportLogic::range_title(bounds),
            format.as_str()
        ));

        let rows = ExportLogic::export(
            store.state(),
            *target,
            *format,
            file,
            range.as_deref(),
            *force,
        )?;

        if rows > 0 {
            log_op(
                &store,
                "export",
                target.as_str(),
                &format!("{} rows to {}", rows, file),
            );
        }
    }

    Ok(())
}
