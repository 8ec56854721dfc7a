use crate::cli::commands::{log_op, open_session};
use crate::cli::forms::parse_amount;
use crate::cli::parser::GoalAction;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::goals::GoalLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Goal;
use crate::ui::messages::success;
use crate::ui::views;
use crate::utils::date::{parse_month, today};
use crate::utils::ids::new_id;

pub fn handle(action: &GoalAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        GoalAction::Add {
            title,
            metric,
            target,
            month,
            id,
        } => {
            let month = match month {
                Some(m) => Some(parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?),
                None => None,
            };

            let goal = Goal {
                id: id
                    .clone()
                    .unwrap_or_else(|| new_id(|c| store.goals().iter().any(|g| g.id == c))),
                title: title.trim().to_string(),
                metric: *metric,
                target: parse_amount(target)?,
                month,
            };

            let gid = goal.id.clone();
            GoalLogic::add(&mut store, goal)?;
            log_op(&store, "add", &gid, &format!("Goal '{}' added", title));
            success(format!("Goal '{}' added (id {}).", title, gid));
        }

        GoalAction::List => {
            let summary = Dashboard::build(store.state(), today());
            print!("{}", views::goals_table(&summary.goals, &cfg.currency_symbol));
        }

        GoalAction::Del { id } => {
            GoalLogic::delete(&mut store, id)?;
            log_op(&store, "del", id, "Goal deleted");
            success(format!("Goal {} deleted.", id));
        }
    }

    Ok(())
}
