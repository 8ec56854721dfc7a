use crate::cli::commands::{log_op, open_session};
use crate::cli::forms::parse_date_arg;
use crate::cli::parser::VisitAction;
use crate::config::Config;
use crate::core::visits::VisitLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Visit, VisitStatus};
use crate::ui::messages::success;
use crate::ui::views;
use crate::utils::date::{parse_time, today};
use crate::utils::ids::new_id;

pub fn handle(action: &VisitAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        VisitAction::Add {
            contact,
            date,
            time,
            customer,
            address,
            notes,
            done,
            id,
        } => {
            if let Some(cid) = customer
                && store.customer(cid).is_none()
            {
                return Err(AppError::NotFound {
                    kind: "Customer",
                    id: cid.clone(),
                });
            }

            let time = match time {
                Some(t) => Some(parse_time(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?),
                None => None,
            };

            let visit = Visit {
                id: id
                    .clone()
                    .unwrap_or_else(|| new_id(|c| store.visits().iter().any(|v| v.id == c))),
                customer_id: customer.clone(),
                contact_name: contact.trim().to_string(),
                date: parse_date_arg(date.as_deref())?,
                time,
                address: address.clone(),
                notes: notes.clone(),
                status: if *done {
                    VisitStatus::Done
                } else {
                    VisitStatus::Scheduled
                },
            };

            let (vid, vdate) = (visit.id.clone(), visit.date);
            VisitLogic::add(&mut store, visit)?;
            log_op(&store, "add", &vid, &format!("Visit to '{}' on {}", contact, vdate));
            success(format!("Visit {} to '{}' on {} saved.", vid, contact, vdate));
        }

        VisitAction::List { all } => {
            let listed: Vec<&Visit> = if *all {
                let mut v: Vec<&Visit> = store.visits().iter().collect();
                v.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
                v
            } else {
                VisitLogic::upcoming(store.visits(), today())
            };
            print!("{}", views::visits_table(&listed));
        }

        VisitAction::Done { id } => {
            VisitLogic::set_status(&mut store, id, VisitStatus::Done)?;
            log_op(&store, "edit", id, "Visit done");
            success(format!("Visit {} marked as done.", id));
        }

        VisitAction::Cancel { id } => {
            VisitLogic::set_status(&mut store, id, VisitStatus::Cancelled)?;
            log_op(&store, "edit", id, "Visit cancelled");
            success(format!("Visit {} cancelled.", id));
        }

        VisitAction::Del { id } => {
            VisitLogic::delete(&mut store, id)?;
            log_op(&store, "del", id, "Visit deleted");
            success(format!("Visit {} deleted.", id));
        }
    }

    Ok(())
}
