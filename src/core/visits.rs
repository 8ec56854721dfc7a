use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::{Visit, VisitStatus};
use chrono::NaiveDate;

pub struct VisitLogic;

impl VisitLogic {
    pub fn add<S: Storage>(store: &mut Store<S>, visit: Visit) -> AppResult<()> {
        if store.visits().iter().any(|v| v.id == visit.id) {
            return Err(AppError::Duplicate {
                kind: "Visit",
                id: visit.id,
            });
        }
        store.update_visits(|v| v.push(visit))
    }

    pub fn set_status<S: Storage>(
        store: &mut Store<S>,
        id: &str,
        status: VisitStatus,
    ) -> AppResult<()> {
        if !store.visits().iter().any(|v| v.id == id) {
            return Err(AppError::NotFound {
                kind: "Visit",
                id: id.to_string(),
            });
        }
        store.update_visits(|visits| {
            if let Some(v) = visits.iter_mut().find(|v| v.id == id) {
                v.status = status;
            }
        })
    }

    pub fn delete<S: Storage>(store: &mut Store<S>, id: &str) -> AppResult<()> {
        if !store.visits().iter().any(|v| v.id == id) {
            return Err(AppError::NotFound {
                kind: "Visit",
                id: id.to_string(),
            });
        }
        store.update_visits(|v| v.retain(|x| x.id != id))
    }

    /// Scheduled visits from `from` onward, soonest first.
    pub fn upcoming(visits: &[Visit], from: NaiveDate) -> Vec<&Visit> {
        let mut out: Vec<&Visit> = visits
            .iter()
            .filter(|v| v.status == VisitStatus::Scheduled && v.date >= from)
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        out
    }
}
