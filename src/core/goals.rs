use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::Goal;

pub struct GoalLogic;

impl GoalLogic {
    pub fn add<S: Storage>(store: &mut Store<S>, goal: Goal) -> AppResult<()> {
        if store.goals().iter().any(|g| g.id == goal.id) {
            return Err(AppError::Duplicate {
                kind: "Goal",
                id: goal.id,
            });
        }
        store.update_goals(|g| g.push(goal))
    }

    pub fn delete<S: Storage>(store: &mut Store<S>, id: &str) -> AppResult<()> {
        if !store.goals().iter().any(|g| g.id == id) {
            return Err(AppError::NotFound {
                kind: "Goal",
                id: id.to_string(),
            });
        }
        store.update_goals(|g| g.retain(|x| x.id != id))
    }
}
