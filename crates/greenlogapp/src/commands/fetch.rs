use crate::error::{GreenlogError, Result};
use crate::model::Action;
use crate::store::ActionStore;

pub fn run<S: ActionStore + ?Sized>(store: &S, id: u64) -> Result<Action> {
    let actions = store.load()?;
    actions
        .into_iter()
        .find(|a| a.id == id)
        .ok_or(GreenlogError::ActionNotFound(id))
}
