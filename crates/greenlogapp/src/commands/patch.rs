use serde_json::Value;

use crate::error::{GreenlogError, Result};
use crate::model::Action;
use crate::store::ActionStore;
use crate::validate::validate_partial;

pub fn run<S: ActionStore + ?Sized>(store: &S, id: u64, payload: &Value) -> Result<Action> {
    let mut actions = store.load()?;
    let position = actions
        .iter()
        .position(|a| a.id == id)
        .ok_or(GreenlogError::ActionNotFound(id))?;

    let patch = validate_partial(payload).map_err(GreenlogError::Validation)?;

    patch.apply(&mut actions[position]);
    let record = actions[position].clone();
    store.save(&actions)?;

    Ok(record)
}
