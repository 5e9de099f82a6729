use serde_json::Value;

use crate::error::{GreenlogError, Result};
use crate::model::Action;
use crate::store::ActionStore;
use crate::validate::validate_full;

pub fn run<S: ActionStore + ?Sized>(store: &S, id: u64, payload: &Value) -> Result<Action> {
    let mut actions = store.load()?;
    // Existence is checked first: an invalid payload against a missing id is
    // still a not-found.
    let position = actions
        .iter()
        .position(|a| a.id == id)
        .ok_or(GreenlogError::ActionNotFound(id))?;

    let validated = validate_full(payload).map_err(GreenlogError::Validation)?;

    let record = validated.into_action(id);
    actions[position] = record.clone();
    store.save(&actions)?;

    Ok(record)
}
