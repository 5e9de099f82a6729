use serde_json::Value;

use crate::error::{GreenlogError, Result};
use crate::model::Action;
use crate::store::{next_id, ActionStore};
use crate::validate::validate_full;

pub fn run<S: ActionStore + ?Sized>(store: &S, payload: &Value) -> Result<Action> {
    let validated = validate_full(payload).map_err(GreenlogError::Validation)?;

    let mut actions = store.load()?;
    let record = validated.into_action(next_id(&actions));
    actions.push(record.clone());
    store.save(&actions)?;

    Ok(record)
}
