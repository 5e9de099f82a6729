use crate::error::{GreenlogError, Result};
use crate::model::Action;
use crate::store::ActionStore;

pub fn run<S: ActionStore + ?Sized>(store: &S, id: u64) -> Result<()> {
    let actions = store.load()?;
    if !actions.iter().any(|a| a.id == id) {
        return Err(GreenlogError::ActionNotFound(id));
    }

    let remaining: Vec<Action> = actions.into_iter().filter(|a| a.id != id).collect();
    store.save(&remaining)?;

    Ok(())
}
