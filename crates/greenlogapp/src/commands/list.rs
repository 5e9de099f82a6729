use crate::error::Result;
use crate::model::Action;
use crate::store::ActionStore;

pub fn run<S: ActionStore + ?Sized>(store: &S) -> Result<Vec<Action>> {
    store.load()
}
