use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged sustainability action.
///
/// `id` is assigned by the store on creation (`max(existing) + 1`) and never
/// changes afterwards. The date serializes as `YYYY-MM-DD`; the persisted
/// file form and the wire form are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub action: String,
    pub date: NaiveDate,
    pub points: i64,
}
