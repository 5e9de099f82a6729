//! # Payload Validation
//!
//! Write requests arrive as raw JSON. This module checks field presence and
//! types and produces either a typed field set or per-field error messages.
//!
//! Two modes:
//!
//! - [`validate_full`] (POST, PUT): all three fields are required. Success
//!   yields a complete [`NewAction`].
//! - [`validate_partial`] (PATCH): only supplied fields are validated.
//!   Success yields an [`ActionPatch`] carrying just those fields;
//!   [`ActionPatch::apply`] overlays them onto an existing record, which is
//!   the single place partial-update merging happens.
//!
//! There is no partial success: any field error means no validated output.
//! Unknown extra fields are ignored. A field explicitly set to JSON `null`
//! is an error, not an omission.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::model::Action;

const REQUIRED: &str = "this field is required";
const NOT_NULL: &str = "this field may not be null";

/// Per-field validation messages, keyed by field name.
///
/// Serializes to the wire shape `{"field": ["message", ...]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A fully-validated payload for create/replace. Every field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub action: String,
    pub date: NaiveDate,
    pub points: i64,
}

impl NewAction {
    /// Build the record that will enter the collection under `id`.
    pub fn into_action(self, id: u64) -> Action {
        Action {
            id,
            action: self.action,
            date: self.date,
            points: self.points,
        }
    }
}

/// The validated subset of fields supplied in a partial payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionPatch {
    pub action: Option<String>,
    pub date: Option<NaiveDate>,
    pub points: Option<i64>,
}

impl ActionPatch {
    /// Overlay the supplied fields onto an existing record. Fields that were
    /// not supplied keep their prior value; `id` is never touched.
    pub fn apply(&self, record: &mut Action) {
        if let Some(action) = &self.action {
            record.action = action.clone();
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(points) = self.points {
            record.points = points;
        }
    }
}

fn field_action(value: &Value, errors: &mut FieldErrors) -> Option<String> {
    match value {
        Value::Null => {
            errors.push("action", NOT_NULL);
            None
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.push("action", "this field may not be blank");
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => {
            errors.push("action", "expected a string");
            None
        }
    }
}

fn field_date(value: &Value, errors: &mut FieldErrors) -> Option<NaiveDate> {
    match value {
        Value::Null => {
            errors.push("date", NOT_NULL);
            None
        }
        Value::String(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("date", "expected a date in YYYY-MM-DD format");
                None
            }
        },
        _ => {
            errors.push("date", "expected a date in YYYY-MM-DD format");
            None
        }
    }
}

// Integer-formatted strings are accepted alongside JSON integers.
fn field_points(value: &Value, errors: &mut FieldErrors) -> Option<i64> {
    let parsed = match value {
        Value::Null => {
            errors.push("points", NOT_NULL);
            return None;
        }
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        errors.push("points", "expected an integer");
    }
    parsed
}

fn as_object<'a>(
    payload: &'a Value,
    errors: &mut FieldErrors,
) -> Option<&'a serde_json::Map<String, Value>> {
    match payload.as_object() {
        Some(map) => Some(map),
        None => {
            errors.push("non_field_errors", "expected a JSON object");
            None
        }
    }
}

/// Validate a payload where all fields are required (POST, PUT).
pub fn validate_full(payload: &Value) -> Result<NewAction, FieldErrors> {
    let mut errors = FieldErrors::default();
    let map = match as_object(payload, &mut errors) {
        Some(map) => map,
        None => return Err(errors),
    };

    let action = match map.get("action") {
        Some(value) => field_action(value, &mut errors),
        None => {
            errors.push("action", REQUIRED);
            None
        }
    };
    let date = match map.get("date") {
        Some(value) => field_date(value, &mut errors),
        None => {
            errors.push("date", REQUIRED);
            None
        }
    };
    let points = match map.get("points") {
        Some(value) => field_points(value, &mut errors),
        None => {
            errors.push("points", REQUIRED);
            None
        }
    };

    match (action, date, points) {
        (Some(action), Some(date), Some(points)) => Ok(NewAction {
            action,
            date,
            points,
        }),
        _ => Err(errors),
    }
}

/// Validate only the fields present in the payload (PATCH).
pub fn validate_partial(payload: &Value) -> Result<ActionPatch, FieldErrors> {
    let mut errors = FieldErrors::default();
    let map = match as_object(payload, &mut errors) {
        Some(map) => map,
        None => return Err(errors),
    };

    let mut patch = ActionPatch::default();
    if let Some(value) = map.get("action") {
        patch.action = field_action(value, &mut errors);
    }
    if let Some(value) = map.get("date") {
        patch.date = field_date(value, &mut errors);
    }
    if let Some(value) = map.get("points") {
        patch.points = field_points(value, &mut errors);
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_valid_payload() {
        let payload = json!({ "action": "Recycled", "date": "2024-01-05", "points": 10 });
        let validated = validate_full(&payload).unwrap();

        assert_eq!(validated.action, "Recycled");
        assert_eq!(validated.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(validated.points, 10);
    }

    #[test]
    fn full_reports_every_missing_field() {
        let errors = validate_full(&json!({})).unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["action", "date", "points"]);
        assert_eq!(errors.messages("action"), [REQUIRED]);
    }

    #[test]
    fn blank_action_is_rejected() {
        let payload = json!({ "action": "   ", "date": "2024-01-05", "points": 10 });
        let errors = validate_full(&payload).unwrap_err();
        assert_eq!(errors.messages("action"), ["this field may not be blank"]);
    }

    #[test]
    fn action_is_trimmed() {
        let payload = json!({ "action": "  Biked  ", "date": "2024-01-05", "points": 5 });
        let validated = validate_full(&payload).unwrap();
        assert_eq!(validated.action, "Biked");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let payload = json!({ "action": "Biked", "date": "05/01/2024", "points": 5 });
        let errors = validate_full(&payload).unwrap_err();
        assert_eq!(
            errors.messages("date"),
            ["expected a date in YYYY-MM-DD format"]
        );
    }

    #[test]
    fn impossible_date_is_rejected() {
        let payload = json!({ "action": "Biked", "date": "2024-02-30", "points": 5 });
        assert!(validate_full(&payload).is_err());
    }

    #[test]
    fn fractional_points_are_rejected() {
        let payload = json!({ "action": "Biked", "date": "2024-01-05", "points": 2.5 });
        let errors = validate_full(&payload).unwrap_err();
        assert_eq!(errors.messages("points"), ["expected an integer"]);
    }

    #[test]
    fn numeric_string_points_are_accepted() {
        let payload = json!({ "action": "Biked", "date": "2024-01-05", "points": "12" });
        assert_eq!(validate_full(&payload).unwrap().points, 12);
    }

    #[test]
    fn null_field_is_an_error_not_an_omission() {
        let errors = validate_partial(&json!({ "date": null })).unwrap_err();
        assert_eq!(errors.messages("date"), [NOT_NULL]);
    }

    #[test]
    fn partial_keeps_only_supplied_fields() {
        let patch = validate_partial(&json!({ "points": 3 })).unwrap();

        assert_eq!(patch.points, Some(3));
        assert_eq!(patch.action, None);
        assert_eq!(patch.date, None);
    }

    #[test]
    fn partial_empty_object_is_a_no_op() {
        let patch = validate_partial(&json!({})).unwrap();
        assert_eq!(patch, ActionPatch::default());
    }

    #[test]
    fn partial_still_validates_supplied_fields() {
        let errors = validate_partial(&json!({ "points": "many" })).unwrap_err();
        assert_eq!(errors.messages("points"), ["expected an integer"]);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let errors = validate_full(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.messages("non_field_errors"), ["expected a JSON object"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = json!({
            "action": "Composted",
            "date": "2024-01-07",
            "points": 3,
            "color": "green"
        });
        assert!(validate_full(&payload).is_ok());
    }

    #[test]
    fn apply_overlays_only_supplied_fields() {
        let mut record = Action {
            id: 4,
            action: "Recycled".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            points: 10,
        };

        let patch = ActionPatch {
            points: Some(25),
            ..Default::default()
        };
        patch.apply(&mut record);

        assert_eq!(record.id, 4);
        assert_eq!(record.action, "Recycled");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(record.points, 25);
    }

    #[test]
    fn errors_serialize_to_field_map() {
        let errors = validate_full(&json!({ "action": "" })).unwrap_err();
        let wire = serde_json::to_value(&errors).unwrap();

        assert_eq!(wire["action"], json!(["this field may not be blank"]));
        assert_eq!(wire["date"], json!([REQUIRED]));
        assert_eq!(wire["points"], json!([REQUIRED]));
    }
}
