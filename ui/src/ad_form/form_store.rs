//! Current values, errors and interaction flags of the ad-creation form.

use payloads::{
    FieldErrors, FieldPath,
    field_path::FieldPathError,
    schema::{self, initial_candidate},
};
use serde_json::Value;
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

/// Holds the candidate record exactly as the user entered it.
///
/// Values that fail validation are kept and flagged, so the user always sees
/// what they typed next to the error.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStore {
    initial: Value,
    value: Value,
    errors: FieldErrors,
    touched: BTreeSet<String>,
    submitted: bool,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::from_candidate(initial_candidate())
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_candidate(candidate: Value) -> Self {
        let mut store = Self {
            initial: candidate.clone(),
            value: candidate,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submitted: false,
        };
        store.revalidate();
        store
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        FieldPath::parse(path).ok()?.get(&self.value)
    }

    /// The value at `path` as input text. Absent values render empty.
    pub fn text(&self, path: &str) -> String {
        match self.get(path) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn flag(&self, path: &str) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Writes one field and recomputes every error. Only the addressed
    /// branch of the record changes.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), FieldPathError> {
        let field_path = FieldPath::parse(path)?;
        let follow_up = schema::follow_up(&field_path.to_string(), &value);
        field_path.set(&mut self.value, value);
        if let Some((linked, linked_value)) = follow_up {
            FieldPath::parse(linked)?.set(&mut self.value, linked_value);
        }
        self.touched.insert(field_path.to_string());
        self.revalidate();
        Ok(())
    }

    /// Every current validation error, shown or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error to display inline for `path`.
    ///
    /// Untouched fields stay quiet until the first submit attempt.
    pub fn visible_error(&self, path: &str) -> Option<&str> {
        if self.submitted || self.touched.contains(path) {
            self.errors.get(path)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self, path: &str) -> bool {
        self.touched.contains(path)
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    pub fn is_field_dirty(&self, path: &str) -> bool {
        let Ok(path) = FieldPath::parse(path) else {
            return false;
        };
        path.get(&self.value) != path.get(&self.initial)
    }

    pub fn was_submitted(&self) -> bool {
        self.submitted
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn reset(&mut self) {
        *self = Self::from_candidate(self.initial.clone());
    }

    fn revalidate(&mut self) {
        self.errors = match schema::validate(&self.value) {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors,
        };
    }
}

pub enum FormAction {
    Set { path: String, value: Value },
    MarkSubmitted,
    Reset,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = (*self).clone();

        match action {
            FormAction::Set { path, value } => {
                if let Err(e) = store.set(&path, value) {
                    tracing::warn!("Ignoring update to {path:?}: {e}");
                    return self;
                }
            }
            FormAction::MarkSubmitted => store.mark_submitted(),
            FormAction::Reset => store.reset(),
        }

        Rc::new(store)
    }
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts raw number-input text into a candidate value.
///
/// Empty input clears the field; text that does not parse is kept as a
/// string so validation can flag it.
pub fn number_input(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<f64>() {
        // Whole numbers stay integral so the input does not render "3.0".
        Ok(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER => {
            Value::from(n as i64)
        }
        Ok(n) if n.is_finite() => {
            serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
        }
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_store_hides_errors_until_touched() {
        let store = FormStore::new();
        assert!(!store.is_valid());
        assert!(store.errors().contains("title"));
        assert_eq!(store.visible_error("title"), None);
        assert!(!store.is_dirty());
        assert!(!store.flag("property.amenities.wifi"));
    }

    #[test]
    fn invalid_values_are_kept_and_flagged() {
        let mut store = FormStore::new();
        store.set("title", json!("too short")).unwrap();
        assert_eq!(store.text("title"), "too short");
        assert_eq!(
            store.visible_error("title"),
            Some("Title must be at least 10 characters")
        );

        store
            .set("property.capacity.rooms", number_input("two"))
            .unwrap();
        assert_eq!(store.text("property.capacity.rooms"), "two");
        assert_eq!(
            store.visible_error("property.capacity.rooms"),
            Some(schema::EXPECTED_NUMBER)
        );
    }

    #[test]
    fn set_only_changes_the_addressed_branch() {
        let mut store = FormStore::new();
        store.set("property.price.unit", json!("week")).unwrap();
        store.set("property.price.amount", json!(400)).unwrap();
        store.set("property.amenities.pool", json!(true)).unwrap();

        let value = store.value();
        assert_eq!(value["property"]["price"], json!({"unit": "week", "amount": 400}));
        assert_eq!(value["property"]["amenities"]["pool"], json!(true));
        assert_eq!(value["property"]["amenities"]["wifi"], json!(false));
        assert!(store.is_field_dirty("property.amenities.pool"));
        assert!(!store.is_field_dirty("property.amenities.wifi"));
        assert!(store.is_dirty());
    }

    #[test]
    fn malformed_paths_are_rejected_without_changes() {
        let mut store = FormStore::new();
        let before = store.clone();
        assert!(store.set("property..price", json!(1)).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn submit_reveals_all_errors() {
        let mut store = FormStore::new();
        assert_eq!(store.visible_error("property.address.city"), None);
        store.mark_submitted();
        assert_eq!(
            store.visible_error("property.address.city"),
            Some(schema::REQUIRED)
        );
    }

    #[test]
    fn reset_restores_the_initial_record() {
        let mut store = FormStore::new();
        store.set("title", json!("Quiet flat near the park")).unwrap();
        store.mark_submitted();
        store.reset();
        assert_eq!(store, FormStore::new());
    }

    #[test]
    fn reducer_applies_actions() {
        let store = Rc::new(FormStore::new());
        let store = store.reduce(FormAction::Set {
            path: "title".into(),
            value: json!("A title long enough"),
        });
        assert!(!store.errors().contains("title"));
        assert!(store.is_touched("title"));

        let store = store.reduce(FormAction::MarkSubmitted);
        assert!(store.was_submitted());

        let unchanged = store.clone();
        let store = store.reduce(FormAction::Set {
            path: String::new(),
            value: json!(1),
        });
        assert!(Rc::ptr_eq(&store, &unchanged));
    }

    #[test]
    fn choosing_a_unit_sets_its_symbol() {
        let mut store = FormStore::new();
        store.set("property.livingArea.unit", json!("acre")).unwrap();
        assert_eq!(store.get("property.livingArea.symbol"), Some(&json!("acre")));
        assert!(!store.errors().contains("property.livingArea.symbol"));

        store.set("property.livingArea.unit", json!("square_meter")).unwrap();
        assert_eq!(store.get("property.livingArea.symbol"), Some(&json!("m²")));

        // The symbol can still be picked by hand afterwards.
        store.set("property.livingArea.symbol", json!("ft²")).unwrap();
        assert_eq!(store.get("property.livingArea.unit"), Some(&json!("square_meter")));
        assert_eq!(store.get("property.livingArea.symbol"), Some(&json!("ft²")));
    }

    #[test]
    fn number_input_parses_or_keeps_raw_text() {
        assert_eq!(number_input(""), Value::Null);
        assert_eq!(number_input(" 3 "), json!(3));
        assert_eq!(number_input("-2"), json!(-2));
        assert_eq!(number_input("2.5"), json!(2.5));
        assert_eq!(number_input("1e400"), Value::String("1e400".into()));
        assert_eq!(number_input("abc"), Value::String("abc".into()));
    }
}
