//! Declarative validation rules for the ad-creation record.
//!
//! The candidate is whatever the form currently holds, as JSON. The same rule
//! table drives both the per-field check used for inline errors and the full
//! check run at submit time. Keys that have no rule are ignored.

use crate::{
    AdDraft, FieldPath, MeasureSymbol, MeasureUnit, PriceUnit, PropertyType,
    RentalType, ads::Amenities,
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

pub const TITLE_MIN_LEN: usize = 10;
pub const DESCRIPTION_MIN_LEN: usize = 50;
pub const DEFAULT_CURRENCY: &str = "EUR";

pub const REQUIRED: &str = "Required";
pub const INVALID_CHOICE: &str = "Invalid choice";
pub const EXPECTED_TEXT: &str = "Expected text";
pub const EXPECTED_NUMBER: &str = "Expected a number";
pub const EXPECTED_WHOLE_NUMBER: &str = "Must be a whole number";
pub const EXPECTED_FLAG: &str = "Expected true or false";
pub const NUMBER_TOO_LARGE: &str = "Number is too large";

pub const LIVING_AREA_UNIT: &str = "property.livingArea.unit";
pub const LIVING_AREA_SYMBOL: &str = "property.livingArea.symbol";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// A string of at least `min_len` characters.
    Text {
        min_len: usize,
        message: &'static str,
    },
    /// A string that may be absent or empty.
    OptionalText,
    /// A string, filled in with `default` when absent.
    TextOr { default: &'static str },
    /// A finite number `>= min` (or `> min` when `exclusive`).
    Number {
        min: f64,
        exclusive: bool,
        message: &'static str,
    },
    /// A whole number `>= min`.
    Integer { min: u64, message: &'static str },
    /// One of the listed wire values.
    Choice(&'static [&'static str]),
    /// A boolean, `false` when absent.
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub path: &'static [&'static str],
    pub rule: Rule,
}

const fn field(path: &'static [&'static str], rule: Rule) -> FieldRule {
    FieldRule { path, rule }
}

const fn text(min_len: usize, message: &'static str) -> Rule {
    Rule::Text { min_len, message }
}

const fn at_least(min: u64, message: &'static str) -> Rule {
    Rule::Integer { min, message }
}

pub static AD_RULES: &[FieldRule] = &[
    field(
        &["title"],
        text(TITLE_MIN_LEN, "Title must be at least 10 characters"),
    ),
    field(
        &["description"],
        text(
            DESCRIPTION_MIN_LEN,
            "Description must be at least 50 characters",
        ),
    ),
    field(&["rentalType"], Rule::Choice(RentalType::WIRE_NAMES)),
    field(&["property", "type"], Rule::Choice(PropertyType::WIRE_NAMES)),
    field(
        &["property", "price", "amount"],
        Rule::Number {
            min: 0.0,
            exclusive: true,
            message: "Price must be greater than 0",
        },
    ),
    field(
        &["property", "price", "currency"],
        Rule::TextOr {
            default: DEFAULT_CURRENCY,
        },
    ),
    field(
        &["property", "price", "unit"],
        Rule::Choice(PriceUnit::WIRE_NAMES),
    ),
    field(
        &["property", "capacity", "rooms"],
        at_least(1, "At least one room is required"),
    ),
    field(
        &["property", "capacity", "beds"],
        at_least(1, "At least one bed is required"),
    ),
    field(
        &["property", "capacity", "bathrooms"],
        at_least(1, "At least one bathroom is required"),
    ),
    field(
        &["property", "capacity", "guests", "adults"],
        at_least(1, "At least one adult is required"),
    ),
    field(
        &["property", "capacity", "guests", "children"],
        at_least(0, "Cannot be negative"),
    ),
    field(
        &["property", "address", "country"],
        text(1, "Country is required"),
    ),
    field(&["property", "address", "city"], text(1, "City is required")),
    field(
        &["property", "address", "street"],
        text(1, "Street is required"),
    ),
    field(
        &["property", "address", "postal_code"],
        at_least(1, "Postal code is required"),
    ),
    field(
        &["property", "address", "region"],
        text(1, "Region is required"),
    ),
    field(&["property", "address", "additionalInfo"], Rule::OptionalText),
    field(
        &["property", "livingArea", "value"],
        Rule::Number {
            min: 1.0,
            exclusive: false,
            message: "Living area is required",
        },
    ),
    field(
        &["property", "livingArea", "unit"],
        Rule::Choice(MeasureUnit::WIRE_NAMES),
    ),
    field(
        &["property", "livingArea", "symbol"],
        Rule::Choice(MeasureSymbol::WIRE_NAMES),
    ),
    field(&["property", "amenities", "wifi"], Rule::Flag),
    field(&["property", "amenities", "kitchen"], Rule::Flag),
    field(&["property", "amenities", "tv"], Rule::Flag),
    field(&["property", "amenities", "airConditioning"], Rule::Flag),
    field(&["property", "amenities", "heating"], Rule::Flag),
    field(&["property", "amenities", "parking"], Rule::Flag),
    field(&["property", "amenities", "pool"], Rule::Flag),
    field(&["property", "amenities", "gym"], Rule::Flag),
    field(&["property", "amenities", "petFriendly"], Rule::Flag),
    field(&["property", "amenities", "smokingAllowed"], Rule::Flag),
];

/// Validation messages keyed by dotted field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The errors whose path equals or lies underneath one of `prefixes`.
    pub fn under(&self, prefixes: &[&str]) -> FieldErrors {
        let prefixes: Vec<FieldPath> = prefixes
            .iter()
            .filter_map(|prefix| FieldPath::parse(prefix).ok())
            .collect();
        let errors = self
            .0
            .iter()
            .filter(|(path, _)| {
                FieldPath::parse(path).is_ok_and(|path| {
                    prefixes.iter().any(|prefix| path.starts_with(prefix))
                })
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        FieldErrors(errors)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(path, message)| format!("{path}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// The value a fresh creation form starts from: every amenity off.
pub fn initial_candidate() -> Value {
    let amenities: Map<String, Value> = Amenities::FIELDS
        .iter()
        .map(|(wire, _)| (wire.to_string(), Value::Bool(false)))
        .collect();
    json!({ "property": { "amenities": amenities } })
}

/// The field that follows from setting `path` to `value`, if any.
///
/// Picking a living-area unit selects the matching symbol.
pub fn follow_up(path: &str, value: &Value) -> Option<(&'static str, Value)> {
    if path != LIVING_AREA_UNIT {
        return None;
    }
    let unit = MeasureUnit::from_wire(value.as_str()?)?;
    Some((LIVING_AREA_SYMBOL, Value::from(unit.symbol().as_str())))
}

/// Validate one field of the candidate.
///
/// Returns `None` when the field is valid or has no rule.
pub fn validate_field(candidate: &Value, path: &str) -> Option<String> {
    let rule = AD_RULES
        .iter()
        .find(|rule| FieldPath::from_keys(rule.path).to_string() == path)?;
    let value = FieldPath::from_keys(rule.path).get(candidate);
    check(&rule.rule, value).err().map(str::to_string)
}

/// Validate every field, returning the normalized record or all errors.
pub fn validate(candidate: &Value) -> Result<AdDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut normalized = Value::Object(Map::new());

    for rule in AD_RULES {
        let path = FieldPath::from_keys(rule.path);
        match check(&rule.rule, path.get(candidate)) {
            Ok(Some(value)) => path.set(&mut normalized, value),
            Ok(None) => {}
            Err(message) => errors.insert(path.to_string(), message),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(normalized).map_err(|e| {
        tracing::error!("Normalized ad draft failed to deserialize: {e}");
        let mut errors = FieldErrors::new();
        errors.insert("", e.to_string());
        errors
    })
}

/// Check one value against a rule, returning its normalized form.
///
/// `Ok(None)` means the field is valid and should be left out.
fn check(rule: &Rule, value: Option<&Value>) -> Result<Option<Value>, &'static str> {
    let value = value.filter(|v| !v.is_null());

    match *rule {
        Rule::Text { min_len, message } => match value {
            None => Err(REQUIRED),
            Some(Value::String(s)) if s.chars().count() < min_len => {
                Err(message)
            }
            Some(v @ Value::String(_)) => Ok(Some(v.clone())),
            Some(_) => Err(EXPECTED_TEXT),
        },
        Rule::OptionalText => match value {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(v @ Value::String(_)) => Ok(Some(v.clone())),
            Some(_) => Err(EXPECTED_TEXT),
        },
        Rule::TextOr { default } => match value {
            None => Ok(Some(Value::from(default))),
            Some(v @ Value::String(_)) => Ok(Some(v.clone())),
            Some(_) => Err(EXPECTED_TEXT),
        },
        Rule::Number {
            min,
            exclusive,
            message,
        } => {
            let n = number(value)?;
            let in_range = if exclusive { n > min } else { n >= min };
            if !in_range {
                return Err(message);
            }
            Ok(Some(Value::from(n)))
        }
        Rule::Integer { min, message } => {
            let n = number(value)?;
            if n.fract() != 0.0 {
                return Err(EXPECTED_WHOLE_NUMBER);
            }
            if n > u32::MAX as f64 {
                return Err(NUMBER_TOO_LARGE);
            }
            if n < min as f64 {
                return Err(message);
            }
            Ok(Some(Value::from(n as u64)))
        }
        Rule::Choice(members) => match value {
            None => Err(REQUIRED),
            Some(Value::String(s)) if members.contains(&s.as_str()) => {
                Ok(Some(Value::String(s.clone())))
            }
            Some(_) => Err(INVALID_CHOICE),
        },
        Rule::Flag => match value {
            None => Ok(Some(Value::Bool(false))),
            Some(v @ Value::Bool(_)) => Ok(Some(v.clone())),
            Some(_) => Err(EXPECTED_FLAG),
        },
    }
}

fn number(value: Option<&Value>) -> Result<f64, &'static str> {
    match value {
        None => Err(REQUIRED),
        Some(Value::Number(n)) => {
            n.as_f64().filter(|n| n.is_finite()).ok_or(EXPECTED_NUMBER)
        }
        Some(_) => Err(EXPECTED_NUMBER),
    }
}
