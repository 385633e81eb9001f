//! Project raw records onto a declared field set

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;

use super::source::RawRecord;
use super::spec::{Coerce, FieldSource, FieldSpec, MapError, MissingPolicy};
use super::Value;

/// A record normalized to exactly the declared field set, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MappedRecord {
    fields: IndexMap<String, Value>,
}

impl MappedRecord {
    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// The record's identifying key, rendered as text
    pub fn key(&self, key_field: &str) -> String {
        match self.fields.get(key_field) {
            Some(v) if !v.is_null() => v.to_text(),
            _ => "(unknown)".to_string(),
        }
    }

    /// Convert to a JSON object, preserving field order
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Map one raw record onto an ordered field spec list.
///
/// Resolution order per field: a constant source wins unconditionally, then
/// the named source column, then the missing-value policy. The output carries
/// exactly the declared fields, in declaration order, no matter what extra
/// columns the source record had.
pub fn map_record(record: &RawRecord, specs: &[FieldSpec]) -> Result<MappedRecord, MapError> {
    map_record_on(record, specs, Local::now().date_naive())
}

/// Same as [`map_record`] with the current date injected, so date fallback
/// behavior is deterministic under test.
pub fn map_record_on(
    record: &RawRecord,
    specs: &[FieldSpec],
    today: NaiveDate,
) -> Result<MappedRecord, MapError> {
    let mut fields = IndexMap::with_capacity(specs.len());
    for spec in specs {
        let value = resolve_field(record, spec, today)?;
        fields.insert(spec.name.clone(), value);
    }
    Ok(MappedRecord { fields })
}

fn resolve_field(record: &RawRecord, spec: &FieldSpec, today: NaiveDate) -> Result<Value, MapError> {
    let column = match &spec.source {
        FieldSource::Constant(value) => return Ok(value.clone()),
        FieldSource::Column(column) => column,
    };

    let raw = record.get(column).filter(|v| !v.is_null());
    match raw {
        Some(value) => Ok(coerce(spec.coerce, value, today)),
        None => match &spec.missing {
            MissingPolicy::Default(default) => Ok(default.clone()),
            // A date field with no value still gets the current-date fallback
            MissingPolicy::Required if spec.coerce == Coerce::DayFirstDate => {
                Ok(Value::Date(today))
            }
            MissingPolicy::Required => Err(MapError::MissingRequiredField {
                field: spec.name.clone(),
            }),
        },
    }
}

fn coerce(kind: Coerce, raw: &serde_json::Value, today: NaiveDate) -> Value {
    let value = Value::from_json(raw);
    match kind {
        Coerce::None => value,
        Coerce::Text => Value::String(value.to_text()),
        Coerce::DayFirstDate => {
            Value::Date(parse_day_first(&value.to_text()).unwrap_or(today))
        }
    }
}

/// Parse a day-first date string ("31/12/2024", "31-12-2024", ...).
/// ISO dates are accepted too since cleaned exports already use them.
fn parse_day_first(s: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y", "%Y-%m-%d"];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_output_fields_match_declaration_order() {
        let record = json!({"b": 2, "a": 1, "extra": "dropped"});
        let specs = vec![FieldSpec::column("a"), FieldSpec::column("b")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.field_names(), vec!["a", "b"]);
        assert_eq!(mapped.get("extra"), None);
    }

    #[test]
    fn test_extra_columns_never_leak() {
        let record = json!({"empId": "E1", "internalNote": "do not send"});
        let specs = vec![FieldSpec::column("empId")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.len(), 1);
        assert_eq!(
            mapped.to_json(),
            json!({"empId": "E1"})
        );
    }

    #[test]
    fn test_constant_override_wins_over_source() {
        let record = json!({"campus": "RR"});
        let specs = vec![FieldSpec::constant("campus", "EC")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("campus"), Some(&Value::String("EC".into())));
    }

    #[test]
    fn test_placeholder_ignores_populated_source() {
        let record = json!({"qualification": "PhD"});
        let specs = vec![FieldSpec::placeholder("qualification")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(
            mapped.get("qualification"),
            Some(&Value::String("to_be_filled".into()))
        );
    }

    #[test]
    fn test_missing_phone_maps_to_empty_string() {
        let record = json!({"empId": "E1"});
        let specs = vec![FieldSpec::column("phno").text()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("phno"), Some(&Value::String(String::new())));
    }

    #[test]
    fn test_null_phone_maps_to_empty_string() {
        let record = json!({"phno": null});
        let specs = vec![FieldSpec::column("phno").text()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("phno"), Some(&Value::String(String::new())));
    }

    #[test]
    fn test_numeric_phone_renders_as_text() {
        // Spreadsheet readers surface numeric cells as floats
        let record = json!({"phno": 9901234567.0});
        let specs = vec![FieldSpec::column("phno").text()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("phno"), Some(&Value::String("9901234567".into())));
    }

    #[test]
    fn test_day_first_date_parses() {
        let record = json!({"dateofJoining": "15/08/2019"});
        let specs = vec![FieldSpec::column("dateofJoining").day_first_date()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(
            mapped.get("dateofJoining"),
            Some(&Value::Date(NaiveDate::from_ymd_opt(2019, 8, 15).unwrap()))
        );
    }

    #[test]
    fn test_unparseable_date_falls_back_to_today() {
        let record = json!({"dateofJoining": "not a date"});
        let specs = vec![FieldSpec::column("dateofJoining").day_first_date()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("dateofJoining"), Some(&Value::Date(today())));
    }

    #[test]
    fn test_missing_date_falls_back_to_today() {
        let record = json!({});
        let specs = vec![FieldSpec::column("dateofJoining").day_first_date()];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("dateofJoining"), Some(&Value::Date(today())));
    }

    #[test]
    fn test_missing_required_field_errors() {
        let record = json!({"name": "x"});
        let specs = vec![FieldSpec::column("empId")];

        let result = map_record_on(&record, &specs, today());
        assert_eq!(
            result,
            Err(MapError::MissingRequiredField {
                field: "empId".into()
            })
        );
    }

    #[test]
    fn test_renamed_column() {
        let record = json!({"department": "CSE"});
        let specs = vec![FieldSpec::renamed("dept", "department")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(mapped.get("dept"), Some(&Value::String("CSE".into())));
    }

    #[test]
    fn test_default_applies_only_when_missing() {
        let record = json!({"profileImg": "https://example.org/me.png"});
        let specs = vec![FieldSpec::column("profileImg").or("https://example.org/default.png")];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        assert_eq!(
            mapped.get("profileImg"),
            Some(&Value::String("https://example.org/me.png".into()))
        );

        let empty = json!({});
        let mapped = map_record_on(&empty, &specs, today()).unwrap();
        assert_eq!(
            mapped.get("profileImg"),
            Some(&Value::String("https://example.org/default.png".into()))
        );
    }

    #[test]
    fn test_serialized_payload_preserves_declared_order() {
        let record = json!({"a": 1, "b": 2, "c": 3});
        let specs = vec![
            FieldSpec::column("c"),
            FieldSpec::column("a"),
            FieldSpec::column("b"),
        ];

        let mapped = map_record_on(&record, &specs, today()).unwrap();
        let body = serde_json::to_string(&mapped).unwrap();
        assert_eq!(body, r#"{"c":3,"a":1,"b":2}"#);
    }
}
