//! Declarative field specifications for seed record mapping

use super::Value;

/// The literal emitted for fields that are tracked but not yet collected
pub const PLACEHOLDER: &str = "to_be_filled";

/// How one target field derives its value from a source record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Target field name, as sent to the API
    pub name: String,
    /// Where the value comes from
    pub source: FieldSource,
    /// What to do when the source value is missing or null
    pub missing: MissingPolicy,
    /// Type coercion applied to the resolved value
    pub coerce: Coerce,
}

/// Source of a target field's value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    /// Copy from the named source column
    Column(String),
    /// Fixed value, wins unconditionally over source data
    Constant(Value),
}

/// Policy when the resolved value is missing or null
#[derive(Debug, Clone, PartialEq)]
pub enum MissingPolicy {
    /// Missing value is a mapping error
    Required,
    /// Substitute a default value
    Default(Value),
}

/// Coercion applied to the resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerce {
    /// Take the value as-is
    None,
    /// Render as text; null becomes the empty string. Keeps leading zeros on
    /// phone-number-like columns that spreadsheet readers turn numeric.
    Text,
    /// Parse a day-first date string into an ISO-8601 date; missing or
    /// unparseable input substitutes the current date.
    DayFirstDate,
}

impl FieldSpec {
    /// Identity copy of a required source column
    pub fn column(name: impl Into<String>) -> Self {
        let name = name.into();
        FieldSpec {
            source: FieldSource::Column(name.clone()),
            name,
            missing: MissingPolicy::Required,
            coerce: Coerce::None,
        }
    }

    /// Copy from a source column with a different name than the target field
    pub fn renamed(name: impl Into<String>, source_column: impl Into<String>) -> Self {
        FieldSpec {
            name: name.into(),
            source: FieldSource::Column(source_column.into()),
            missing: MissingPolicy::Required,
            coerce: Coerce::None,
        }
    }

    /// Fixed constant value, ignoring source data entirely
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        FieldSpec {
            name: name.into(),
            source: FieldSource::Constant(value.into()),
            missing: MissingPolicy::Required,
            coerce: Coerce::None,
        }
    }

    /// Constant `"to_be_filled"` marker
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::constant(name, PLACEHOLDER)
    }

    /// Substitute a default when the source value is missing or null
    pub fn or(mut self, default: impl Into<Value>) -> Self {
        self.missing = MissingPolicy::Default(default.into());
        self
    }

    /// Render the value as text (null becomes the empty string)
    pub fn text(mut self) -> Self {
        self.coerce = Coerce::Text;
        self.missing = MissingPolicy::Default(Value::String(String::new()));
        self
    }

    /// Parse the value as a day-first date
    pub fn day_first_date(mut self) -> Self {
        self.coerce = Coerce::DayFirstDate;
        self
    }

    /// Human-readable description of this spec, for logs
    pub fn describe(&self) -> String {
        match &self.source {
            FieldSource::Constant(v) => format!("{} = constant({})", self.name, v),
            FieldSource::Column(col) if *col == self.name => format!("{} = copy", self.name),
            FieldSource::Column(col) => format!("{} = copy({})", self.name, col),
        }
    }
}

/// Error while mapping a source record onto a field spec list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A required field had no constant, no source value, and no default
    MissingRequiredField { field: String },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingRequiredField { field } => {
                write!(f, "missing required field '{}'", field)
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_spec_defaults() {
        let spec = FieldSpec::column("empId");
        assert_eq!(spec.name, "empId");
        assert_eq!(spec.source, FieldSource::Column("empId".into()));
        assert_eq!(spec.missing, MissingPolicy::Required);
        assert_eq!(spec.coerce, Coerce::None);
    }

    #[test]
    fn test_text_implies_empty_default() {
        let spec = FieldSpec::column("phno").text();
        assert_eq!(spec.coerce, Coerce::Text);
        assert_eq!(
            spec.missing,
            MissingPolicy::Default(Value::String(String::new()))
        );
    }

    #[test]
    fn test_placeholder_is_constant() {
        let spec = FieldSpec::placeholder("qualification");
        assert_eq!(
            spec.source,
            FieldSource::Constant(Value::String(PLACEHOLDER.into()))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(FieldSpec::column("name").describe(), "name = copy");
        assert_eq!(
            FieldSpec::renamed("dept", "department").describe(),
            "dept = copy(department)"
        );
        assert_eq!(
            FieldSpec::constant("campus", "EC").describe(),
            "campus = constant(EC)"
        );
    }

    #[test]
    fn test_map_error_display() {
        let err = MapError::MissingRequiredField {
            field: "empId".into(),
        };
        assert_eq!(err.to_string(), "missing required field 'empId'");
    }
}
