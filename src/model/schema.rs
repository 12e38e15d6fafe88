/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Alias tables mapping semantic field names to broker wire names
//!
//! Every payload and every response record declares one static [`AliasTable`].
//! The same table drives both directions:
//!
//! * request: semantic map -> [`AliasTable::to_wire`] -> wire map (defaults applied,
//!   excluded fields dropped, validation rules run)
//! * response: wire map -> [`AliasTable::from_wire`] -> semantic map (values checked
//!   against their [`WireKind`], text trimmed where declared)
//!
//! Rust structs only ever see semantic names; the wire names live in the tables.

use crate::error::{AppError, KisResult};
use crate::model::validation::Rule;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::str::FromStr;

/// Shape of a wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    /// Text kept as received
    Text,
    /// Fixed width text, leading and trailing whitespace removed
    Trimmed,
    /// Decimal formatted string parsed into an exact decimal
    Decimal,
    /// Like [`WireKind::Decimal`] but an empty string maps to null
    OptionalDecimal,
    /// Integer formatted string
    Integer,
}

/// One field of an alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Semantic name used by the Rust structs
    pub name: &'static str,
    /// Exact name the broker expects or returns
    pub alias: &'static str,
    /// Shape of the value on the wire
    pub kind: WireKind,
    /// Value used when the field is omitted
    pub default: Option<&'static str>,
    /// Field takes part in request composition but is never serialized
    pub exclude: bool,
    /// Constraint checked on the request direction
    pub rule: Option<Rule>,
}

impl FieldSpec {
    /// Creates a required field
    pub const fn new(name: &'static str, alias: &'static str, kind: WireKind) -> Self {
        Self {
            name,
            alias,
            kind,
            default: None,
            exclude: false,
            rule: None,
        }
    }

    /// Creates a required text field
    pub const fn text(name: &'static str, alias: &'static str) -> Self {
        Self::new(name, alias, WireKind::Text)
    }

    /// Creates a required trimmed text field
    pub const fn trimmed(name: &'static str, alias: &'static str) -> Self {
        Self::new(name, alias, WireKind::Trimmed)
    }

    /// Creates a required decimal field
    pub const fn decimal(name: &'static str, alias: &'static str) -> Self {
        Self::new(name, alias, WireKind::Decimal)
    }

    /// Creates a required integer field
    pub const fn integer(name: &'static str, alias: &'static str) -> Self {
        Self::new(name, alias, WireKind::Integer)
    }

    /// Sets the default value
    pub const fn or(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Marks the field as excluded from serialization
    pub const fn excluded(self) -> Self {
        Self {
            exclude: true,
            ..self
        }
    }

    /// Attaches a validation rule
    pub const fn rule(self, rule: Rule) -> Self {
        Self {
            rule: Some(rule),
            ..self
        }
    }

    /// Checks if the field must be present
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.exclude
    }
}

/// Static mapping between semantic names and wire aliases
#[derive(Debug)]
pub struct AliasTable {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl AliasTable {
    /// Creates a table from its field list
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Name of the schema, used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks up a field by semantic name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by wire alias
    #[must_use]
    pub fn by_alias(&self, alias: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.alias == alias)
    }

    /// Wire alias of a semantic field
    #[must_use]
    pub fn alias_of(&self, name: &str) -> Option<&'static str> {
        self.by_name(name).map(|f| f.alias)
    }

    /// Checks that names and aliases are unique within the table
    pub fn check_unique(&self) -> KisResult<()> {
        let mut names = HashSet::new();
        let mut aliases = HashSet::new();
        for field in self.fields {
            if !names.insert(field.name) {
                return Err(AppError::validation(
                    field.name,
                    format!("duplicated semantic name in {}", self.name),
                ));
            }
            if !aliases.insert(field.alias) {
                return Err(AppError::validation(
                    field.name,
                    format!("duplicated wire alias {} in {}", field.alias, self.name),
                ));
            }
        }
        Ok(())
    }

    /// Fills omitted fields with their defaults, leaving everything else untouched
    #[must_use]
    pub fn with_defaults(&self, semantic: &Map<String, Value>) -> Map<String, Value> {
        let mut out = semantic.clone();
        for field in self.fields {
            let absent = out.get(field.name).is_none_or(Value::is_null);
            if let (true, Some(default)) = (absent, field.default) {
                out.insert(field.name.to_string(), Value::String(default.to_string()));
            }
        }
        out
    }

    /// Validates every field carrying a rule without rendering the wire map
    pub fn validate(&self, semantic: &Map<String, Value>) -> KisResult<()> {
        self.to_wire(semantic).map(|_| ())
    }

    /// Renders a semantic map into a wire map
    ///
    /// Defaults are applied, excluded fields dropped, rules run and every value
    /// rendered as a string, which is what the broker expects for both query
    /// strings and JSON bodies. `Trimmed` fields are trimmed before their rule runs.
    pub fn to_wire(&self, semantic: &Map<String, Value>) -> KisResult<Map<String, Value>> {
        if let Some(unknown) = semantic.keys().find(|k| self.by_name(k).is_none()) {
            return Err(AppError::validation(
                unknown.as_str(),
                format!("unknown field for {}", self.name),
            ));
        }

        let mut wire = Map::new();
        for field in self.fields.iter().filter(|f| !f.exclude) {
            let rendered = match semantic.get(field.name).filter(|v| !v.is_null()) {
                Some(value) => render_scalar(field.name, value)?,
                None => match field.default {
                    Some(default) => default.to_string(),
                    None => return Err(AppError::validation(field.name, "is required")),
                },
            };
            let rendered = match field.kind {
                WireKind::Trimmed => rendered.trim().to_string(),
                _ => rendered,
            };
            let rendered = match &field.rule {
                Some(rule) => rule.apply(field.name, &rendered)?,
                None => rendered,
            };
            wire.insert(field.alias.to_string(), Value::String(rendered));
        }
        Ok(wire)
    }

    /// Maps a wire map back to semantic names
    ///
    /// `path` prefixes the field aliases in error reports. Unknown wire keys are ignored.
    pub fn from_wire(&self, path: &str, wire: &Map<String, Value>) -> KisResult<Map<String, Value>> {
        let mut semantic = Map::new();
        for field in self.fields.iter().filter(|f| !f.exclude) {
            let field_path = join_path(path, field.alias);
            let raw = match wire.get(field.alias).filter(|v| !v.is_null()) {
                Some(raw) => raw.clone(),
                None => match field.default {
                    Some(default) => Value::String(default.to_string()),
                    None => return Err(AppError::missing(field_path)),
                },
            };
            semantic.insert(field.name.to_string(), read_value(&field_path, field.kind, &raw)?);
        }
        Ok(semantic)
    }

    /// Decodes one wire record into a semantic struct
    pub fn decode<T: DeserializeOwned>(&self, path: &str, value: &Value) -> KisResult<T> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::schema(path, value.to_string()))?;
        let semantic = self.from_wire(path, object)?;
        serde_json::from_value(Value::Object(semantic))
            .map_err(|e| AppError::schema(path, format!("{} ({e})", value)))
    }
}

/// A semantic record decoded through an alias table
pub trait WireRecord: DeserializeOwned {
    /// Alias table of the record
    fn schema() -> &'static AliasTable;

    /// Decodes one wire record found at `path`
    fn decode(path: &str, value: &Value) -> KisResult<Self> {
        Self::schema().decode(path, value)
    }
}

fn join_path(path: &str, alias: &str) -> String {
    if path.is_empty() {
        alias.to_string()
    } else {
        format!("{path}.{alias}")
    }
}

fn render_scalar(field: &str, value: &Value) -> KisResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("Y".to_string()),
        Value::Bool(false) => Ok("N".to_string()),
        other => Err(AppError::validation(
            field,
            format!("must be a scalar value, got {other}"),
        )),
    }
}

fn raw_text(path: &str, raw: &Value) -> KisResult<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(AppError::schema(path, other.to_string())),
    }
}

fn read_value(path: &str, kind: WireKind, raw: &Value) -> KisResult<Value> {
    let text = raw_text(path, raw)?;
    match kind {
        WireKind::Text => Ok(Value::String(text)),
        WireKind::Trimmed => Ok(Value::String(text.trim().to_string())),
        WireKind::Decimal => parse_decimal(path, &text),
        WireKind::OptionalDecimal => {
            if text.trim().is_empty() {
                Ok(Value::Null)
            } else {
                parse_decimal(path, &text)
            }
        }
        WireKind::Integer => text
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| AppError::schema(path, text)),
    }
}

fn parse_decimal(path: &str, text: &str) -> KisResult<Value> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(trimmed)
        .map(|d| Value::String(d.to_string()))
        .map_err(|_| AppError::schema(path, text))
}
