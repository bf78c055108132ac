//! Custom serialization for Record.
//!
//! ## Write Format (Serialization)
//!
//! Records serialize as a flat JSON object: `{"name": "Contoso", "level": 2}`.
//! Null fields are skipped, matching what the backend expects from form
//! submissions (absent key, not `null`).
//!
//! ## Read Format (Deserialization)
//!
//! Backend responses carry plain JSON objects. Scalars fold into typed
//! variants: integers fitting i32 become `Int`, larger ones `Long`, floats
//! `Float`, RFC 3339 strings `DateTime`, `YYYY-MM-DD` strings `Date`.
//! Arrays and objects are kept as `Json` fallback values.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Serialization (for writes)
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;

        for (key, value) in &self.fields {
            match value {
                // Null values should not be serialized
                Value::Null => {}
                _ => {
                    map.serialize_entry(key, value)?;
                }
            }
        }

        map.end()
    }
}

// =============================================================================
// Deserialization (from reads)
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a table record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            record.fields.insert(key, json_value_to_value(value));
        }

        Ok(record)
    }
}

/// Converts a serde_json::Value to our Value enum.
fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Value::Int(i as i32)
                } else {
                    Value::Long(i)
                }
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        serde_json::Value::String(s) => {
            // Try to parse as DateTime (ISO 8601)
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                Value::DateTime(dt.with_timezone(&chrono::Utc))
            }
            // Try to parse as a plain date
            else if let Ok(d) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Value::Date(d)
            }
            // Otherwise keep as string
            else {
                Value::String(s)
            }
        }
        // Arrays and objects stay opaque; field accessors dig into them
        serde_json::Value::Array(arr) => Value::Json(serde_json::Value::Array(arr)),
        serde_json::Value::Object(obj) => Value::Json(serde_json::Value::Object(obj)),
    }
}
