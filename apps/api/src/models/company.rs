use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Structured summary of a company used to steer every generation prompt.
///
/// Produced fresh per request by the company resolver; never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub mission_statement: String,
    #[serde(default)]
    pub values: CompanyValues,
    #[serde(default)]
    pub culture: String,
}

/// Ordered `key -> text` pairs describing a company's values.
///
/// The formatter emits either a list of strings or a mapping. A list is keyed
/// by position (`"0"`, `"1"`, ...), so both shapes flatten the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyValues(Vec<(String, String)>);

impl CompanyValues {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Renders the values as `"key: value"` pairs joined by `", "`, in order.
    pub fn flatten(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Builds values from an arbitrary JSON node.
    ///
    /// Objects keep their key order, arrays are keyed by index, a bare string
    /// becomes a single entry, and anything else yields no values.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::new(
                map.iter()
                    .map(|(k, v)| (k.clone(), value_text(v)))
                    .collect(),
            ),
            Value::Array(items) => Self::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), value_text(v)))
                    .collect(),
            ),
            Value::String(s) if !s.is_empty() => Self::new(vec![("0".to_string(), s.clone())]),
            _ => Self::default(),
        }
    }
}

/// Text form of a JSON node: strings unquoted, everything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Serialize for CompanyValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CompanyValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CompanyValuesVisitor)
    }
}

struct CompanyValuesVisitor;

impl<'de> Visitor<'de> for CompanyValuesVisitor {
    type Value = CompanyValues;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of company values or a list of value strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            pairs.push((key, value_text(&value)));
        }
        Ok(CompanyValues(pairs))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::new();
        while let Some(value) = access.next_element::<Value>()? {
            pairs.push((pairs.len().to_string(), value_text(&value)));
        }
        Ok(CompanyValues(pairs))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(CompanyValues::from_json(&Value::String(v.to_string())))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CompanyValues::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CompanyValues::default())
    }
}
