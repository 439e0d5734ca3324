//! Part data model.
//!
//! Attributes are a free-form semantic bag: the same meaning may live under
//! Portuguese or English keys depending on the data source, so consumers read
//! them through an ordered alias probe rather than a single key.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attribute value: number, boolean, or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Numeric view of the value. Numeric-looking text parses; booleans and
    /// other text do not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            AttrValue::Text(s) => s.trim().parse().ok(),
            AttrValue::Bool(_) => None,
        }
    }

    /// String view of the value; only `Text` qualifies.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a JSON scalar. Nulls, arrays, and objects have no attribute
    /// representation and map to `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<AttrValue> {
        match value {
            serde_json::Value::Bool(b) => Some(AttrValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(AttrValue::Int(i))
                } else {
                    n.as_f64().map(AttrValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(AttrValue::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Attribute bag keyed by attribute name. Sorted keys keep exports
/// deterministic.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A catalog entry. `category` holds the canonical form once the part has
/// been registered in a [`super::Catalog`]. Prices are in Brazilian Real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub category: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Part {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            price,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Probe an ordered list of alias keys and return the first present
    /// value. This is how every semantic read goes through the bag.
    pub fn attr(&self, aliases: &[&str]) -> Option<&AttrValue> {
        aliases.iter().find_map(|key| self.attributes.get(*key))
    }

    /// Alias probe with a string view of the result.
    pub fn attr_str(&self, aliases: &[&str]) -> Option<&str> {
        self.attr(aliases).and_then(AttrValue::as_str)
    }

    /// Alias probe with a numeric view of the result.
    pub fn attr_f64(&self, aliases: &[&str]) -> Option<f64> {
        self.attr(aliases).and_then(AttrValue::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_probe_returns_first_present_alias() {
        let part = Part::new("cpu_1", "CPU", "Ryzen 5 5600", 750.0)
            .with_attribute("soquete", AttrValue::Text("AM4".to_string()))
            .with_attribute("tdp_w", AttrValue::Int(65));

        assert_eq!(part.attr_str(&["socket", "soquete"]), Some("AM4"));
        assert_eq!(part.attr_f64(&["tdp_w", "tdp"]), Some(65.0));
        assert_eq!(part.attr(&["length_mm"]), None);
    }

    #[test]
    fn test_as_f64_parses_numeric_text() {
        assert_eq!(AttrValue::Text("650".to_string()).as_f64(), Some(650.0));
        assert_eq!(AttrValue::Text(" 158.5 ".to_string()).as_f64(), Some(158.5));
        assert_eq!(AttrValue::Text("DDR4".to_string()).as_f64(), None);
        assert_eq!(AttrValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_from_json_scalars_only() {
        assert_eq!(
            AttrValue::from_json(&serde_json::json!(280)),
            Some(AttrValue::Int(280))
        );
        assert_eq!(
            AttrValue::from_json(&serde_json::json!(1.75)),
            Some(AttrValue::Float(1.75))
        );
        assert_eq!(
            AttrValue::from_json(&serde_json::json!("Gold")),
            Some(AttrValue::Text("Gold".to_string()))
        );
        assert_eq!(AttrValue::from_json(&serde_json::json!(null)), None);
        assert_eq!(AttrValue::from_json(&serde_json::json!([1, 2])), None);
    }

    #[test]
    fn test_part_serde_roundtrip() {
        let part = Part::new("gpu_1", "GPU", "RTX 3060 12GB", 1800.0)
            .with_attribute("length_mm", AttrValue::Int(280))
            .with_attribute("tdp_w", AttrValue::Int(170));

        let json = serde_json::to_string(&part).unwrap();
        let back: Part = serde_json::from_str(&json).unwrap();
        assert_eq!(part, back);
    }

    #[test]
    fn test_untagged_attr_value_shapes() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"watt": 650, "cert": "Gold", "modular": true, "len": 28.5}"#)
                .unwrap();
        assert_eq!(attrs["watt"], AttrValue::Int(650));
        assert_eq!(attrs["cert"], AttrValue::Text("Gold".to_string()));
        assert_eq!(attrs["modular"], AttrValue::Bool(true));
        assert_eq!(attrs["len"], AttrValue::Float(28.5));
    }
}
