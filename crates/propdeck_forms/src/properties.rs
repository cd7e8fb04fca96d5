use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Number(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            PropertyValue::DateTime(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        PropertyValue::DateTime(d)
    }
}

/// One requested change to a custom property: either set a typed value or
/// remove whatever was previously set for the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyUpdate {
    Clear,
    Set(PropertyValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingProperty {
    pub key: String,
    pub update: PropertyUpdate,
}

impl PendingProperty {
    pub fn new(key: impl Into<String>, update: PropertyUpdate) -> Self {
        Self { key: key.into(), update }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, PropertyUpdate::Set(PropertyValue::String(value.into())))
    }

    pub fn number(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, PropertyUpdate::Set(PropertyValue::Number(value)))
    }

    pub fn boolean(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, PropertyUpdate::Set(PropertyValue::Boolean(value)))
    }

    pub fn datetime(key: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(key, PropertyUpdate::Set(PropertyValue::DateTime(value)))
    }

    pub fn clear(key: impl Into<String>) -> Self {
        Self::new(key, PropertyUpdate::Clear)
    }
}

/// The batch handed whole to the reporting sink: key -> typed value.
/// Built by folding pending properties in order, so a later entry for a key
/// overrides an earlier one and a later `Clear` removes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBatch {
    properties: HashMap<String, PropertyValue>,
}

impl PropertyBatch {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Fold pending properties into a batch, preserving submission order.
    pub fn from_pending<'a>(pending: impl IntoIterator<Item = &'a PendingProperty>) -> Self {
        let mut batch = Self::new();
        for property in pending {
            batch.apply(property);
        }
        batch
    }

    pub fn apply(&mut self, property: &PendingProperty) {
        match &property.update {
            PropertyUpdate::Clear => {
                self.properties.remove(&property.key);
            }
            PropertyUpdate::Set(value) => {
                self.properties.insert(property.key.clone(), value.clone());
            }
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.properties.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_number())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_datetime(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).and_then(|v| v.as_datetime())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.properties.iter()
    }
}
