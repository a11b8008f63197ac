use regex::Regex;
use serde::{Deserialize, Serialize};

/// A clinical occurrence spanning the closed day interval `[start, end]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub event: EventData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

impl EventAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Event {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            event: EventData::default(),
        }
    }

    pub fn point(day: i64) -> Self {
        Self::new(day, day)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.event.attributes.push(EventAttribute::new(key, value));
        self
    }

    pub fn attributes(&self) -> &[EventAttribute] {
        &self.event.attributes
    }

    /// Closed-interval overlap with `[start, end]`.
    pub fn intersects(&self, start: i64, end: i64) -> bool {
        self.start <= end && self.end >= start
    }
}

/// Matcher used to look up an attribute by key.
#[derive(Debug, Clone)]
pub enum AttributeKey {
    Exact(String),
    Pattern(Regex),
}

impl AttributeKey {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            AttributeKey::Exact(name) => name == key,
            AttributeKey::Pattern(re) => re.is_match(key),
        }
    }
}

impl From<&str> for AttributeKey {
    fn from(value: &str) -> Self {
        AttributeKey::Exact(value.to_string())
    }
}

impl From<String> for AttributeKey {
    fn from(value: String) -> Self {
        AttributeKey::Exact(value)
    }
}

impl From<Regex> for AttributeKey {
    fn from(value: Regex) -> Self {
        AttributeKey::Pattern(value)
    }
}

/// Value of the first attribute, in stored order, whose key matches.
pub fn get_attribute_value<'e>(key: &AttributeKey, event: &'e Event) -> Option<&'e str> {
    event
        .attributes()
        .iter()
        .find(|a| key.matches(&a.key))
        .map(|a| a.value.as_str())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/event.rs"]
mod tests;
