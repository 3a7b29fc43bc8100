use serde::Serialize;
use serde_json::{Map, Value};

/// Aggregate statistics of one analyzer run, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stats(Map<String, Value>);

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&mut self, name: impl Into<String>, count: usize) {
        self.0.insert(name.into(), Value::from(count));
    }

    pub fn set_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.0.insert(name.into(), Value::from(text.into()));
    }

    pub fn count(&self, name: &str) -> Option<usize> {
        self.0
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Iterate `(name, rendered value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().map(|(name, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.as_str(), rendered)
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
