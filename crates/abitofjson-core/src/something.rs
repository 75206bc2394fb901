use serde::Serialize;

/// A named entity extracted from the `something` field of a JSON payload.
///
/// The name is set at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Something {
    name: String,
}

impl Something {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
