//! A single logged event in a customer's history.

use serde::{Deserialize, Serialize};

/// One interaction with a customer, e.g. an appointment or a signed contract.
///
/// Interactions are immutable once built. They have no identity of their own
/// beyond their position in the owning customer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Free-form label such as `Appointment` or `Contract`.
    #[serde(rename = "type")]
    kind: String,

    /// Free-text details.
    details: String,
}

impl Interaction {
    /// Create a new interaction.
    #[must_use]
    pub fn new(kind: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            details: details.into(),
        }
    }

    /// The interaction type label.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}
