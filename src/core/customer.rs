//! Customer records and their identifiers.

use crate::core::interaction::Interaction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned to a customer by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A tracked customer with an append-only interaction history.
///
/// The id is fixed at creation. Name and surname may be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    surname: String,
    interactions: Vec<Interaction>,
}

impl Customer {
    /// Create a customer with an empty history.
    ///
    /// Only the store hands out ids; this is `pub(crate)` so callers go
    /// through [`CustomerStore::add_customer`](crate::core::CustomerStore::add_customer).
    pub(crate) fn new(id: CustomerId, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            interactions: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Interactions in the order they were recorded.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Replace name and surname. Interactions are untouched.
    pub(crate) fn rename(&mut self, name: impl Into<String>, surname: impl Into<String>) {
        self.name = name.into();
        self.surname = surname.into();
    }

    pub(crate) fn push_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    /// Whether this customer matches a search query exactly.
    ///
    /// Matches on name, surname, or the decimal form of the id. Case-sensitive.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name == query || self.surname == query || self.id.to_string() == query
    }
}
