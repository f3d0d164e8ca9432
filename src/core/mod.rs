//! Customer records and the store that owns them.

pub mod customer;
pub mod interaction;
pub mod store;

pub use customer::{Customer, CustomerId};
pub use interaction::Interaction;
pub use store::{CustomerStore, LoadOutcome, StoreState};
