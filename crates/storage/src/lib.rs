//! Storage layer for the We Win console
//!
//! One `RecordStore` per screen: an ordered, keyed, in-memory list that
//! is seeded with sample data and changed only by local add/update/remove.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keygen;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use keygen::KeyGenerator;
pub use store::RecordStore;
