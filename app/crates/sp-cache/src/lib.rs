//! Per-user cache of the benefit, offer and medicine catalogs.
//!
//! Every identity id owns one durable partition; only the partition of the
//! active identity is ever visible.

mod cache_store;
mod error;

#[cfg(test)]
mod tests;

pub use cache_store::CacheStore;
pub use error::{CacheError, Result};
