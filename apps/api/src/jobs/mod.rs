// Record store for tracked job applications.
// Persistence is a single JSON document; see store.rs for the write policy.

pub mod handlers;
pub mod stats;
pub mod store;
pub mod validation;
