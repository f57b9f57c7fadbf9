//! Test utilities for cubestage development.
//!
//! Provides sample stage documents ([`fixtures`]), an in-memory
//! [`StageStore`](cubestage_session::StageStore) ([`MemoryStore`]) and
//! seeded random documents ([`random_document`]) for property tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
mod random;
mod store;

pub use random::random_document;
pub use store::MemoryStore;
