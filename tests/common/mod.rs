//! Shared test utilities for hackle integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The fake Algolia server is deterministic: every
//! `(query, page)` pair must be configured up front, and unconfigured pairs
//! return an empty result page.

pub mod assertions;
pub mod builders;
pub mod fake_algolia;

pub use builders::*;
pub use fake_algolia::*;
