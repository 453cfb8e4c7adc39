//! Capa Core -- provider-agnostic model capability kernel
//!
//! This crate holds the data model shared by every provider: capability
//! descriptors, catalogs, the provider settings bundle, merge rules for
//! custom metadata, usage/cost types and settings loading.
//!
//! Provider catalogs and the resolver live in `capa-providers`.
//! The `capa` meta-crate re-exports both.

pub mod config;
pub mod custom;
pub mod error;
pub mod merge;
pub mod models;
pub mod prelude;
pub mod settings;
pub mod types;
