//! devfile-lib: parsing, composition and editing of devfile documents
//!
//! This crate provides the core machinery for working with devfiles:
//! - `schema`: the document data model and its YAML representation
//! - `merge`: the structured override engine (scalar replace, list
//!   merge-by-key, map upsert, union type checking)
//! - `document`: uniqueness-checked collection operations and the entity
//!   override API
//! - `resolve`: parent/plugin ancestor resolution with cycle detection
//!   and provenance tagging
//! - `yaml`: schema-version-aware (de)serialization

pub mod attributes;
pub mod consts;
pub mod document;
pub mod merge;
pub mod resolve;
pub mod schema;
pub mod yaml;

pub use document::{CollectionError, OverrideError};
pub use merge::MergeError;
pub use resolve::{FetchError, Fetcher, FileFetcher, HttpFetcher, ResolveError, resolve};
pub use schema::Devfile;
pub use yaml::ParseError;
