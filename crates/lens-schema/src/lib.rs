//! # lens-schema
//!
//! JSON Schema generation, validation, and registry for Lens.
//!
//! This crate provides:
//! - `SchemaRegistry`: the JSON Schemas of the input document and the report
//! - `SessionValidator`: shape/type conformance of a raw decoded document,
//!   reporting the first offending field path, followed by typed decoding
//!
//! ## Architecture
//!
//! Entity types are defined in `lens-core` with `#[derive(JsonSchema)]`.
//! This crate turns them into schemas, tightens the input schema so that every
//! declared key must be present (nullable fields accept an explicit `null` but
//! not a missing key), and runs `jsonschema` over raw values.

mod error;
mod registry;
mod validator;

pub use error::SchemaError;
pub use registry::{REPORT, SESSION_DATA, SchemaRegistry};
pub use validator::{SessionValidator, validate_session_data};
