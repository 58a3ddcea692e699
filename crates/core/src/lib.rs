//! # SGID Core
//!
//! Core business logic for the SGID study anonymization system.
//!
//! This crate contains pure, deterministic operations:
//! - One-way GID derivation from identifying fields (salted SHA-256)
//! - Digest truncation and base-32 encoding
//! - Placeholder pseudonym resolution against a reference name table
//!
//! **No front-end concerns**: argument parsing, environment handling, and
//! exit-status mapping belong in `sgid-cli`.

pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod fields;
pub mod hasher;
pub mod name_table;
pub mod resolver;
pub mod service;

pub use config::{resolve_names_file, CoreConfig};
pub use error::{GidError, GidResult};
pub use fields::FieldSet;
pub use name_table::{NameRecord, NameTable};
pub use service::GidService;
pub use sgid_types::Gid;
