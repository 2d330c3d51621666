//! Mermatic Core Framework
//!
//! This crate provides the shared construction, validation, and serialization
//! framework that every Mermatic diagram builder instantiates. It includes:
//!
//! - **Mode gate**: The [`Mode`] flag deciding whether arguments are validated
//!   ([`mode`] module)
//! - **Validation**: Guard predicates producing typed failures ([`guard`] module)
//! - **Errors**: The reason-coded [`error::BuildError`] type
//! - **Configuration**: Frontmatter rendering options ([`config`] module)
//! - **Frontmatter**: The optional YAML header block emitter ([`frontmatter`] module)
//! - **Text**: Indentation, number formatting, and label quoting primitives
//!   ([`text`] module)

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod guard;
pub mod mode;
pub mod text;

pub use config::{ChartLayout, DiagramConfig, Look, Theme};
pub use error::BuildError;
pub use mode::Mode;
