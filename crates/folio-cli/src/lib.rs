//! # folio-cli
//!
//! Diagnostic CLI for Folio access control lists.
//!
//! Builds an ACL from `--grant` arguments and either answers a permission
//! query or prints the list. Useful for checking how a grant set resolves
//! before it is written into page markup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
