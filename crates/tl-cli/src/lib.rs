//! Trunk-and-branch timeline CLI library.
//!
//! This crate hosts the core renderer: it loads project JSON, applies
//! configuration, and realizes the abstract drawing instructions as SVG.

mod cli;
pub mod commands;
mod config;
pub mod svg;

pub use cli::{Cli, Commands};
pub use config::Config;
