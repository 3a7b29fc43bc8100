//! Parley - static analysis and translation sync for next-intl projects
//!
//! Parley scans a Next.js project for internationalization, responsive,
//! accessibility and performance problems, and keeps every target locale
//! file in line with the baseline locale using dictionaries and optional
//! machine translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`analyze`, `sync`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Project context, analyzer driver, locale trees and translation
//! - `issues`: Finding types and the `Report` trait
//! - `rules`: Detection rules, one module per concern
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
