//! Core engine shared by the commands.
//!
//! ## Module Structure
//!
//! - `context`: Project root, configuration and resolved paths
//! - `file_scanner`: Source file discovery
//! - `source`: A loaded source file with line lookup
//! - `stats`: Ordered run statistics
//! - `analyzer`: Static analysis run over sources, project and locales
//! - `locale`: Locale trees, skip policy, dictionaries, diff and sync
//! - `translate`: Machine translation providers and the per-run cache

pub mod analyzer;
pub mod context;
pub mod file_scanner;
pub mod locale;
pub mod source;
pub mod stats;
pub mod translate;

pub use analyzer::{AnalysisReport, analyze};
pub use context::ProjectContext;
