//! Machine translation.
//!
//! - `TranslationProvider`: the seam to an external translation service
//! - `google`: Google Translate public endpoint over HTTP
//! - `cache`: per-run cache with request pacing in front of a provider

pub mod cache;
pub mod google;

use thiserror::Error;

pub use cache::{CachedTranslator, MachineOutcome};
pub use google::GoogleTranslate;

/// Failure reported by a translation provider. Never fatal to a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider responded with HTTP {status}")]
    Http { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("provider returned an empty translation")]
    EmptyResponse,
}

/// A best-effort external translation service.
pub trait TranslationProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target` language codes.
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError>;
}
