use std::{collections::HashMap, thread, time::Duration};

use super::{ProviderError, TranslationProvider};

/// Result of asking the machine translator for one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineOutcome {
    Translated(String),
    /// The provider had nothing better than the source text.
    Unchanged,
    Failed(ProviderError),
}

/// Caches translations by `(target language, source text)` for one run and
/// paces network calls with a fixed delay.
pub struct CachedTranslator {
    provider: Box<dyn TranslationProvider>,
    source_locale: String,
    delay: Duration,
    /// `None` marks a text the provider could not translate.
    cache: HashMap<(String, String), Option<String>>,
    calls: usize,
}

impl CachedTranslator {
    pub fn new(
        provider: Box<dyn TranslationProvider>,
        source_locale: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            provider,
            source_locale: source_locale.into(),
            delay,
            cache: HashMap::new(),
            calls: 0,
        }
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn translate(&mut self, text: &str, target: &str) -> MachineOutcome {
        let cache_key = (target.to_string(), text.to_string());
        if let Some(cached) = self.cache.get(&cache_key) {
            return match cached {
                Some(translated) => MachineOutcome::Translated(translated.clone()),
                None => MachineOutcome::Unchanged,
            };
        }

        self.calls += 1;
        let result = self.provider.translate(text, &self.source_locale, target);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        match result {
            Ok(translated) if translated != text && !translated.trim().is_empty() => {
                tracing::debug!(
                    provider = self.provider.name(),
                    lang = target,
                    "translated {:?} -> {:?}",
                    text,
                    translated
                );
                self.cache.insert(cache_key, Some(translated.clone()));
                MachineOutcome::Translated(translated)
            }
            Ok(_) => {
                self.cache.insert(cache_key, None);
                MachineOutcome::Unchanged
            }
            Err(err) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    lang = target,
                    "failed to translate {:?}: {}",
                    text,
                    err
                );
                self.cache.insert(cache_key, None);
                MachineOutcome::Failed(err)
            }
        }
    }
}
