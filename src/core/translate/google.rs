use std::time::Duration;

use serde_json::Value;

use super::{ProviderError, TranslationProvider};

/// Google Translate's public `translate_a/single` endpoint (`client=gtx`).
pub struct GoogleTranslate {
    agent: ureq::Agent,
    endpoint: String,
}

impl GoogleTranslate {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }
}

impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        let response = self
            .agent
            .get(&self.endpoint)
            .query("client", "gtx")
            .query("sl", source)
            .query("tl", target)
            .query("dt", "t")
            .query("q", text)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, _) => ProviderError::Http { status },
                ureq::Error::Transport(transport) => {
                    ProviderError::Transport(transport.to_string())
                }
            })?;

        let body: Value = response
            .into_json()
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        parse_response(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The body looks like `[[["Hola ","Hello ",...],["mundo","world",...]],null,"en",...]`.
fn parse_response(body: &Value) -> Result<String, ProviderError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Decode("missing translation segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(translated)
}
