//! HTTP adapter for a llama.cpp-server-style completion endpoint.
//!
//! The endpoint hosts the fine-tuned model artifact; TutorBot never
//! inspects the artifact itself, it only posts prompts to `/completion`.

use serde::Deserialize;
use serde_json::Value;

use tb_domain::config::{GenerationConfig, ModelConfig};
use tb_domain::error::{Error, Result};

use crate::traits::{Generation, TextGenerator};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A [`TextGenerator`] backed by an HTTP inference server.
pub struct HttpGenerator {
    base_url: String,
    artifact: Option<String>,
    client: reqwest::Client,
}

impl HttpGenerator {
    /// Create a new adapter from the deserialized model config.
    ///
    /// The request deadline doubles as the external generation deadline:
    /// the backend has no cancellation of its own, so expiry surfaces as a
    /// recoverable [`Error::Timeout`].
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
            artifact: cfg.artifact.clone(),
            client,
        })
    }

    /// Build the completion request body. Knobs map one-to-one onto the
    /// llama.cpp server wire format; greedy decoding is requested by
    /// zeroing the temperature.
    fn request_body(&self, prompt: &str, params: &GenerationConfig) -> Value {
        let mut body = serde_json::json!({
            "prompt": prompt,
            "n_predict": params.max_new_tokens,
            "top_k": params.top_k,
            "top_p": params.top_p,
            "repeat_penalty": params.repetition_penalty,
            "temperature": if params.do_sample { params.temperature } else { 0.0 },
        });
        if let Some(ref artifact) = self.artifact {
            body["model"] = Value::String(artifact.clone());
        }
        body
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Wire types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    content: String,
    #[serde(default)]
    tokens_evaluated: Option<u32>,
    #[serde(default)]
    tokens_predicted: Option<u32>,
}

#[async_trait::async_trait]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str, params: &GenerationConfig) -> Result<Generation> {
        let url = format!("{}/completion", self.base_url);
        let body = self.request_body(prompt, params);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!(
                "inference server returned {status}: {detail}"
            )));
        }

        let completion: CompletionResponse =
            response.json().await.map_err(from_reqwest)?;

        tracing::debug!(
            tokens_evaluated = ?completion.tokens_evaluated,
            tokens_predicted = ?completion.tokens_predicted,
            "completion received"
        );

        Ok(Generation {
            // Completion endpoints return only the new text; the codec's
            // span extraction needs the echoed prompt, so restore it.
            text: format!("{prompt}{}", completion.content),
            token_count: total_tokens(&completion),
        })
    }

    fn id(&self) -> &str {
        self.artifact.as_deref().unwrap_or("completion-endpoint")
    }
}

/// Total tokens processed: prompt plus new tokens, when reported.
fn total_tokens(completion: &CompletionResponse) -> Option<u32> {
    match (completion.tokens_evaluated, completion.tokens_predicted) {
        (Some(evaluated), Some(predicted)) => Some(evaluated + predicted),
        (None, predicted) => predicted,
        (evaluated, None) => evaluated,
    }
}

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeout errors map to [`Error::Timeout`]; everything else maps to
/// [`Error::Http`].
fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(artifact: Option<&str>) -> HttpGenerator {
        HttpGenerator::from_config(&ModelConfig {
            artifact: artifact.map(String::from),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn body_threads_knobs_through_unchanged() {
        let params = GenerationConfig::default();
        let body = generator(None).request_body("User: hi\nBot:", &params);
        assert_eq!(body["prompt"], "User: hi\nBot:");
        assert_eq!(body["n_predict"], 60);
        assert_eq!(body["top_k"], 30);
        assert!((body["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert!(body.get("model").is_none());
    }

    #[test]
    fn greedy_decoding_zeroes_temperature() {
        let params = GenerationConfig {
            do_sample: false,
            ..Default::default()
        };
        let body = generator(None).request_body("p", &params);
        assert_eq!(body["temperature"].as_f64().unwrap(), 0.0);
    }

    #[test]
    fn artifact_is_forwarded_opaquely() {
        let body = generator(Some("gpt2-finetuned-tutorbot"))
            .request_body("p", &GenerationConfig::default());
        assert_eq!(body["model"], "gpt2-finetuned-tutorbot");
    }

    #[test]
    fn token_totals_tolerate_missing_counters() {
        let both = CompletionResponse {
            content: String::new(),
            tokens_evaluated: Some(12),
            tokens_predicted: Some(30),
        };
        assert_eq!(total_tokens(&both), Some(42));

        let only_predicted = CompletionResponse {
            content: String::new(),
            tokens_evaluated: None,
            tokens_predicted: Some(30),
        };
        assert_eq!(total_tokens(&only_predicted), Some(30));

        let neither = CompletionResponse {
            content: String::new(),
            tokens_evaluated: None,
            tokens_predicted: None,
        };
        assert_eq!(total_tokens(&neither), None);
    }
}
