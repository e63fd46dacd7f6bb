//! HTTP annotation service adapter
//!
//! Delegates annotation to an external service (for instance a spaCy
//! `fr_core_news_sm` wrapper) speaking a small JSON protocol:
//!
//! ```text
//! POST {endpoint}/annotate   {"text": "...", "language": "fr"}
//! 200 {"sentences": [{"text", "start", "end", "tokens": [...], "entities": [...]}]}
//! ```
//!
//! An unreachable service is treated as "no engine available": the adapter
//! logs a warning and returns an empty document so extraction degrades to
//! the pattern-only fields. Any other failure is an error.
//!
//! # Examples
//!
//! ```no_run
//! use atlas_nlp::ServiceAnalyzer;
//! use atlas_domain::traits::LanguageAnalyzer;
//!
//! let analyzer = ServiceAnalyzer::new("http://localhost:8090").unwrap();
//! let doc = analyzer.annotate("Ahmed Benali, ingénieur à Rabat").unwrap();
//! println!("{} sentences", doc.sentence_count());
//! ```

use crate::AnalyzerError;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::{AnnotatedDocument, EntityLabel, EntitySpan, Sentence, Token};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default annotation service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8090";

/// Default timeout for annotation requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Annotation service adapter
pub struct ServiceAnalyzer {
    endpoint: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    sentences: Vec<WireSentence>,
}

#[derive(Deserialize)]
struct WireSentence {
    text: String,
    start: usize,
    end: usize,
    #[serde(default)]
    tokens: Vec<WireToken>,
    #[serde(default)]
    entities: Vec<WireEntity>,
}

#[derive(Deserialize)]
struct WireToken {
    text: String,
    #[serde(default)]
    is_stop: bool,
    #[serde(default)]
    like_num: bool,
}

#[derive(Deserialize)]
struct WireEntity {
    text: String,
    label: String,
    start: usize,
    end: usize,
}

impl ServiceAnalyzer {
    /// Create an adapter for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AnalyzerError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create an adapter with a custom request timeout
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AnalyzerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// The service endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl LanguageAnalyzer for ServiceAnalyzer {
    type Error = AnalyzerError;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        if text.trim().is_empty() {
            return Ok(AnnotatedDocument::empty(text));
        }

        let url = format!("{}/annotate", self.endpoint);
        let request = AnnotateRequest { text, language: "fr" };

        let response = match self.client.post(&url).json(&request).send() {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                warn!("Annotation service unavailable at {}: {}", self.endpoint, e);
                return Ok(AnnotatedDocument::empty(text));
            }
            Err(e) => {
                return Err(AnalyzerError::Communication(format!("Request failed: {}", e)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalyzerError::Engine(format!("HTTP {}: {}", status, body)));
        }

        let body: AnnotateResponse = response
            .json()
            .map_err(|e| AnalyzerError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        into_document(text, body)
    }

    fn name(&self) -> &str {
        "service"
    }
}

/// Convert a service response into a document
fn into_document(text: &str, body: AnnotateResponse) -> Result<AnnotatedDocument, AnalyzerError> {
    let mut sentences = Vec::with_capacity(body.sentences.len());

    for wire in body.sentences {
        if wire.start > wire.end || wire.end > text.len() {
            return Err(AnalyzerError::InvalidResponse(format!(
                "Sentence span {}..{} outside text of length {}",
                wire.start,
                wire.end,
                text.len()
            )));
        }

        let tokens = wire
            .tokens
            .into_iter()
            .map(|t| Token::new(t.text, t.is_stop, t.like_num))
            .collect();

        let mut sentence = Sentence::new(wire.start, wire.text, tokens);
        sentence.end = wire.end;

        for entity in wire.entities {
            match EntityLabel::parse(&entity.label) {
                Some(label) => sentence.entities.push(EntitySpan {
                    text: entity.text,
                    label,
                    start: entity.start,
                    end: entity.end,
                }),
                None => debug!("Skipping entity with unknown label {}", entity.label),
            }
        }
        sentence.entities.sort_by_key(|e| e.start);
        sentences.push(sentence);
    }

    Ok(AnnotatedDocument::new(text, sentences))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnnotateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_service_creation() {
        let analyzer = ServiceAnalyzer::new("http://localhost:8090/").unwrap();
        assert_eq!(analyzer.endpoint(), "http://localhost:8090");
        assert_eq!(analyzer.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(analyzer.name(), "service");
    }

    #[test]
    fn test_wire_conversion() {
        let text = "Stage chez Inwi";
        let body = parse(
            r#"{"sentences": [{
                "text": "Stage chez Inwi", "start": 0, "end": 15,
                "tokens": [{"text": "Stage"}, {"text": "chez", "is_stop": true}, {"text": "Inwi"}],
                "entities": [{"text": "Inwi", "label": "ORG", "start": 11, "end": 15}]
            }]}"#,
        );
        let doc = into_document(text, body).unwrap();

        assert_eq!(doc.sentence_count(), 1);
        let sentence = &doc.sentences()[0];
        assert_eq!(sentence.tokens.len(), 3);
        assert!(sentence.tokens[1].is_stop);
        assert_eq!(sentence.tokens[2].lower, "inwi");
        let entity = doc.entities().next().unwrap();
        assert_eq!(entity.label, EntityLabel::Org);
        assert_eq!(&text[entity.start..entity.end], "Inwi");
    }

    #[test]
    fn test_unknown_labels_skipped() {
        let text = "Ahmed le 12 mars";
        let body = parse(
            r#"{"sentences": [{
                "text": "Ahmed le 12 mars", "start": 0, "end": 16,
                "entities": [
                    {"text": "Ahmed", "label": "PER", "start": 0, "end": 5},
                    {"text": "12 mars", "label": "DATE", "start": 9, "end": 16}
                ]
            }]}"#,
        );
        let doc = into_document(text, body).unwrap();
        let labels: Vec<_> = doc.entities().map(|e| e.label).collect();
        assert_eq!(labels, vec![EntityLabel::Person]);
    }

    #[test]
    fn test_out_of_range_sentence_is_invalid() {
        let body = parse(r#"{"sentences": [{"text": "x", "start": 0, "end": 99}]}"#);
        let result = into_document("short", body);
        assert!(matches!(result, Err(AnalyzerError::InvalidResponse(_))));
    }

    #[test]
    fn test_empty_input_skips_request() {
        let analyzer = ServiceAnalyzer::new("http://localhost:1").unwrap();
        let doc = analyzer.annotate("  ").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_unreachable_service_yields_empty_document() {
        let analyzer = ServiceAnalyzer::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let doc = analyzer.annotate("Ahmed Benali").unwrap();
        assert!(doc.is_empty());
    }
}
