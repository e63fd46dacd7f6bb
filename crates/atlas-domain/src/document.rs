//! Annotated document - the read-only output of the annotation stage

use crate::EntityLabel;
use serde::{Deserialize, Serialize};

/// A token with the flags extractors rely on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,

    /// Lowercase form
    pub lower: String,

    /// Whether the token is a stop word
    pub is_stop: bool,

    /// Whether the token looks like a number ("20", "3,5", "deux")
    pub like_num: bool,
}

impl Token {
    /// Create a token, deriving the lowercase form
    pub fn new(text: impl Into<String>, is_stop: bool, like_num: bool) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            text,
            lower,
            is_stop,
            like_num,
        }
    }
}

/// A labelled span of text
///
/// Offsets are byte offsets into the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Covered text
    pub text: String,

    /// Entity label
    pub label: EntityLabel,

    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,
}

/// One sentence of an annotated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Literal sentence text
    pub text: String,

    /// Start byte offset in the document
    pub start: usize,

    /// End byte offset in the document
    pub end: usize,

    /// Tokens in order
    pub tokens: Vec<Token>,

    /// Entity spans whose boundaries fall within this sentence
    pub entities: Vec<EntitySpan>,
}

impl Sentence {
    /// Create a sentence starting at `start` with no entities
    pub fn new(start: usize, text: impl Into<String>, tokens: Vec<Token>) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            text,
            start,
            end,
            tokens,
            entities: Vec::new(),
        }
    }

    /// Label the first occurrence of `surface` in this sentence
    ///
    /// The sentence is returned unchanged when `surface` does not occur.
    pub fn with_entity(mut self, surface: &str, label: EntityLabel) -> Self {
        if surface.is_empty() {
            return self;
        }
        if let Some(pos) = self.text.find(surface) {
            let start = self.start + pos;
            self.entities.push(EntitySpan {
                text: surface.to_string(),
                label,
                start,
                end: start + surface.len(),
            });
            self.entities.sort_by_key(|e| e.start);
        }
        self
    }

    /// Lowercase sentence text
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// Entities carrying the given label, in order
    pub fn entities_with(&self, label: EntityLabel) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(move |e| e.label == label)
    }

    /// Whether a byte range lies inside this sentence
    pub fn covers(&self, start: usize, end: usize) -> bool {
        start >= self.start && end <= self.end && start < end
    }
}

/// A document after annotation
///
/// Owned by a single parse and discarded once the record is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedDocument {
    text: String,
    sentences: Vec<Sentence>,
}

impl AnnotatedDocument {
    /// Build a document from its sentences
    ///
    /// Entity spans that do not fall within their sentence are dropped so
    /// that every span is reachable from exactly one sentence.
    pub fn new(text: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        let sentences = sentences
            .into_iter()
            .map(|mut sentence| {
                let (start, end) = (sentence.start, sentence.end);
                sentence
                    .entities
                    .retain(|e| e.start >= start && e.end <= end && e.start < e.end);
                sentence
            })
            .collect();
        Self {
            text: text.into(),
            sentences,
        }
    }

    /// A document with zero sentences
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentences: Vec::new(),
        }
    }

    /// The annotated text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Whether the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// All entity spans in document order
    pub fn entities(&self) -> impl Iterator<Item = &EntitySpan> {
        self.sentences.iter().flat_map(|s| s.entities.iter())
    }

    /// Number of entity spans
    pub fn entity_count(&self) -> usize {
        self.sentences.iter().map(|s| s.entities.len()).sum()
    }
}
