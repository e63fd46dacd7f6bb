//! Rule-based French annotation engine
//!
//! A lightweight engine for environments without a statistical model:
//! line-oriented sentence splitting, a French tokenizer, and an entity ruler
//! driven by the supplementary vocabulary plus a few structural rules.
//!
//! # Entity rules
//!
//! Applied per sentence, overlapping candidates resolved leftmost-longest:
//!
//! 1. Gazetteer phrases (acronyms case-sensitive, other phrases case-insensitive)
//! 2. Institution heads ("Université", "École", ...) followed by a capitalized run → ORG
//! 3. Capitalized run after "chez", "au sein de", "auprès de" → ORG
//! 4. Moroccan phone numbers → PHONE_NUMBER
//!
//! PERSON is assigned afterwards to the first short, fully capitalized line
//! near the top of the document.

use crate::gazetteer::{is_acronym, Gazetteer};
use crate::stopwords::is_stop_word;
use crate::tokenizer::{like_num, split_sentences, token_spans};
use crate::AnalyzerError;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::{AnnotatedDocument, EntityLabel, EntitySpan, Sentence, Token};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::debug;

/// Number of leading sentences searched for the candidate's name
pub const DEFAULT_PERSON_WINDOW: usize = 5;

/// Number in group 1; no digit or `+` before it, no digit after it
const PHONE_PATTERN: &str = r"(?:^|[^\d+])((?:\+212|0)[ \-_/]*(?:\d[ \-_/]*){8}\d)(?:\D|$)";

const INSTITUTION_HEADS: &[&str] = &[
    "université", "universite", "école", "ecole", "faculté", "faculte", "institut", "lycée",
    "académie",
];

const CONNECTORS: &[&str] = &[
    "de", "des", "du", "d'", "d’", "la", "le", "l'", "l’", "et", "en",
];

/// Words that rule a line out as a person name
const NON_NAME_WORDS: &[&str] = &[
    "curriculum", "vitae", "cv", "résumé", "profil", "contact", "coordonnées", "compétences",
    "expérience", "expériences", "professionnelle", "professionnelles", "formation",
    "formations", "éducation", "projets", "langues", "loisirs", "certifications", "références",
    "publications", "ingénieur", "développeur", "consultant", "chef", "analyste",
    "gestionnaire", "responsable", "directeur", "technicien", "commercial", "stagiaire",
    "étudiant", "étudiante", "data", "manager", "engineer",
];

#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    end: usize,
    label: EntityLabel,
}

/// Rule-based annotation engine
#[derive(Debug, Clone)]
pub struct RuleAnalyzer {
    acronyms: Option<Regex>,
    phrases: Option<Regex>,
    acronym_labels: HashMap<String, EntityLabel>,
    phrase_labels: HashMap<String, EntityLabel>,
    phone: Regex,
    person_window: usize,
    vocabulary_size: usize,
}

impl RuleAnalyzer {
    /// Create an engine over the given vocabulary
    pub fn new(gazetteer: Gazetteer) -> Result<Self, AnalyzerError> {
        let mut acronym_labels = HashMap::new();
        let mut phrase_labels = HashMap::new();
        let mut acronym_patterns = Vec::new();
        let mut phrase_patterns = Vec::new();

        for (phrase, label) in gazetteer.entries() {
            if is_acronym(&phrase) {
                acronym_patterns.push(bounded(&phrase));
                acronym_labels.entry(phrase).or_insert(label);
            } else {
                phrase_patterns.push(bounded(&phrase));
                phrase_labels.entry(phrase.to_lowercase()).or_insert(label);
            }
        }

        let acronyms = compile_alternation(&acronym_patterns, false)?;
        let phrases = compile_alternation(&phrase_patterns, true)?;
        let phone = Regex::new(PHONE_PATTERN)
            .map_err(|e| AnalyzerError::Config(format!("Invalid phone pattern: {}", e)))?;

        Ok(Self {
            acronyms,
            phrases,
            acronym_labels,
            phrase_labels,
            phone,
            person_window: DEFAULT_PERSON_WINDOW,
            vocabulary_size: gazetteer.len(),
        })
    }

    /// Create an engine over the default Moroccan vocabulary
    pub fn with_default_vocabulary() -> Result<Self, AnalyzerError> {
        Self::new(Gazetteer::default())
    }

    /// Set how many leading sentences are searched for a name
    pub fn with_person_window(mut self, window: usize) -> Self {
        self.person_window = window;
        self
    }

    /// Number of vocabulary phrases loaded
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    fn annotate_sentence(&self, start: usize, text: &str) -> Sentence {
        let spans = token_spans(text);
        let tokens = spans
            .iter()
            .map(|&(s, e)| {
                let surface = &text[s..e];
                Token::new(surface, is_stop_word(surface), like_num(surface))
            })
            .collect();

        let mut candidates = Vec::new();
        self.gazetteer_candidates(text, &mut candidates);
        institution_candidates(text, &spans, &mut candidates);
        trigger_candidates(text, &spans, &mut candidates);
        self.phone_candidates(text, &mut candidates);

        let mut sentence = Sentence::new(start, text, tokens);
        sentence.entities = resolve(candidates)
            .into_iter()
            .map(|c| EntitySpan {
                text: text[c.start..c.end].to_string(),
                label: c.label,
                start: start + c.start,
                end: start + c.end,
            })
            .collect();
        sentence
    }

    fn gazetteer_candidates(&self, text: &str, out: &mut Vec<Candidate>) {
        if let Some(regex) = &self.acronyms {
            for m in regex.find_iter(text) {
                if let Some(label) = self.acronym_labels.get(m.as_str()) {
                    out.push(Candidate { start: m.start(), end: m.end(), label: *label });
                }
            }
        }
        if let Some(regex) = &self.phrases {
            for m in regex.find_iter(text) {
                if let Some(label) = self.phrase_labels.get(&m.as_str().to_lowercase()) {
                    out.push(Candidate { start: m.start(), end: m.end(), label: *label });
                }
            }
        }
    }

    fn phone_candidates(&self, text: &str, out: &mut Vec<Candidate>) {
        for number in self.phone.captures_iter(text).filter_map(|c| c.get(1)) {
            out.push(Candidate {
                start: number.start(),
                end: number.end(),
                label: EntityLabel::PhoneNumber,
            });
        }
    }

    fn tag_person(&self, sentences: &mut [Sentence]) {
        for sentence in sentences.iter_mut().take(self.person_window) {
            if !sentence.entities.is_empty() || !looks_like_name(&sentence.tokens) {
                continue;
            }
            sentence.entities.push(EntitySpan {
                text: sentence.text.clone(),
                label: EntityLabel::Person,
                start: sentence.start,
                end: sentence.end,
            });
            return;
        }
    }
}

impl LanguageAnalyzer for RuleAnalyzer {
    type Error = AnalyzerError;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        if text.trim().is_empty() {
            return Ok(AnnotatedDocument::empty(text));
        }
        if text.contains('\0') {
            return Err(AnalyzerError::Encoding("input contains NUL characters".to_string()));
        }

        let mut sentences: Vec<Sentence> = split_sentences(text)
            .into_iter()
            .map(|(start, sentence)| self.annotate_sentence(start, sentence))
            .collect();
        self.tag_person(&mut sentences);

        let document = AnnotatedDocument::new(text, sentences);
        debug!(
            "Annotated {} sentences, {} entities",
            document.sentence_count(),
            document.entity_count()
        );
        Ok(document)
    }

    fn name(&self) -> &str {
        "rules-fr"
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape a phrase, anchoring word-character edges on word boundaries
fn bounded(phrase: &str) -> String {
    let escaped = regex::escape(phrase);
    let head = phrase.chars().next().map_or(false, is_word_char);
    let tail = phrase.chars().next_back().map_or(false, is_word_char);
    format!(
        "{}{}{}",
        if head { r"\b" } else { "" },
        escaped,
        if tail { r"\b" } else { "" }
    )
}

fn compile_alternation(patterns: &[String], case_insensitive: bool) -> Result<Option<Regex>, AnalyzerError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(&format!("(?:{})", patterns.join("|")))
        .case_insensitive(case_insensitive)
        .build()
        .map(Some)
        .map_err(|e| AnalyzerError::Config(format!("Invalid gazetteer pattern: {}", e)))
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().map_or(false, |c| c.is_uppercase())
}

fn institution_candidates(text: &str, spans: &[(usize, usize)], out: &mut Vec<Candidate>) {
    for (i, &(start, end)) in spans.iter().enumerate() {
        let head = &text[start..end];
        if !is_capitalized(head) || !INSTITUTION_HEADS.contains(&head.to_lowercase().as_str()) {
            continue;
        }
        if let Some(last) = capitalized_run(text, spans, i + 1, true) {
            out.push(Candidate { start, end: spans[last].1, label: EntityLabel::Org });
        }
    }
}

fn trigger_candidates(text: &str, spans: &[(usize, usize)], out: &mut Vec<Candidate>) {
    let lower: Vec<String> = spans.iter().map(|&(s, e)| text[s..e].to_lowercase()).collect();
    let is_de = |i: usize| lower.get(i).map_or(false, |w| matches!(w.as_str(), "de" | "du" | "d'" | "d’"));

    for i in 0..lower.len() {
        let mut first = match lower[i].as_str() {
            "chez" => i + 1,
            "auprès" if is_de(i + 1) => i + 2,
            "sein" if i > 0 && lower[i - 1] == "au" && is_de(i + 1) => i + 2,
            _ => continue,
        };
        if lower.get(first).map_or(false, |w| matches!(w.as_str(), "l'" | "l’" | "la" | "le")) {
            first += 1;
        }
        if let Some(last) = capitalized_run(text, spans, first, false) {
            if let Some(&(start, _)) = spans.get(first) {
                out.push(Candidate { start, end: spans[last].1, label: EntityLabel::Org });
            }
        }
    }
}

/// Index of the last token of a capitalized run starting at `from`
fn capitalized_run(text: &str, spans: &[(usize, usize)], from: usize, allow_connectors: bool) -> Option<usize> {
    let mut last = None;
    for (j, &(s, e)) in spans.iter().enumerate().skip(from) {
        let word = &text[s..e];
        let lower = word.to_lowercase();
        if is_capitalized(word) {
            last = Some(j);
        } else if (word == "&" && last.is_some())
            || (allow_connectors && CONNECTORS.contains(&lower.as_str()))
        {
            continue;
        } else {
            break;
        }
    }
    last
}

/// Leftmost-longest, non-overlapping selection
fn resolve(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then((b.end - b.start).cmp(&(a.end - a.start))));
    let mut accepted: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        if accepted.last().map_or(true, |prev| candidate.start >= prev.end) {
            accepted.push(candidate);
        }
    }
    accepted
}

fn looks_like_name(tokens: &[Token]) -> bool {
    if !(2..=3).contains(&tokens.len()) {
        return false;
    }
    tokens.iter().all(|t| {
        is_capitalized(&t.text)
            && t.text.chars().all(|c| c.is_alphabetic() || c == '-')
            && !t.is_stop
            && !NON_NAME_WORDS.contains(&t.lower.as_str())
    })
}
