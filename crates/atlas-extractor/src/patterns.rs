//! Pattern library: contact regexes and keyword lists
//!
//! A `PatternSet` holds the raw, serializable lists; `PatternLibrary`
//! compiles them once into matchers shared by every parse.
//!
//! Keywords written entirely in upper-case letters and digits (`EST`, `DUT`,
//! `PFE`) are acronyms and match whole tokens case-sensitively, so that the
//! school "EST" never matches the French verb "est". Every other keyword
//! matches as a case-insensitive substring of the sentence.

use crate::error::ExtractorError;
use atlas_domain::{CompetencyCategory, ResultCategory, Sentence};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Version of the built-in pattern lists
pub const PATTERN_VERSION: u32 = 1;

/// Email addresses: the first whitespace-delimited token of a match is kept
pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^@|\s]+@[^@]+\.[^@|\s]+").unwrap());

/// Moroccan phone numbers: `+212` or `0`, then nine digits with optional separators
///
/// The number is capture group 1. It must not follow a digit or `+`, and no
/// digit may follow the ninth one.
pub(crate) static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d+])((?:\+212|0)[ \-_/]*(?:\d[ \-_/]*){8}\d)(?:\D|$)").unwrap()
});

/// Durations such as "3 ans", "18 mois"
pub(crate) static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:années|année|ans|an|mois|semaines|semaine|jours|jour)\b").unwrap()
});

/// Separators removed from phone numbers
pub(crate) const PHONE_SEPARATORS: &[char] = &[' ', '-', '_', '/'];

/// Per-category competency keywords
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetencyKeywords {
    /// Leadership keywords
    pub leadership: Vec<String>,
    /// Communication keywords
    pub communication: Vec<String>,
    /// Teamwork keywords
    pub teamwork: Vec<String>,
    /// Spoken languages
    pub languages: Vec<String>,
    /// Problem-solving keywords
    pub problem_solving: Vec<String>,
}

impl CompetencyKeywords {
    /// Keywords for one category
    pub fn get(&self, category: CompetencyCategory) -> &[String] {
        match category {
            CompetencyCategory::Leadership => &self.leadership,
            CompetencyCategory::Communication => &self.communication,
            CompetencyCategory::Teamwork => &self.teamwork,
            CompetencyCategory::Languages => &self.languages,
            CompetencyCategory::ProblemSolving => &self.problem_solving,
        }
    }
}

/// Fragment-mode measurable-result keywords
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultKeywords {
    /// Quantities and business metrics
    pub metrics: Vec<String>,
    /// Accomplishment verbs
    pub action_words: Vec<String>,
}

/// Raw pattern lists
///
/// Loaded from TOML, any missing top-level key keeps its built-in list. A
/// table that is present (`[competencies]`) replaces the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSet {
    /// Version of the lists
    pub version: u32,
    /// Degree and school names
    pub education: Vec<String>,
    /// Job titles
    pub job_titles: Vec<String>,
    /// Terms marking an experience sentence
    pub experience: Vec<String>,
    /// Section titles recognised by the segmenter
    pub section_titles: Vec<String>,
    /// Section titles whose lines are experience fragments
    pub experience_sections: Vec<String>,
    /// Technical and business skills
    pub skills: Vec<String>,
    /// Tokens marking a quantified sentence
    pub metric_markers: Vec<String>,
    /// Sentence-mode competency keywords
    pub competencies: CompetencyKeywords,
    /// Fragment-mode competency keywords
    pub fragment_competencies: CompetencyKeywords,
    /// Fragment-mode measurable-result keywords
    pub fragment_results: ResultKeywords,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            version: PATTERN_VERSION,
            education: to_strings(&[
                "Bac", "Baccalauréat", "Licence", "Master", "Doctorat", "LST",
                "Diplôme d'ingénieur", "Bachelor", "PhD", "Ingénieur", "DEUG", "DUT", "BTS",
                "Ingénieur d'état", "DEUST", "M1", "M2", "ENSA", "EST", "ENCG", "FST", "FSJES",
                "Classe Préparatoire", "Grande École", "École d'Ingénieurs",
            ]),
            job_titles: to_strings(&[
                "Développeur", "Ingénieur", "Consultant", "Chef de Projet", "Analyste",
                "Gestionnaire", "Responsable", "Directeur", "Technicien", "Commercial",
                "Stagiaire", "PFE", "PFA", "Stage", "Intern",
            ]),
            experience: to_strings(&[
                "expérience professionnelle", "expériences professionnelles", "expérience",
                "professional experience", "experience", "professionnelle", "projet de fin d'études",
                "projets", "projet", "stages", "stage", "stagiaire", "internship",
                "PFE", "PFA",
            ]),
            section_titles: to_strings(&[
                "compétences", "expérience", "éducation", "formation", "projets",
                "expérience professionnelle", "publications", "certifications", "langues",
                "centres d'intérêt", "loisirs", "références",
            ]),
            experience_sections: to_strings(&["expérience", "expérience professionnelle", "projets"]),
            skills: to_strings(&[
                "python", "java", "c++", "javascript", "php", "machine learning",
                "data analysis", "gestion de projet", "marketing digital",
            ]),
            competencies: CompetencyKeywords {
                leadership: to_strings(&["diriger", "gérer", "superviser", "leader"]),
                communication: to_strings(&["communiquer", "présenter", "négocier"]),
                teamwork: to_strings(&["collaborer", "travailler en équipe", "coopérer"]),
                languages: to_strings(&["arabe", "français", "anglais", "espagnol", "amazigh"]),
                problem_solving: to_strings(&[
                    "résoudre", "analyser", "optimiser", "concevoir", "développer",
                ]),
            },
            fragment_competencies: CompetencyKeywords {
                leadership: to_strings(&[
                    "diriger", "gérer", "superviser", "manager", "motiver", "guider",
                ]),
                communication: to_strings(&[
                    "communiquer", "présenter", "négocier", "rédiger", "exposer",
                ]),
                teamwork: to_strings(&[
                    "collaborer", "équipe", "coopérer", "coordonner", "contribuer",
                ]),
                languages: Vec::new(),
                problem_solving: to_strings(&[
                    "résoudre", "analyser", "optimiser", "concevoir", "développer",
                ]),
            },
            metric_markers: to_strings(&["%", "pourcent", "dirham", "dirhams", "dh", "dhs", "mad"]),
            fragment_results: ResultKeywords {
                metrics: to_strings(&[
                    "augmenté", "réduit", "amélioré", "%", "pourcent", "dirhams", "dh", "MAD",
                    "millions", "milliers", "économisé", "généré", "croissance",
                    "chiffre d'affaires",
                ]),
                action_words: to_strings(&[
                    "développé", "mis en place", "créé", "lancé", "implémenté", "géré", "dirigé",
                    "coordonné", "formé", "négocié", "obtenu", "réalisé",
                ]),
            },
        }
    }
}

impl PatternSet {
    /// Load lists from TOML; missing keys keep the built-in lists
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Pattern(format!("Failed to parse TOML: {}", e)))
    }

    /// Load lists from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExtractorError::Pattern(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Serialize the lists to TOML
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Pattern(format!("Failed to serialize to TOML: {}", e)))
    }
}

/// Whether a keyword is an acronym (upper-case letters and digits only)
pub fn is_acronym(keyword: &str) -> bool {
    keyword.chars().any(|c| c.is_uppercase())
        && keyword
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit())
}

/// Matches sentences against a keyword list
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    acronyms: Vec<String>,
    phrases: Vec<String>,
}

impl KeywordMatcher {
    /// Build a matcher, splitting acronyms from phrases
    pub fn new(keywords: &[String]) -> Self {
        let mut matcher = Self::default();
        for keyword in keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
            if is_acronym(keyword) {
                matcher.acronyms.push(keyword.to_string());
            } else {
                matcher.phrases.push(keyword.to_lowercase());
            }
        }
        matcher
    }

    /// Whether the sentence contains any keyword
    pub fn matches(&self, sentence: &Sentence) -> bool {
        let has_acronym = sentence
            .tokens
            .iter()
            .any(|t| self.acronyms.iter().any(|a| *a == t.text));
        has_acronym || self.matches_lowercase(&sentence.lower())
    }

    fn matches_lowercase(&self, lower: &str) -> bool {
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }

    /// Whether the matcher has no keywords
    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty() && self.phrases.is_empty()
    }
}

/// A keyword found by whole-word search
#[derive(Debug, Clone)]
pub struct WordPattern {
    keyword: String,
    regex: Regex,
}

impl WordPattern {
    /// Compile a case-insensitive whole-word pattern
    ///
    /// Word boundaries are only asserted on sides where the keyword starts
    /// or ends with a word character, so symbols such as `%` still match.
    pub fn new(keyword: &str) -> Result<Self, ExtractorError> {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let head = keyword.chars().next().map_or(false, is_word);
        let tail = keyword.chars().next_back().map_or(false, is_word);
        let pattern = format!(
            "{}{}{}",
            if head { r"\b" } else { "" },
            regex::escape(keyword),
            if tail { r"\b" } else { "" }
        );
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExtractorError::Pattern(format!("Invalid keyword '{}': {}", keyword, e)))?;
        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    /// The keyword as written in the list
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the keyword occurs in `text`
    pub fn is_found(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn word_patterns(keywords: &[String]) -> Result<Vec<WordPattern>, ExtractorError> {
    keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .map(|k| WordPattern::new(k.trim()))
        .collect()
}

/// Section titles, split by shape
#[derive(Debug, Clone, Default)]
pub struct SectionTitles {
    words: HashSet<String>,
    phrases: Vec<String>,
}

impl SectionTitles {
    fn new(titles: &[String]) -> Self {
        let mut section_titles = Self::default();
        for title in titles.iter().map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty()) {
            if title.contains(char::is_whitespace) {
                section_titles.phrases.push(title);
            } else {
                section_titles.words.insert(title);
            }
        }
        section_titles
    }

    /// Longest title matching a line's lowercase words
    pub fn find(&self, words: &[String]) -> Option<&str> {
        let joined = format!(" {} ", words.join(" "));
        let phrase = self
            .phrases
            .iter()
            .filter(|p| joined.contains(&format!(" {} ", p)))
            .max_by_key(|p| p.chars().count());
        let word = words
            .iter()
            .filter_map(|w| self.words.get(w))
            .max_by_key(|w| w.chars().count());

        match (phrase, word) {
            (Some(p), Some(w)) if w.chars().count() > p.chars().count() => Some(w.as_str()),
            (Some(p), _) => Some(p.as_str()),
            (None, w) => w.map(|w| w.as_str()),
        }
    }
}

/// Compiled, immutable pattern library
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    set: PatternSet,
    education: KeywordMatcher,
    experience: KeywordMatcher,
    competencies: Vec<(CompetencyCategory, KeywordMatcher)>,
    fragment_competencies: Vec<(CompetencyCategory, Vec<WordPattern>)>,
    fragment_results: Vec<(ResultCategory, Vec<WordPattern>)>,
    metric_markers: HashSet<String>,
    skills: Vec<Vec<String>>,
    section_titles: SectionTitles,
    experience_sections: HashSet<String>,
}

impl PatternLibrary {
    /// Compile a pattern set
    pub fn compile(set: PatternSet) -> Result<Self, ExtractorError> {
        let competencies = CompetencyCategory::ALL
            .iter()
            .map(|&c| (c, KeywordMatcher::new(set.competencies.get(c))))
            .collect();

        let fragment_competencies = CompetencyCategory::ALL
            .iter()
            .map(|&c| Ok((c, word_patterns(set.fragment_competencies.get(c))?)))
            .collect::<Result<Vec<_>, ExtractorError>>()?;

        let fragment_results = vec![
            (ResultCategory::Metrics, word_patterns(&set.fragment_results.metrics)?),
            (ResultCategory::ActionWords, word_patterns(&set.fragment_results.action_words)?),
        ];

        let skills = set
            .skills
            .iter()
            .map(|s| s.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>())
            .filter(|words| !words.is_empty())
            .collect();

        Ok(Self {
            education: KeywordMatcher::new(&set.education),
            experience: KeywordMatcher::new(&set.experience),
            competencies,
            fragment_competencies,
            fragment_results,
            metric_markers: set.metric_markers.iter().map(|m| m.trim().to_lowercase()).collect(),
            skills,
            section_titles: SectionTitles::new(&set.section_titles),
            experience_sections: set
                .experience_sections
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect(),
            set,
        })
    }

    /// Compile a TOML overlay on the built-in lists
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Self::compile(PatternSet::from_toml(toml_str)?)
    }

    /// Compile a TOML file overlay on the built-in lists
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        Self::compile(PatternSet::from_file(path)?)
    }

    /// The raw lists this library was compiled from
    pub fn pattern_set(&self) -> &PatternSet {
        &self.set
    }

    /// Version of the lists
    pub fn version(&self) -> u32 {
        self.set.version
    }

    /// Job titles
    pub fn job_titles(&self) -> &[String] {
        &self.set.job_titles
    }

    pub(crate) fn education(&self) -> &KeywordMatcher {
        &self.education
    }

    pub(crate) fn experience(&self) -> &KeywordMatcher {
        &self.experience
    }

    pub(crate) fn competencies(&self) -> &[(CompetencyCategory, KeywordMatcher)] {
        &self.competencies
    }

    pub(crate) fn fragment_competencies(&self) -> &[(CompetencyCategory, Vec<WordPattern>)] {
        &self.fragment_competencies
    }

    pub(crate) fn fragment_results(&self) -> &[(ResultCategory, Vec<WordPattern>)] {
        &self.fragment_results
    }

    pub(crate) fn is_metric_marker(&self, lower: &str) -> bool {
        self.metric_markers.contains(lower)
    }

    pub(crate) fn skills(&self) -> &[Vec<String>] {
        &self.skills
    }

    pub(crate) fn section_titles(&self) -> &SectionTitles {
        &self.section_titles
    }

    pub(crate) fn is_experience_section(&self, key: &str) -> bool {
        self.experience_sections.contains(key)
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        static BUILT_IN: LazyLock<PatternLibrary> =
            LazyLock::new(|| PatternLibrary::compile(PatternSet::default()).unwrap());
        BUILT_IN.clone()
    }
}
