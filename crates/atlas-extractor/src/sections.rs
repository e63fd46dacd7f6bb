//! Line-based résumé section segmentation
//!
//! A line is a section header when it is short and names a known section
//! ("Compétences", "EXPÉRIENCE PROFESSIONNELLE :"). Subsequent non-empty
//! lines accumulate under that section until the next header. Lines before
//! the first header belong to no section and are dropped.

use crate::patterns::PatternLibrary;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered sections, keyed by lowercase section title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<(String, Vec<String>)>,
}

impl Sections {
    /// Lines of a section
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Section titles in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sections in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, lines)| (k.as_str(), lines.as_slice()))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no section header was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn open(&mut self, key: &str) -> usize {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        }
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, lines) in &self.entries {
            map.serialize_entry(key, lines)?;
        }
        map.end()
    }
}

/// Split text into sections
///
/// Single-character lines are never headers. A header seen twice keeps
/// appending to the same section.
pub fn segment(text: &str, patterns: &PatternLibrary, max_header_words: usize) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<usize> = None;

    for line in text.split('\n').map(str::trim) {
        if let Some(key) = header_key(line, patterns, max_header_words) {
            current = Some(sections.open(&key));
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let Some(index) = current {
            sections.entries[index].1.push(line.to_string());
        }
    }

    sections
}

fn header_key(line: &str, patterns: &PatternLibrary, max_words: usize) -> Option<String> {
    if line.chars().count() <= 1 {
        return None;
    }

    let words: Vec<String> = line
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() || words.len() > max_words {
        return None;
    }

    patterns.section_titles().find(&words).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Sections {
        segment(text, &PatternLibrary::default(), 4)
    }

    #[test]
    fn test_basic_sections() {
        let sections = run("Ahmed Benali\nCompétences\nPython\nSQL\n\nEXPÉRIENCE PROFESSIONNELLE :\nStage chez Inwi");
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["compétences", "expérience professionnelle"]);
        assert_eq!(sections.get("compétences").unwrap(), ["Python", "SQL"]);
        assert_eq!(sections.get("expérience professionnelle").unwrap(), ["Stage chez Inwi"]);
    }

    #[test]
    fn test_lines_before_first_header_dropped() {
        let sections = run("Ahmed Benali\nahmed@mail.ma");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_long_lines_are_content() {
        let sections = run("Langues\nJ'ai une bonne expérience en formation des langues étrangères");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("langues").unwrap().len(), 1);
    }

    #[test]
    fn test_single_character_lines_are_content() {
        let sections = run("Loisirs\n-\nFootball");
        assert_eq!(sections.get("loisirs").unwrap(), ["-", "Football"]);
    }

    #[test]
    fn test_repeated_header_appends() {
        let sections = run("Projets\nAtlas\nLangues\nArabe\nProjets\nChatbot RH");
        assert_eq!(sections.get("projets").unwrap(), ["Atlas", "Chatbot RH"]);
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["projets", "langues"]);
    }

    #[test]
    fn test_multi_word_title() {
        let sections = run("Centres d'intérêt\nLecture");
        assert_eq!(sections.get("centres d'intérêt").unwrap(), ["Lecture"]);
    }

    #[test]
    fn test_header_word_limit() {
        let sections = segment("Mes compétences techniques clés\nRust", &PatternLibrary::default(), 3);
        assert!(sections.is_empty());
        let sections = segment("Mes compétences techniques clés\nRust", &PatternLibrary::default(), 4);
        assert_eq!(sections.get("compétences").unwrap(), ["Rust"]);
    }

    #[test]
    fn test_serializes_in_order() {
        let sections = run("Projets\nAtlas\nLangues\nArabe");
        let json = serde_json::to_string(&sections).unwrap();
        assert_eq!(json, r#"{"projets":["Atlas"],"langues":["Arabe"]}"#);
    }
}
