//! Supplementary entity vocabulary
//!
//! A small list of organizations, degrees and places layered on top of the
//! base annotation rules. Defaults cover Moroccan employers, schools, degree
//! names and cities; deployments can extend them from a TOML file.

use crate::AnalyzerError;
use atlas_domain::EntityLabel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Phrase lists per entity label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gazetteer {
    /// Organizations: employers, schools, universities
    #[serde(default)]
    pub org: Vec<String>,

    /// Degrees and diplomas
    #[serde(default)]
    pub degree: Vec<String>,

    /// Cities, regions, countries
    #[serde(default)]
    pub gpe: Vec<String>,
}

impl Default for Gazetteer {
    /// Moroccan vocabulary
    fn default() -> Self {
        Self {
            org: to_strings(&[
                "Maroc Telecom", "OCP Group", "OCP", "Royal Air Maroc", "ONCF", "ONEE",
                "Attijariwafa Bank", "Bank of Africa", "BMCE Bank", "Banque Populaire", "CIH Bank",
                "CDG", "Inwi", "Orange Maroc", "Marjane", "Label'Vie", "Renault Tanger Med",
                "Capgemini", "CGI", "Atos", "Sopra Steria",
                "Université Mohammed V", "Université Hassan II", "Université Cadi Ayyad",
                "Université Ibn Tofail", "Université Sidi Mohamed Ben Abdellah",
                "Université Abdelmalek Essaâdi", "Université Ibn Zohr", "Al Akhawayn",
                "ENSA", "ENSAM", "ENSIAS", "ENCG", "EST", "FST", "FSJES", "EMI", "INPT", "EHTP",
                "ISCAE", "OFPPT", "UM6P",
            ]),
            degree: to_strings(&[
                "Baccalauréat", "Bac", "Licence", "Licence Professionnelle", "Master",
                "Master Spécialisé", "Doctorat", "LST", "DEUG", "DEUST", "DUT", "BTS",
                "Diplôme d'ingénieur", "Diplôme d'Ingénieur d'État", "Ingénieur d'état",
                "Bachelor", "PhD", "MBA", "Technicien Spécialisé", "Classe Préparatoire", "CPGE",
            ]),
            gpe: to_strings(&[
                "Maroc", "Casablanca", "Rabat", "Marrakech", "Fès", "Fes", "Tanger", "Agadir",
                "Meknès", "Oujda", "Kénitra", "Tétouan", "El Jadida", "Safi", "Mohammedia",
                "Béni Mellal", "Nador", "Settat", "Khouribga", "Laâyoune", "Salé", "Témara",
                "France", "Paris",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Gazetteer {
    /// An empty vocabulary
    pub fn empty() -> Self {
        Self {
            org: Vec::new(),
            degree: Vec::new(),
            gpe: Vec::new(),
        }
    }

    /// Load additional phrases from TOML and add them to the defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let extra: Gazetteer = toml::from_str(toml_str)
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse gazetteer TOML: {}", e)))?;
        let mut gazetteer = Self::default();
        gazetteer.merge(extra);
        Ok(gazetteer)
    }

    /// Load additional phrases from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!("Failed to read gazetteer {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Add another vocabulary, skipping phrases already present
    pub fn merge(&mut self, other: Gazetteer) {
        fn extend(target: &mut Vec<String>, items: Vec<String>) {
            for item in items {
                let item = item.trim().to_string();
                if !item.is_empty() && !target.contains(&item) {
                    target.push(item);
                }
            }
        }
        extend(&mut self.org, other.org);
        extend(&mut self.degree, other.degree);
        extend(&mut self.gpe, other.gpe);
    }

    /// Every phrase with its label, longest phrase first
    pub fn entries(&self) -> Vec<(String, EntityLabel)> {
        let mut entries: Vec<(String, EntityLabel)> = self
            .org
            .iter()
            .map(|p| (p.clone(), EntityLabel::Org))
            .chain(self.degree.iter().map(|p| (p.clone(), EntityLabel::Degree)))
            .chain(self.gpe.iter().map(|p| (p.clone(), EntityLabel::Gpe)))
            .filter(|(p, _)| !p.trim().is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        entries
    }

    /// Total number of phrases
    pub fn len(&self) -> usize {
        self.org.len() + self.degree.len() + self.gpe.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether a phrase is an acronym, matched case-sensitively
pub(crate) fn is_acronym(phrase: &str) -> bool {
    phrase.chars().any(|c| c.is_uppercase())
        && phrase
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit())
}
