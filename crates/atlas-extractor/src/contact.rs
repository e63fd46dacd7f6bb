//! Name, email and phone extraction

use crate::patterns::{EMAIL_RE, PHONE_RE, PHONE_SEPARATORS};
use atlas_domain::{AnnotatedDocument, EntityLabel};

/// First PERSON entity in document order
pub fn extract_name(doc: &AnnotatedDocument) -> Option<String> {
    doc.entities()
        .find(|e| e.label == EntityLabel::Person)
        .map(|e| e.text.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// First email address in the text
///
/// The pattern can run across whitespace, so only the first
/// whitespace-delimited token of the match is kept, with `;` trimmed.
pub fn extract_email(text: &str) -> Option<String> {
    let found = EMAIL_RE.find(text)?;
    let email = found.as_str().split_whitespace().next()?.trim_matches(';');
    (!email.is_empty()).then(|| email.to_string())
}

/// First Moroccan phone number in the text, separators removed
pub fn extract_phone(text: &str) -> Option<String> {
    let number = PHONE_RE.captures(text)?.get(1)?;
    Some(number.as_str().replace(PHONE_SEPARATORS, ""))
}
