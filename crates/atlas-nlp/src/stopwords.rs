//! French stop-word list

/// French stop words, lowercase
pub const FRENCH_STOP_WORDS: &[&str] = &[
    "a", "à", "ai", "aie", "aient", "aies", "ait", "as", "au", "aura", "aurai", "auraient",
    "aurais", "aurait", "auras", "aurez", "auriez", "aurions", "aurons", "auront", "aux",
    "avaient", "avais", "avait", "avec", "avez", "aviez", "avions", "avons", "ayant", "ayez",
    "ayons", "c", "ce", "ceci", "cela", "ces", "cet", "cette", "d", "dans", "de", "des", "du",
    "elle", "en", "es", "est", "et", "étaient", "étais", "était", "étant", "été", "êtes",
    "étiez", "étions", "eu", "eue", "eues", "eûmes", "eurent", "eus", "eusse", "eussent",
    "eusses", "eussiez", "eussions", "eut", "eût", "eûtes", "eux", "fûmes", "furent", "fus",
    "fusse", "fussent", "fusses", "fussiez", "fussions", "fut", "fût", "fûtes", "il", "ils",
    "j", "je", "l", "la", "le", "les", "leur", "lui", "m", "ma", "mais", "me", "même", "mes",
    "moi", "mon", "n", "ne", "nos", "notre", "nous", "on", "ont", "ou", "par", "pas", "pour",
    "qu", "que", "qui", "s", "sa", "se", "sera", "serai", "seraient", "serais", "serait",
    "seras", "serez", "seriez", "serions", "serons", "seront", "ses", "soient", "sois",
    "soit", "sommes", "son", "sont", "soyez", "soyons", "suis", "sur", "t", "ta", "te", "tes",
    "toi", "ton", "tu", "un", "une", "vos", "votre", "vous", "y",
];

/// Whether a word is a French stop word
///
/// Elided forms ("l'", "d'", "qu'") are recognised by their stem.
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    let stem = lower.trim_end_matches(['\'', '’']);
    FRENCH_STOP_WORDS.contains(&stem)
}
