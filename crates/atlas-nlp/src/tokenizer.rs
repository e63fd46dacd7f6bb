//! Sentence splitting and tokenization for French résumé text
//!
//! Résumés are line oriented: every line break ends a sentence, and within a
//! line a sentence ends at `.`, `!` or `?` followed by whitespace and an
//! upper-case letter or a digit.

use crate::stopwords::is_stop_word;
use atlas_domain::Token;

/// Punctuation split off the front of a word
const LEADING_PUNCT: &[char] = &[
    '(', '[', '{', '"', '«', '“', '‘', '•', '*', '·', '▪', '►', '➢', '✓', '–', '—', '-',
];

/// Punctuation split off the end of a word
const TRAILING_PUNCT: &[char] = &[
    ')', ']', '}', '"', '»', '”', ',', ';', ':', '!', '?', '.', '…', '%',
];

/// Elided articles and pronouns split off the front of a word
const ELISIONS: &[&str] = &[
    "jusqu'", "lorsqu'", "puisqu'", "qu'", "l'", "d'", "j'", "n'", "s'", "c'", "m'", "t'",
    "jusqu’", "lorsqu’", "puisqu’", "qu’", "l’", "d’", "j’", "n’", "s’", "c’", "m’", "t’",
];

/// Number words counted as numeric
const NUMBER_WORDS: &[&str] = &[
    "zéro", "un", "une", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf", "vingt", "trente", "quarante", "cinquante", "soixante", "soixante-dix",
    "quatre-vingt", "quatre-vingts", "quatre-vingt-dix", "cent", "cents", "mille", "million",
    "millions", "milliard", "milliards",
];

/// Split text into trimmed sentences with their byte offsets
pub fn split_sentences(text: &str) -> Vec<(usize, &str)> {
    let mut sentences = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        split_line(line_start, line, &mut sentences);
        line_start += line.len() + 1;
    }

    sentences
}

fn split_line<'a>(offset: usize, line: &'a str, out: &mut Vec<(usize, &'a str)>) {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut segment_start = 0;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let boundary = match (chars.get(i + 1), chars.get(i + 2)) {
            (Some(&(_, space)), Some(&(_, next))) => {
                space.is_whitespace() && (next.is_uppercase() || next.is_ascii_digit())
            }
            _ => false,
        };
        if boundary {
            let end = pos + c.len_utf8();
            push_trimmed(offset + segment_start, &line[segment_start..end], out);
            segment_start = end;
        }
    }

    push_trimmed(offset + segment_start, &line[segment_start..], out);
}

fn push_trimmed<'a>(start: usize, segment: &'a str, out: &mut Vec<(usize, &'a str)>) {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = segment.len() - segment.trim_start().len();
    out.push((start + lead, trimmed));
}

/// Byte ranges of the tokens of `text`
pub fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let base = text.as_ptr() as usize;

    for word in text.split(char::is_whitespace).filter(|w| !w.is_empty()) {
        let offset = word.as_ptr() as usize - base;
        split_word(offset, word, &mut spans);
    }

    spans
}

fn split_word(offset: usize, word: &str, spans: &mut Vec<(usize, usize)>) {
    let mut parts = Vec::new();
    let mut trailing = Vec::new();
    let mut start = 0;
    let mut end = word.len();

    while let Some(c) = word[start..end].chars().next() {
        if !LEADING_PUNCT.contains(&c) || word[start..end].chars().count() < 2 {
            break;
        }
        parts.push((start, start + c.len_utf8()));
        start += c.len_utf8();
    }

    while let Some(c) = word[start..end].chars().next_back() {
        if !TRAILING_PUNCT.contains(&c) || word[start..end].chars().count() < 2 {
            break;
        }
        let cut = end - c.len_utf8();
        trailing.push((cut, end));
        end = cut;
    }

    if let Some(len) = elision_len(&word[start..end]) {
        parts.push((start, start + len));
        start += len;
    }

    parts.push((start, end));
    trailing.reverse();
    parts.extend(trailing);

    spans.extend(parts.into_iter().map(|(s, e)| (offset + s, offset + e)));
}

fn elision_len(core: &str) -> Option<usize> {
    ELISIONS.iter().find_map(|prefix| {
        let n = prefix.len();
        let matches = core.len() > n
            && core
                .get(..n)
                .map_or(false, |head| head.eq_ignore_ascii_case(prefix));
        matches.then_some(n)
    })
}

/// Tokenize text, flagging stop words and numeric-like tokens
pub fn tokenize(text: &str) -> Vec<Token> {
    token_spans(text)
        .into_iter()
        .map(|(start, end)| {
            let surface = &text[start..end];
            Token::new(surface, is_stop_word(surface), like_num(surface))
        })
        .collect()
}

/// Whether a token looks like a number
///
/// Digits with `,`/`.` separators, simple fractions and French number words.
pub fn like_num(text: &str) -> bool {
    let text = text.trim_start_matches(['+', '-', '~']);
    if text.is_empty() {
        return false;
    }

    let digits: String = text.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((num, den)) = text.split_once('/') {
        let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if is_digits(num) && is_digits(den) {
            return true;
        }
    }

    NUMBER_WORDS.contains(&text.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<&str> {
        token_spans(text).into_iter().map(|(s, e)| &text[s..e]).collect()
    }

    #[test]
    fn test_split_on_lines_and_terminators() {
        let text = "Ahmed Benali\nIngénieur logiciel. Basé à Rabat.\n\n5 ans d'expérience";
        let sentences = split_sentences(text);
        let texts: Vec<_> = sentences.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            texts,
            vec!["Ahmed Benali", "Ingénieur logiciel.", "Basé à Rabat.", "5 ans d'expérience"]
        );
        for (start, sentence) in sentences {
            assert_eq!(&text[start..start + sentence.len()], sentence);
        }
    }

    #[test]
    fn test_no_split_inside_lowercase_continuation() {
        let sentences = split_sentences("Maîtrise de node.js et c++. voir annexe");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_percent_and_punctuation_split() {
        assert_eq!(
            surfaces("Augmenté les ventes de 20%."),
            vec!["Augmenté", "les", "ventes", "de", "20", "%", "."]
        );
    }

    #[test]
    fn test_elision_split() {
        assert_eq!(
            surfaces("J'ai travaillé chez l'OCP"),
            vec!["J'", "ai", "travaillé", "chez", "l'", "OCP"]
        );
    }

    #[test]
    fn test_technology_tokens_preserved() {
        assert_eq!(surfaces("C++, C# et Node.js"), vec!["C++", ",", "C#", "et", "Node.js"]);
    }

    #[test]
    fn test_bullets_split() {
        assert_eq!(surfaces("• Python (avancé)"), vec!["•", "Python", "(", "avancé", ")"]);
        assert_eq!(surfaces("-"), vec!["-"]);
    }

    #[test]
    fn test_like_num() {
        assert!(like_num("20"));
        assert!(like_num("3,5"));
        assert!(like_num("1.000.000"));
        assert!(like_num("3/4"));
        assert!(like_num("deux"));
        assert!(like_num("+212"));
        assert!(!like_num("%"));
        assert!(!like_num("."));
        assert!(!like_num("MAD"));
    }

    #[test]
    fn test_tokenize_flags() {
        let tokens = tokenize("Les ventes de 20 %");
        assert!(tokens[0].is_stop);
        assert_eq!(tokens[0].lower, "les");
        assert!(!tokens[1].is_stop);
        assert!(tokens[3].like_num);
        assert!(!tokens[4].like_num);
    }
}
