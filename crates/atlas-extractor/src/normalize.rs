//! Text normalization
//!
//! Cleans up text as it comes out of PDF/DOCX conversion: line endings,
//! exotic spaces, ligatures, typographic apostrophes, stray control
//! characters and runs of blank lines. Line structure is preserved since the
//! segmenter and the sentence splitter both work line by line.

/// Normalize raw extracted text
pub fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0;

    for line in unified.split('\n') {
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(cleaned);
    }

    lines.join("\n").trim().to_string()
}

fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for c in line.chars() {
        let mapped: &str = match c {
            '\t' | '\u{a0}' | '\u{202f}' | '\u{2007}' | '\u{2009}' | '\u{200a}' | '\u{3000}' => " ",
            '\u{2018}' | '\u{2019}' | '\u{02bc}' => "'",
            '\u{ad}' | '\u{200b}' | '\u{feff}' => "",
            '\u{fb00}' => "ff",
            '\u{fb01}' => "fi",
            '\u{fb02}' => "fl",
            '\u{fb03}' => "ffi",
            '\u{fb04}' => "ffl",
            c if c.is_control() => " ",
            c if c.is_whitespace() => " ",
            _ => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
                continue;
            }
        };
        if mapped == " " {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() && !mapped.is_empty() {
                out.push(' ');
                pending_space = false;
            }
            out.push_str(mapped);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings_and_spaces() {
        assert_eq!(normalize("Ahmed\tBenali\r\nRabat,\u{a0}Maroc  \r"), "Ahmed Benali\nRabat, Maroc");
    }

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(normalize("\n\nCompétences\n\n\n\nPython\n"), "Compétences\n\nPython");
    }

    #[test]
    fn test_apostrophes_and_ligatures() {
        assert_eq!(normalize("Centres d’intérêt : e\u{fb03}cacité"), "Centres d'intérêt : efficacité");
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(normalize("Master\u{0}\u{7} en finance\u{ad}"), "Master en finance");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t\n "), "");
    }
}
