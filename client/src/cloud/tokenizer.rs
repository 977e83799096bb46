//! Tokenizer
//!
//! Turns raw article text into candidate word tokens. Rules run in a fixed
//! order: punctuation, line breaks, possessive `'s`, quotes, loose hyphens,
//! then a split on single spaces.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    punctuation: Regex,
    line_breaks: Regex,
    quotes: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        punctuation: Regex::new(r"[.,/!?$%^&*;:{}=_`~()]").expect("punctuation pattern is valid"),
        line_breaks: Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"),
        quotes: Regex::new(r#"['"]"#).expect("quote pattern is valid"),
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Drop every `-` that does not sit between two word characters.
fn strip_loose_hyphens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != '-'
                || (i > 0
                    && is_word_char(chars[i - 1])
                    && chars.get(i + 1).is_some_and(|&next| is_word_char(next)))
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Split `text` into raw tokens.
///
/// `None` propagates as `None`. Consecutive spaces yield empty tokens; the
/// stop-word filter drops them.
pub fn tokenize(text: Option<&str>) -> Option<Vec<String>> {
    let text = text?;
    let p = patterns();

    let text = p.punctuation.replace_all(text, "");
    let text = p.line_breaks.replace_all(&text, "");
    let text = text.replace("'s", "");
    let text = p.quotes.replace_all(&text, "");
    let text = strip_loose_hyphens(&text);

    Some(text.split(' ').map(str::to_string).collect())
}
