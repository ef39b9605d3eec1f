//! Word tokenization and normalization.

use smol_str::SmolStr;

/// Whether `ch` can appear inside a spell-checked word.
#[inline(always)]
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\'' || ch == '-'
}

/// Normalizes a word to the form stored in dictionaries.
///
/// Trims surrounding whitespace, lowercases, collapses runs of interior
/// spaces and strips everything that is not alphanumeric, apostrophe,
/// hyphen or space. Dictionary lines, checked words, added words and
/// ignored words all pass through here so that membership tests compare a
/// common normal form. Idempotent.
pub fn sanitize(word: &str) -> SmolStr {
    let mut out = String::with_capacity(word.len());

    for ch in word.trim().chars().flat_map(char::to_lowercase) {
        if ch == ' ' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else if is_word_char(ch) {
            out.push(ch);
        }
    }

    // Stripping trailing punctuation can leave a dangling space behind.
    while out.ends_with(' ') {
        out.pop();
    }

    SmolStr::from(out)
}

/// Iterator over the spell-checkable tokens of a string.
///
/// Tokens are maximal runs of word characters; any run of other characters
/// separates them. Separator-only stretches yield nothing, so every token
/// is non-empty.
pub struct Tokens<'a> {
    remainder: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.remainder.trim_start_matches(|c: char| !is_word_char(c));
        if rest.is_empty() {
            self.remainder = rest;
            return None;
        }

        let end = rest
            .find(|c: char| !is_word_char(c))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.remainder = tail;
        Some(token)
    }
}

/// Tokenization entry point for anything string-like.
pub trait Tokenize {
    /// Splits into spell-checkable tokens.
    fn spell_tokens(&self) -> Tokens;
}

impl Tokenize for str {
    fn spell_tokens(&self) -> Tokens {
        Tokens { remainder: self }
    }
}
