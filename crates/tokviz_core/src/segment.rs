//! Splits text into display tokens.
//!
//! The rules are deliberately simple and do not model any real subword
//! vocabulary:
//!
//! * a maximal run of whitespace is one token,
//! * every character of [`PUNCTUATION`] is a token of its own,
//! * everything else forms word pieces; a word piece of up to
//!   [`WORD_CHUNK_THRESHOLD`] characters is one token, a longer one is cut into
//!   chunks of [`WORD_CHUNK_LEN`] characters (the last chunk may be shorter).
//!
//! Tokens are numbered from zero in emission order. Concatenating the token
//! texts always gives back the input.

use serde::{Deserialize, Serialize};

pub type TokenId = usize;

/// Characters that always form a single-character token.
pub const PUNCTUATION: [char; 14] = [
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Word pieces up to this many characters are emitted whole.
pub const WORD_CHUNK_THRESHOLD: usize = 4;

/// Chunk size for word pieces longer than [`WORD_CHUNK_THRESHOLD`].
pub const WORD_CHUNK_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub id: TokenId,
}

/// Ordered output of one [`segment`] call. Ids are `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Concatenation of all token texts, in order.
    pub fn joined_text(&self) -> String {
        self.0.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn ids(&self) -> Vec<TokenId> {
        self.0.iter().map(|t| t.id).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Punctuation,
    Word,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if is_space(c) {
            CharClass::Whitespace
        } else if PUNCTUATION.contains(&c) {
            CharClass::Punctuation
        } else {
            CharClass::Word
        }
    }
}

/// Whitespace as the display splits it: Unicode `White_Space` without NEL
/// (U+0085), plus the byte order mark (U+FEFF).
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Segments `input` into tokens. Total over all strings; empty input gives
/// an empty sequence.
pub fn segment(input: &str) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut next_id: TokenId = 0;
    let mut emit = |text: &str| {
        tokens.push(Token {
            text: text.to_owned(),
            id: next_id,
        });
        next_id += 1;
    };

    for (class, piece) in Pieces::new(input) {
        match class {
            CharClass::Whitespace | CharClass::Punctuation => emit(piece),
            CharClass::Word => {
                if piece.chars().count() <= WORD_CHUNK_THRESHOLD {
                    emit(piece);
                } else {
                    for chunk in WordChunks::new(piece) {
                        emit(chunk);
                    }
                }
            }
        }
    }

    TokenSequence(tokens)
}

/// Single pass over `input` yielding maximal same-class runs. Punctuation
/// never groups, so each punctuation character is its own piece.
struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = (CharClass, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;
        let class = CharClass::of(first);

        let end = match class {
            CharClass::Punctuation => first.len_utf8(),
            CharClass::Whitespace | CharClass::Word => chars
                .find(|&(_, c)| CharClass::of(c) != class)
                .map_or(self.rest.len(), |(idx, _)| idx),
        };

        let (piece, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((class, piece))
    }
}

/// Consecutive [`WORD_CHUNK_LEN`]-character slices of a word piece.
struct WordChunks<'a> {
    rest: &'a str,
}

impl<'a> WordChunks<'a> {
    fn new(word: &'a str) -> Self {
        Self { rest: word }
    }
}

impl<'a> Iterator for WordChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(WORD_CHUNK_LEN)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(input: &str) -> Vec<(CharClass, &str)> {
        Pieces::new(input).collect()
    }

    #[test]
    fn pieces_group_runs_but_not_punctuation() {
        assert_eq!(
            pieces("ab  ..c"),
            vec![
                (CharClass::Word, "ab"),
                (CharClass::Whitespace, "  "),
                (CharClass::Punctuation, "."),
                (CharClass::Punctuation, "."),
                (CharClass::Word, "c"),
            ]
        );
    }

    #[test]
    fn pieces_of_empty_input() {
        assert!(pieces("").is_empty());
    }

    #[test]
    fn chunks_respect_char_boundaries() {
        let chunks: Vec<_> = WordChunks::new("héllöwörld").collect();
        assert_eq!(chunks, vec!["hél", "löw", "örl", "d"]);
    }

    #[test]
    fn char_class_covers_all_punctuation() {
        for c in PUNCTUATION {
            assert_eq!(CharClass::of(c), CharClass::Punctuation, "{c:?}");
        }
        assert_eq!(CharClass::of('@'), CharClass::Word);
        assert_eq!(CharClass::of('-'), CharClass::Word);
        assert_eq!(CharClass::of('\u{3000}'), CharClass::Whitespace);
        assert_eq!(CharClass::of('\u{FEFF}'), CharClass::Whitespace);
        assert_eq!(CharClass::of('\u{85}'), CharClass::Word);
    }
}
