//! Banned word list loading and masking.
//!
//! Words are matched as literal, case-insensitive substrings: `apple` masks
//! the first five letters of `Apples` and characters such as `.` or `+` in a
//! word never act as pattern syntax.

use std::fmt;
use std::io::Read;
use std::iter;

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

use crate::error::WordListError;

/// Character used to mask banned words.
pub const MASK_CHAR: char = '*';

/// An ordered list of banned words with pre-compiled matchers.
///
/// # Example
///
/// ```
/// use word_filter::BannedWords;
///
/// let list = BannedWords::new(["carrot", "c++"]).expect("valid list");
/// assert_eq!(list.filter("CARROT cake and C++"), "****** cake and ***");
/// ```
#[derive(Clone)]
pub struct BannedWords {
    words: Vec<String>,
    matchers: Vec<WordMatcher>,
}

#[derive(Clone)]
struct WordMatcher {
    regex: Regex,
    mask: String,
}

impl BannedWords {
    /// Builds a list from words in priority order.
    ///
    /// Blank words are kept in [`Self::words`] but never match anything.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Pattern`] if a word cannot be compiled, which
    /// only happens when it exceeds the matcher size limit.
    pub fn new<I, S>(entries: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = entries.into_iter().map(Into::into).collect();
        let matchers = words
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| WordMatcher::compile(word))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            words = words.len(),
            matchers = matchers.len(),
            "loaded banned word list"
        );
        Ok(Self { words, matchers })
    }

    /// Reads a newline-separated word list.
    ///
    /// Lines are taken verbatim apart from a trailing `\r`, so a final
    /// newline yields one blank entry.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the reader fails or yields invalid
    /// UTF-8, and [`WordListError::Pattern`] as for [`Self::new`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, WordListError> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|e| WordListError::Read {
                message: e.to_string(),
            })?;

        Self::new(
            contents
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Returns the words in load order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns `true` if any banned word occurs in `text`.
    #[must_use]
    pub fn contains_banned(&self, text: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.regex.is_match(text))
    }

    /// Masks every case-insensitive occurrence of every banned word.
    ///
    /// Words are applied in load order, each to the output of the previous
    /// one. Text without banned words is returned unchanged.
    #[must_use]
    pub fn filter(&self, text: &str) -> String {
        let mut filtered = text.to_owned();
        for matcher in &self.matchers {
            let replaced = match matcher
                .regex
                .replace_all(&filtered, NoExpand(matcher.mask.as_str()))
            {
                std::borrow::Cow::Borrowed(_) => continue,
                std::borrow::Cow::Owned(replaced) => replaced,
            };
            filtered = replaced;
        }
        filtered
    }
}

impl fmt::Debug for BannedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannedWords")
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl WordMatcher {
    fn compile(word: &str) -> Result<Self, WordListError> {
        let regex = RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
            .map_err(|e| WordListError::Pattern {
                word: word.to_owned(),
                message: e.to_string(),
            })?;
        Ok(Self {
            regex,
            mask: iter::repeat_n(MASK_CHAR, word.chars().count()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn reads_words_in_order() {
        let list = BannedWords::from_reader("Apple\nbanana\ncarrot\npineapple".as_bytes())
            .expect("valid list");
        assert_eq!(list.words(), ["Apple", "banana", "carrot", "pineapple"]);
    }

    #[test]
    fn strips_carriage_returns_and_keeps_blank_lines() {
        let list = BannedWords::from_reader("apple\r\n\r\nbanana\n".as_bytes()).expect("valid list");
        assert_eq!(list.words(), ["apple", "", "banana", ""]);
        assert_eq!(list.filter("apple banana"), "***** ******");
    }

    #[test]
    fn rejects_non_utf8_input() {
        let result = BannedWords::from_reader(&[0x61, 0xff, 0x0a][..]);
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }

    #[rstest]
    #[case::prefix_of_longer_word("Eating very delicous apples today", "Eating very delicous *****s today")]
    #[case::every_occurrence("apple APPLE aPpLe", "***** ***** *****")]
    #[case::several_words("banana and carrot", "****** and ******")]
    #[case::earlier_words_mask_first("pineapple", "*********")]
    fn masks_banned_words(#[case] input: &str, #[case] expected: &str) {
        let list = BannedWords::new(["pine", "Apple", "banana", "carrot", "pineapple"])
            .expect("valid list");
        assert_eq!(list.filter(input), expected);
    }

    #[test]
    fn mask_length_counts_characters_not_bytes() {
        let list = BannedWords::new(["Ärger"]).expect("valid list");
        assert_eq!(list.filter("kein ärger hier"), "kein ***** hier");
    }

    #[rstest]
    #[case("c++")]
    #[case("a.b")]
    #[case("(x)")]
    fn metacharacters_match_literally(#[case] word: &str) {
        let list = BannedWords::new([word]).expect("valid list");
        let masked = "*".repeat(word.chars().count());
        assert_eq!(list.filter(&format!("say {word}!")), format!("say {masked}!"));
        assert_eq!(list.filter("say abc!"), "say abc!");
    }

    #[test]
    fn text_without_banned_words_is_unchanged() {
        let list = BannedWords::new(["apple"]).expect("valid list");
        let text = "Nothing to See here";
        assert!(!list.contains_banned(text));
        assert_eq!(list.filter(text), text);
    }

    #[test]
    fn empty_list_filters_nothing() {
        let list = BannedWords::new(Vec::<String>::new()).expect("valid list");
        assert_eq!(list.filter("anything"), "anything");
    }
}
