//! Case-insensitive banned word masking for user-supplied text.
//!
//! A [`BannedWords`] list is loaded once, usually from a newline-separated
//! file, and then applied to arbitrary strings. Every case-insensitive
//! occurrence of a banned word is replaced by `*` repeated once per
//! character of the word; everything else is left untouched.
//!
//! # Example
//!
//! ```
//! use word_filter::BannedWords;
//!
//! let list = BannedWords::from_reader("Apple\nbanana\n".as_bytes()).expect("valid list");
//!
//! assert_eq!(list.filter("Eating very delicious apples today"), "Eating very delicious *****s today");
//! assert_eq!(list.filter("Nothing to see"), "Nothing to see");
//! ```

mod error;
mod list;

pub use error::WordListError;
pub use list::{BannedWords, MASK_CHAR};
