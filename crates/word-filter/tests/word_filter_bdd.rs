//! Behavioural tests for the word-filter crate.
//!
//! These tests exercise list loading and masking against the Gherkin
//! scenarios in `tests/features/word_filter.feature`.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use word_filter::{BannedWords, WordListError};

/// Test world holding the loaded list and the last filter run.
#[derive(Default, ScenarioState)]
struct World {
    list: Slot<Result<BannedWords, WordListError>>,
    input: Slot<String>,
    output: Slot<String>,
}

impl World {
    fn list(&self) -> BannedWords {
        self.list
            .get()
            .expect("word list should be set")
            .expect("word list should be valid")
    }

    fn output(&self) -> String {
        self.output.get().expect("text should be filtered")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the banned word list \"{words}\"")]
fn the_banned_word_list(world: &World, words: String) {
    world.list.set(BannedWords::new(words.split(',')));
}

#[given("a banned word list file with a trailing newline")]
fn a_banned_word_list_file_with_a_trailing_newline(world: &World) {
    world
        .list
        .set(BannedWords::from_reader("apple\ncarrot\n".as_bytes()));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the text \"{text}\" is filtered")]
fn the_text_is_filtered(world: &World, text: String) {
    let filtered = world.list().filter(&text);
    world.input.set(text);
    world.output.set(filtered);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the filtered text is \"{expected}\"")]
fn the_filtered_text_is(world: &World, expected: String) {
    assert_eq!(world.output(), expected);
}

#[then("the filtered text is unchanged")]
fn the_filtered_text_is_unchanged(world: &World) {
    let input = world.input.get().expect("input should be set");
    assert_eq!(world.output(), input);
}

#[then("the list holds {count:usize} entries")]
fn the_list_holds_entries(world: &World, count: usize) {
    assert_eq!(world.list().words().len(), count);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/word_filter.feature",
    name = "Banned words are masked regardless of case"
)]
fn banned_words_are_masked_regardless_of_case(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/word_filter.feature",
    name = "Clean text passes through unchanged"
)]
fn clean_text_passes_through_unchanged(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/word_filter.feature",
    name = "Word list files keep their line structure"
)]
fn word_list_files_keep_their_line_structure(world: World) {
    let _ = world;
}
