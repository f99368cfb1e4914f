//! Test helpers
//!
//! Shared transition tables for the tokenizer integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lextab_core::{characters, CharPredicate, LexAction, LexStateMachine, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    Start,
    Space,
    Identifier,
    Integer,
    Error,
}

fn word_chars() -> [CharPredicate; 3] {
    [
        characters::UPPER,
        CharPredicate::exact('_'),
        characters::LOWER,
    ]
}

/// Identifiers, integers, whitespace runs, single punctuation, and an error
/// state that swallows everything outside ASCII
pub fn source_tokenizer() -> Tokenizer<LexState, String> {
    LexStateMachine::builder(LexState::Start)
        // ---------------------------------------------------------------
        .on_each([characters::HT, characters::LF], LexAction::Shift, LexState::Space)
        .on(characters::CONTROL, LexAction::Shift, LexState::Error)
        .on(characters::SPACE, LexAction::Shift, LexState::Space)
        .on(characters::DIGIT, LexAction::Shift, LexState::Integer)
        .on_each(word_chars(), LexAction::Shift, LexState::Identifier)
        .on(characters::DEL, LexAction::Shift, LexState::Error)
        .stay(characters::ASCII, LexAction::ShiftReduce)
        .on(characters::ANY, LexAction::Shift, LexState::Error)
        // ---------------------------------------------------------------
        .begin(LexState::Space)
        .stay_each([characters::HT, characters::LF], LexAction::Shift)
        .stay(characters::SPACE, LexAction::Shift)
        .on(characters::ANY, LexAction::Reduce, LexState::Start)
        // ---------------------------------------------------------------
        .begin(LexState::Identifier)
        .stay(characters::DIGIT, LexAction::Shift)
        .stay_each(word_chars(), LexAction::Shift)
        .on(characters::ANY, LexAction::Reduce, LexState::Start)
        // ---------------------------------------------------------------
        .begin(LexState::Integer)
        .stay(characters::DIGIT, LexAction::Shift)
        .on(characters::ANY, LexAction::Reduce, LexState::Start)
        // ---------------------------------------------------------------
        .begin(LexState::Error)
        .on_each([characters::HT, characters::LF], LexAction::Reduce, LexState::Start)
        .stay(characters::CONTROL, LexAction::Shift)
        .on(characters::ASCII, LexAction::Reduce, LexState::Start)
        .stay(characters::ANY, LexAction::Shift)
        .tokenizer()
        .unwrap()
}

/// Single-quoted strings with backslash escapes; the quotes are dropped
pub fn quoted_tokenizer() -> Tokenizer<&'static str, String> {
    LexStateMachine::builder("start")
        .add("start", characters::QT, LexAction::Skip, "string")
        .add("start", characters::ANY, LexAction::Shift, "error")
        .add_each("string", [characters::HT, characters::VT], LexAction::Shift, "string")
        .add("string", characters::CONTROL, LexAction::Shift, "error")
        .add("string", characters::QT, LexAction::SkipReduce, "start")
        .add("string", characters::BACKSLASH, LexAction::Shift, "string-escape")
        .add("string", characters::ASCII, LexAction::Shift, "string")
        .add("string", characters::ANY, LexAction::Shift, "error")
        .add("string-escape", characters::CONTROL, LexAction::Shift, "error")
        .add("string-escape", characters::ASCII, LexAction::Shift, "string")
        .add("string-escape", characters::ANY, LexAction::Shift, "error")
        .add("error", characters::ANY, LexAction::Shift, "error")
        .tokenizer()
        .unwrap()
}

/// Accepts digits only
pub fn digit_tokenizer() -> Tokenizer<&'static str, String> {
    LexStateMachine::builder("start")
        .add("start", characters::DIGIT, LexAction::Shift, "start")
        .tokenizer()
        .unwrap()
}

/// Runs of `o` reduce in place, so a full scan of `"oops"` loops on `'p'`
pub fn self_reducing_tokenizer() -> Tokenizer<&'static str, String> {
    LexStateMachine::builder("start")
        .on('o', LexAction::Shift, "o")
        .stay('p', LexAction::ShiftReduce)
        .stay(characters::ANY, LexAction::Shift)
        .begin("o")
        .stay('o', LexAction::Shift)
        .stay(characters::ANY, LexAction::Reduce)
        .tokenizer()
        .unwrap()
}

/// Words and integers; whitespace and junk are flushed without a token
pub fn filtering_tokenizer() -> Tokenizer<&'static str, String> {
    let digit = CharPredicate::range('0', '9');
    let lower = CharPredicate::range('a', 'z');
    let upper = CharPredicate::range('A', 'Z');
    let space = CharPredicate::exact(' ');

    LexStateMachine::builder_with("start", |state, text, _| {
        if text.is_empty() || *state == "space" || *state == "error" {
            None
        } else {
            Some(text.to_string())
        }
    })
    .on(space.clone(), LexAction::Shift, "space")
    .on(digit.clone(), LexAction::Shift, "integer")
    .on_each([upper.clone(), lower.clone()], LexAction::Shift, "identifier")
    .on(characters::ANY, LexAction::Shift, "error")
    .begin("space")
    .stay(space.clone(), LexAction::Shift)
    .on(characters::ANY, LexAction::Reduce, "start")
    .begin("integer")
    .stay(digit.clone(), LexAction::Shift)
    .on(characters::ANY, LexAction::Reduce, "start")
    .begin("identifier")
    .stay_each([upper.clone(), lower.clone()], LexAction::Shift)
    .on(characters::ANY, LexAction::Reduce, "start")
    .begin("error")
    .on(space, LexAction::Reduce, "start")
    .on(digit, LexAction::Reduce, "start")
    .on_each([upper, lower], LexAction::Reduce, "start")
    .stay(characters::ANY, LexAction::Shift)
    .tokenizer()
    .unwrap()
}

/// Maximal runs of `a..=z`; every other character is skipped.
///
/// Every state ends in a catch-all rule, so no input can fail.
/// The returned counter tracks token factory invocations.
pub fn counting_word_tokenizer() -> (Tokenizer<u8, String>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let tokenizer = LexStateMachine::builder_with(0u8, move |_, text, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    })
    .on(characters::LOWER, LexAction::Shift, 1)
    .stay(characters::ANY, LexAction::Skip)
    .begin(1)
    .stay(characters::LOWER, LexAction::Shift)
    .on(characters::ANY, LexAction::Reduce, 0)
    .tokenizer()
    .unwrap();
    (tokenizer, calls)
}

/// Runs of `a..=z` the slow way, for comparison
pub fn lower_runs(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_lowercase())
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}
