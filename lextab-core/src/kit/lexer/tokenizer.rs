//! Tokenizer
//!
//! Composition root: `text -> chars -> LineEndings -> LexStateMachine`.
//! Every scan spawns its own engine, so one tokenizer can be reused and
//! shared across threads.

use std::fmt;
use std::iter::FusedIterator;
use std::str::Chars;
use std::sync::Arc;

use tracing::debug;

use super::core::{LineEndings, NormalizeLineEndings};
use super::error::LexError;
use super::state_machine::machine::Dispatch;
use super::state_machine::{LexStateMachine, TransitionTable};
use super::types::StateLabel;

/// State based tokenizer over a shared [`TransitionTable`]
pub struct Tokenizer<S, T> {
    table: Arc<TransitionTable<S, T>>,
}

impl<S, T> Tokenizer<S, T>
where
    S: StateLabel,
{
    pub fn new(table: TransitionTable<S, T>) -> Self {
        Self::from_shared(Arc::new(table))
    }

    pub fn from_shared(table: Arc<TransitionTable<S, T>>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Arc<TransitionTable<S, T>> {
        &self.table
    }

    /// A fresh engine for driving the table by hand
    pub fn machine(&self) -> LexStateMachine<S, T> {
        self.table.machine()
    }

    /// Split `text` into tokens, lazily.
    ///
    /// The sequence ends after the end-of-input flush, or right after the
    /// first error.
    pub fn lex<'a>(&self, text: &'a str) -> Tokens<'a, S, T> {
        debug!(target: "lextab::lexer", len = text.len(), "Starting scan");
        Tokens {
            chars: text.chars().normalize_line_endings(),
            machine: self.machine(),
            parked: None,
            done: false,
        }
    }

    /// Push every token of `text` into `downstream` until it returns `false`.
    ///
    /// Returns `Ok(false)` when `downstream` stopped the scan early.
    pub fn lex_with<D>(&self, text: &str, mut downstream: D) -> Result<bool, LexError>
    where
        D: FnMut(T) -> bool,
    {
        let mut machine = self.machine();
        for ch in text.chars().normalize_line_endings() {
            if !machine.process(ch, &mut downstream)? {
                debug!(target: "lextab::lexer", "Downstream stopped the scan");
                return Ok(false);
            }
        }
        machine.finish(&mut downstream)
    }

    /// Collect every token of `text`.
    pub fn tokenize(&self, text: &str) -> Result<Vec<T>, LexError> {
        self.lex(text).collect()
    }
}

impl<S, T> Clone for Tokenizer<S, T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<S, T> From<TransitionTable<S, T>> for Tokenizer<S, T>
where
    S: StateLabel,
{
    fn from(table: TransitionTable<S, T>) -> Self {
        Self::new(table)
    }
}

impl<S, T> From<LexStateMachine<S, T>> for Tokenizer<S, T>
where
    S: StateLabel,
{
    fn from(machine: LexStateMachine<S, T>) -> Self {
        Self::from_shared(Arc::clone(machine.table()))
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Tokenizer<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("table", &self.table)
            .finish()
    }
}

/// Lazy token sequence produced by [`Tokenizer::lex`]
pub struct Tokens<'a, S, T> {
    chars: LineEndings<Chars<'a>>,
    machine: LexStateMachine<S, T>,
    /// A character whose REDUCE yielded a token before it was re-dispatched,
    /// with the number of zero-width hops taken so far
    parked: Option<(char, usize)>,
    done: bool,
}

impl<S, T> Tokens<'_, S, T> {
    /// Whether the sequence is exhausted
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<S, T> Iterator for Tokens<'_, S, T>
where
    S: StateLabel,
{
    type Item = Result<T, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            let (ch, hops) = match self.parked.take() {
                Some(parked) => parked,
                None => match self.chars.next() {
                    Some(ch) => (ch, 0),
                    None => {
                        self.done = true;
                        return self.machine.flush_end().transpose();
                    }
                },
            };

            match self.machine.dispatch(ch, hops) {
                Ok(Dispatch::Done(Some(token))) => return Some(Ok(token)),
                Ok(Dispatch::Done(None)) => {}
                Ok(Dispatch::Again(token)) => {
                    self.parked = Some((ch, hops + 1));
                    if let Some(token) = token {
                        return Some(Ok(token));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<S, T> FusedIterator for Tokens<'_, S, T> where S: StateLabel {}

impl<S: fmt::Debug, T> fmt::Debug for Tokens<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("machine", &self.machine)
            .field("parked", &self.parked)
            .field("done", &self.done)
            .finish()
    }
}
