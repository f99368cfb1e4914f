//! Lexer engine
//!
//! Runs one compiled [`TransitionTable`] over a character at a time. Each
//! scan owns its engine; the table behind it is shared.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::builder::Builder;
use super::table::TransitionTable;
use crate::kit::lexer::error::LexError;
use crate::kit::lexer::types::{LexAction, StateId, StateLabel};

/// Outcome of applying one rule to a character
#[derive(Debug)]
pub(crate) enum Dispatch<T> {
    /// The character was consumed, possibly flushing a token
    Done(Option<T>),
    /// The character must be dispatched again in the new state
    Again(Option<T>),
}

/// Mutable scan state: the current state and the text buffered since the last flush
pub struct LexStateMachine<S, T> {
    table: Arc<TransitionTable<S, T>>,
    buffer: String,
    state: StateId,
}

impl<S> LexStateMachine<S, String>
where
    S: StateLabel,
{
    /// Start building a state machine whose tokens are the flushed text.
    pub fn builder(init: S) -> Builder<S, String> {
        Builder::new(init)
    }
}

impl<S, T> LexStateMachine<S, T>
where
    S: StateLabel,
{
    /// Start building a state machine with a custom token factory.
    pub fn builder_with<F>(init: S, factory: F) -> Builder<S, T>
    where
        F: Fn(&S, &str, bool) -> Option<T> + Send + Sync + 'static,
    {
        Builder::with_factory(init, factory)
    }

    pub fn new(table: Arc<TransitionTable<S, T>>) -> Self {
        Self {
            table,
            buffer: String::new(),
            state: TransitionTable::<S, T>::INIT,
        }
    }

    pub fn table(&self) -> &Arc<TransitionTable<S, T>> {
        &self.table
    }

    /// Label of the current state
    pub fn state(&self) -> &S {
        self.table.label(self.state).unwrap_or_else(|| self.table.init())
    }

    pub fn state_id(&self) -> StateId {
        self.state
    }

    /// Text accumulated since the last flush
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Clear the buffer and return to the initial state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = TransitionTable::<S, T>::INIT;
    }

    /// Make a fresh machine over the same table.
    pub fn duplicate(&self) -> Self {
        Self::new(Arc::clone(&self.table))
    }

    /// Process the next character.
    ///
    /// Returns `Ok(false)` once `downstream` refused a token; the caller must
    /// stop feeding characters then.
    pub fn process<D>(&mut self, ch: char, mut downstream: D) -> Result<bool, LexError>
    where
        D: FnMut(T) -> bool,
    {
        let mut hops = 0;
        loop {
            match self.dispatch(ch, hops)? {
                Dispatch::Done(token) => return Ok(push(token, &mut downstream)),
                Dispatch::Again(token) => {
                    if !push(token, &mut downstream) {
                        return Ok(false);
                    }
                    hops += 1;
                }
            }
        }
    }

    /// Flush whatever is buffered at end of input, then reset.
    ///
    /// Returns the downstream verdict on the final token.
    pub fn finish<D>(&mut self, mut downstream: D) -> Result<bool, LexError>
    where
        D: FnMut(T) -> bool,
    {
        let token = self.flush_end()?;
        Ok(push(token, &mut downstream))
    }

    /// Apply the first matching rule of the current state to `ch`.
    ///
    /// `hops` counts the zero-width transitions `ch` already went through.
    pub(crate) fn dispatch(&mut self, ch: char, hops: usize) -> Result<Dispatch<T>, LexError> {
        let limit = self.table.limits().max_zero_width_hops;
        if hops > limit {
            debug!(target: "lextab::lexer", ?ch, state = ?self.state(), hops, "Zero-width hop limit exceeded");
            return Err(LexError::HopLimitExceeded {
                ch,
                state: self.table.describe(self.state),
                limit,
            });
        }

        let prev = self.state;
        let (action, next) = match self.table.select(prev, ch) {
            Ok(rule) => (rule.action, rule.next),
            Err(e) => {
                debug!(target: "lextab::lexer", error = %e, "Dispatch failed");
                return Err(e);
            }
        };
        let zero_width = action.is_zero_width();
        trace!(target: "lextab::lexer", ?ch, from = prev, to = next, %action, zero_width, hops, "Dispatch");

        // the transition happens before the action is interpreted
        self.state = next;

        if matches!(action, LexAction::Shift | LexAction::ShiftReduce) {
            self.buffer.push(ch);
        }
        let token = if action.flushes() {
            self.flush(prev, false)?
        } else {
            None
        };
        if zero_width {
            Ok(Dispatch::Again(token))
        } else {
            Ok(Dispatch::Done(token))
        }
    }

    /// End-of-input flush in the current state; leaves the machine reset.
    pub(crate) fn flush_end(&mut self) -> Result<Option<T>, LexError> {
        let token = self.flush(self.state, true);
        self.reset();
        token
    }

    fn flush(&mut self, state: StateId, end: bool) -> Result<Option<T>, LexError> {
        let token = self.table.make_token(state, &self.buffer, end)?;
        debug!(
            target: "lextab::lexer",
            state = ?self.table.label(state),
            text = ?self.buffer,
            end,
            emitted = token.is_some(),
            "Flush"
        );
        self.buffer.clear();
        Ok(token)
    }
}

fn push<T, D>(token: Option<T>, downstream: &mut D) -> bool
where
    D: FnMut(T) -> bool,
{
    match token {
        Some(token) => downstream(token),
        None => true,
    }
}

impl<S: fmt::Debug, T> fmt::Debug for LexStateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexStateMachine")
            .field("state", &self.state)
            .field("buffer", &self.buffer)
            .field("table", &self.table)
            .finish()
    }
}
