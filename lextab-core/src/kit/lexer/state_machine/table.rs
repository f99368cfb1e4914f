//! Compiled transition table
//!
//! Immutable once built. State labels are interned to dense [`StateId`]s
//! with the initial state at id 0.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use lextab_config::LimitConfig;
use tracing::debug;

use super::machine::LexStateMachine;
use crate::kit::lexer::error::{BuildError, LexError};
use crate::kit::lexer::predicate::CharPredicate;
use crate::kit::lexer::types::{LexAction, StateId, StateLabel, TokenFactory};

/// One `(predicate, action, next state)` entry of a state
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub(crate) pattern: CharPredicate,
    pub(crate) action: LexAction,
    pub(crate) next: StateId,
}

/// A validated, frozen set of rules plus the token factory
pub struct TransitionTable<S, T> {
    labels: Vec<S>,
    index: HashMap<S, StateId>,
    rules: Vec<Vec<Rule>>,
    factory: TokenFactory<S, T>,
    limits: LimitConfig,
}

impl<S, T> TransitionTable<S, T>
where
    S: StateLabel,
{
    /// The id of the initial state
    pub const INIT: StateId = 0;

    /// `labels[0]` must be the initial state and `rules` must be parallel to `labels`.
    pub(crate) fn new(
        labels: Vec<S>,
        rules: Vec<Vec<Rule>>,
        factory: TokenFactory<S, T>,
        limits: LimitConfig,
    ) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();
        Self {
            labels,
            index,
            rules,
            factory,
            limits,
        }
    }

    /// Label of the initial state
    pub fn init(&self) -> &S {
        &self.labels[Self::INIT]
    }

    pub fn label(&self, id: StateId) -> Option<&S> {
        self.labels.get(id)
    }

    pub fn state_id(&self, label: &S) -> Option<StateId> {
        self.index.get(label).copied()
    }

    /// State labels in id order
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.labels.iter()
    }

    pub fn state_count(&self) -> usize {
        self.labels.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.iter().map(Vec::len).sum()
    }

    pub fn limits(&self) -> LimitConfig {
        self.limits
    }

    /// Spawn a fresh engine backed by this table
    pub fn machine(self: &Arc<Self>) -> LexStateMachine<S, T> {
        LexStateMachine::new(Arc::clone(self))
    }

    /// First rule of `state` whose predicate accepts `ch`
    pub(crate) fn select(&self, state: StateId, ch: char) -> Result<&Rule, LexError> {
        let rules = self
            .rules
            .get(state)
            .ok_or(LexError::UnknownState(state))?;
        rules
            .iter()
            .find(|rule| rule.pattern.test(ch))
            .ok_or_else(|| LexError::UnhandledCharacter {
                ch,
                state: self.describe(state),
            })
    }

    pub(crate) fn make_token(
        &self,
        state: StateId,
        text: &str,
        end: bool,
    ) -> Result<Option<T>, LexError> {
        let label = self.labels.get(state).ok_or(LexError::UnknownState(state))?;
        Ok((self.factory)(label, text, end))
    }

    /// Invoke the factory once per state with an empty buffer.
    pub(crate) fn check_factory(&self) -> Result<(), BuildError> {
        for label in self.states() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                let _ = (self.factory)(label, "", false);
            }));
            if let Err(payload) = outcome {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                debug!(target: "lextab::build", state = ?label, %message, "Token factory check failed");
                return Err(BuildError::FactoryPanicked {
                    state: format!("{:?}", label),
                    message,
                });
            }
        }
        Ok(())
    }

    /// Human readable name of a state id
    pub(crate) fn describe(&self, state: StateId) -> String {
        match self.labels.get(state) {
            Some(label) => format!("{:?}", label),
            None => format!("#{}", state),
        }
    }
}

impl<S: fmt::Debug, T> fmt::Debug for TransitionTable<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.labels)
            .field("rule_count", &self.rules.iter().map(Vec::len).sum::<usize>())
            .field("limits", &self.limits)
            .finish()
    }
}
