//! Transition table builder
//!
//! Rules accumulate per state in insertion order. A cursor (set with
//! [`Builder::begin`], initially the initial state) lets consecutive rules of
//! one state omit the state label.
//!
//! ```ignore
//! let table = Builder::new("start")
//!     .on(characters::DIGIT, LexAction::Shift, "integer")
//!     .on(characters::ANY, LexAction::ShiftReduce, "start")
//!     .begin("integer")
//!     .stay(characters::DIGIT, LexAction::Shift)
//!     .on(characters::ANY, LexAction::Reduce, "start")
//!     .build()?;
//! ```

use std::collections::HashMap;
use std::fmt;

use lextab_config::LimitConfig;
use tracing::{debug, trace};

use super::table::{Rule, TransitionTable};
use crate::kit::lexer::error::BuildError;
use crate::kit::lexer::predicate::CharPredicate;
use crate::kit::lexer::tokenizer::Tokenizer;
use crate::kit::lexer::types::{LexAction, StateId, StateLabel, TokenFactory};

/// A rule before state labels are resolved to ids
struct Element<S> {
    pattern: CharPredicate,
    action: LexAction,
    next: S,
}

/// Mutable accumulation phase of a [`TransitionTable`]
pub struct Builder<S, T> {
    init: S,
    cursor: S,
    states: Vec<(S, Vec<Element<S>>)>,
    positions: HashMap<S, usize>,
    factory: TokenFactory<S, T>,
    limits: LimitConfig,
}

impl<S> Builder<S, String>
where
    S: StateLabel,
{
    /// Start a table whose tokens are the flushed text; empty flushes emit nothing.
    pub fn new(init: S) -> Self {
        Self::with_factory(init, |_, text, _| {
            if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            }
        })
    }
}

impl<S, T> Builder<S, T>
where
    S: StateLabel,
{
    /// Start a table with a custom token factory
    pub fn with_factory<F>(init: S, factory: F) -> Self
    where
        F: Fn(&S, &str, bool) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            cursor: init.clone(),
            init,
            states: Vec::new(),
            positions: HashMap::new(),
            factory: Box::new(factory),
            limits: LimitConfig::default(),
        }
    }

    /// Override the scan limits baked into the table
    pub fn limits(mut self, limits: LimitConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Make `state` the target of the cursor operations
    pub fn begin(mut self, state: S) -> Self {
        self.cursor = state;
        self
    }

    /// Add a transition from `state` to `next`.
    pub fn add(
        mut self,
        state: S,
        pattern: impl Into<CharPredicate>,
        action: LexAction,
        next: S,
    ) -> Self {
        self.push(state, pattern.into(), action, next);
        self
    }

    /// Add the same transition for each pattern.
    pub fn add_each<I>(mut self, state: S, patterns: I, action: LexAction, next: S) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CharPredicate>,
    {
        for pattern in patterns {
            self.push(state.clone(), pattern.into(), action, next.clone());
        }
        self
    }

    /// Add a transition from the cursor state to `next`.
    pub fn on(self, pattern: impl Into<CharPredicate>, action: LexAction, next: S) -> Self {
        let state = self.cursor.clone();
        self.add(state, pattern, action, next)
    }

    pub fn on_each<I>(self, patterns: I, action: LexAction, next: S) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CharPredicate>,
    {
        let state = self.cursor.clone();
        self.add_each(state, patterns, action, next)
    }

    /// Add a transition from the cursor state back to itself.
    pub fn stay(self, pattern: impl Into<CharPredicate>, action: LexAction) -> Self {
        let state = self.cursor.clone();
        self.add(state.clone(), pattern, action, state)
    }

    pub fn stay_each<I>(self, patterns: I, action: LexAction) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CharPredicate>,
    {
        let state = self.cursor.clone();
        self.add_each(state.clone(), patterns, action, state)
    }

    fn push(&mut self, state: S, pattern: CharPredicate, action: LexAction, next: S) {
        trace!(target: "lextab::build", ?state, ?pattern, %action, ?next, "Adding transition");
        let element = Element {
            pattern,
            action,
            next,
        };
        match self.positions.get(&state) {
            Some(&pos) => self.states[pos].1.push(element),
            None => {
                self.positions.insert(state.clone(), self.states.len());
                self.states.push((state, vec![element]));
            }
        }
    }

    /// Validate the rules and freeze them into a table.
    ///
    /// Fails when the initial state, or any state named as a next state, has
    /// no rules of its own.
    pub fn build(self) -> Result<TransitionTable<S, T>, BuildError> {
        if !self.positions.contains_key(&self.init) {
            debug!(target: "lextab::build", init = ?self.init, "Initial state has no transitions");
            return Err(BuildError::NoTransitions {
                state: format!("{:?}", self.init),
            });
        }

        // the initial state takes id 0, the rest keep insertion order
        let mut labels = Vec::with_capacity(self.states.len());
        labels.push(self.init.clone());
        labels.extend(
            self.states
                .iter()
                .map(|(state, _)| state)
                .filter(|state| **state != self.init)
                .cloned(),
        );
        let ids: HashMap<S, StateId> = labels
            .iter()
            .enumerate()
            .map(|(id, state)| (state.clone(), id))
            .collect();

        let mut rules: Vec<Vec<Rule>> = labels.iter().map(|_| Vec::new()).collect();
        for (state, elements) in self.states {
            let mut compiled = Vec::with_capacity(elements.len());
            for element in elements {
                let next = match ids.get(&element.next) {
                    Some(&next) => next,
                    None => {
                        debug!(target: "lextab::build", from = ?state, next = ?element.next, "Transition into undefined state");
                        return Err(BuildError::NoTransitions {
                            state: format!("{:?}", element.next),
                        });
                    }
                };
                compiled.push(Rule {
                    pattern: element.pattern,
                    action: element.action,
                    next,
                });
            }
            if let Some(&id) = ids.get(&state) {
                rules[id] = compiled;
            }
        }

        let table = TransitionTable::new(labels, rules, self.factory, self.limits);
        debug!(
            target: "lextab::build",
            init = ?table.init(),
            states = table.state_count(),
            rules = table.rule_count(),
            "Built transition table"
        );
        Ok(table)
    }

    /// [`build`](Self::build), then smoke-test the token factory once per
    /// state with an empty buffer; a panicking factory fails the build.
    pub fn build_checked(self) -> Result<TransitionTable<S, T>, BuildError> {
        let table = self.build()?;
        table.check_factory()?;
        Ok(table)
    }

    /// Build straight into a [`Tokenizer`]
    pub fn tokenizer(self) -> Result<Tokenizer<S, T>, BuildError> {
        self.build().map(Tokenizer::new)
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Builder<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("init", &self.init)
            .field("cursor", &self.cursor)
            .field(
                "states",
                &self.states.iter().map(|(state, _)| state).collect::<Vec<_>>(),
            )
            .field("limits", &self.limits)
            .finish()
    }
}
