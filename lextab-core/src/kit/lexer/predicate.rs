//! Character predicates
//!
//! A predicate is plain data so the common classes can be `const`
//! (see [`characters`](super::characters)); composition allocates.

use std::fmt;
use std::ops::RangeInclusive;

/// A boolean test over one character
#[derive(Clone)]
pub enum CharPredicate {
    /// Matches every character
    Any,
    /// Matches one character
    Exact(char),
    /// Matches an inclusive range of characters
    Range(char, char),
    /// Matches whatever the function accepts
    Func(fn(char) -> bool),
    /// Short-circuiting logical AND
    And(Box<CharPredicate>, Box<CharPredicate>),
    /// Short-circuiting logical OR
    Or(Box<CharPredicate>, Box<CharPredicate>),
    /// Logical negation
    Not(Box<CharPredicate>),
}

impl CharPredicate {
    /// Create a predicate that matches all characters
    pub const fn any() -> Self {
        CharPredicate::Any
    }

    /// Create a predicate to match a specific character
    pub const fn exact(value: char) -> Self {
        CharPredicate::Exact(value)
    }

    /// Create a predicate to match an inclusive range of characters
    pub const fn range(beg: char, end: char) -> Self {
        CharPredicate::Range(beg, end)
    }

    /// Create a predicate from a plain function, e.g. `char::is_alphabetic`
    pub const fn func(f: fn(char) -> bool) -> Self {
        CharPredicate::Func(f)
    }

    /// Evaluates this predicate on the given character.
    pub fn test(&self, ch: char) -> bool {
        match self {
            CharPredicate::Any => true,
            CharPredicate::Exact(value) => ch == *value,
            CharPredicate::Range(beg, end) => *beg <= ch && ch <= *end,
            CharPredicate::Func(f) => f(ch),
            CharPredicate::And(lhs, rhs) => lhs.test(ch) && rhs.test(ch),
            CharPredicate::Or(lhs, rhs) => lhs.test(ch) || rhs.test(ch),
            CharPredicate::Not(inner) => !inner.test(ch),
        }
    }

    /// `self && other`; `other` is not evaluated when `self` is false.
    pub fn and(self, other: impl Into<CharPredicate>) -> Self {
        CharPredicate::And(Box::new(self), Box::new(other.into()))
    }

    /// `self || other`; `other` is not evaluated when `self` is true.
    pub fn or(self, other: impl Into<CharPredicate>) -> Self {
        CharPredicate::Or(Box::new(self), Box::new(other.into()))
    }

    pub fn negate(self) -> Self {
        CharPredicate::Not(Box::new(self))
    }
}

impl From<char> for CharPredicate {
    fn from(value: char) -> Self {
        CharPredicate::Exact(value)
    }
}

impl From<RangeInclusive<char>> for CharPredicate {
    fn from(range: RangeInclusive<char>) -> Self {
        CharPredicate::Range(*range.start(), *range.end())
    }
}

impl From<fn(char) -> bool> for CharPredicate {
    fn from(f: fn(char) -> bool) -> Self {
        CharPredicate::Func(f)
    }
}

impl fmt::Debug for CharPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharPredicate::Any => write!(f, "any"),
            CharPredicate::Exact(value) => write!(f, "{:?}", value),
            CharPredicate::Range(beg, end) => write!(f, "{:?}..={:?}", beg, end),
            CharPredicate::Func(_) => write!(f, "fn"),
            CharPredicate::And(lhs, rhs) => write!(f, "({:?} && {:?})", lhs, rhs),
            CharPredicate::Or(lhs, rhs) => write!(f, "({:?} || {:?})", lhs, rhs),
            CharPredicate::Not(inner) => write!(f, "!{:?}", inner),
        }
    }
}
