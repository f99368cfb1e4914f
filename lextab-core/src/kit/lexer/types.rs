use std::fmt;
use std::hash::Hash;

/// Index of a state inside a compiled table
pub type StateId = usize;

/// Constraints on a state label.
///
/// Labels are only compared and hashed by the engine; `Debug` is used for
/// error messages and logs.
pub trait StateLabel: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static {}

impl<S> StateLabel for S where S: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static {}

/// Builds a token from the state that produced it, the buffered text and
/// whether the flush happens at end of input. `None` emits nothing.
pub type TokenFactory<S, T> = Box<dyn Fn(&S, &str, bool) -> Option<T> + Send + Sync>;

/// What the engine does with the character a rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexAction {
    /// Consider the character again after the state transition.
    Defer,
    /// The buffered text is a token; flush it, then consider the character
    /// again in the next state.
    Reduce,
    /// Append the character.
    Shift,
    /// Append the character and flush the token.
    ShiftReduce,
    /// Drop the character.
    Skip,
    /// Drop the character and flush the token.
    SkipReduce,
}

impl LexAction {
    /// Whether the action leaves the character unconsumed
    pub fn is_zero_width(&self) -> bool {
        matches!(self, LexAction::Defer | LexAction::Reduce)
    }

    /// Whether the action flushes the buffer through the token factory
    pub fn flushes(&self) -> bool {
        matches!(
            self,
            LexAction::Reduce | LexAction::ShiftReduce | LexAction::SkipReduce
        )
    }
}

impl fmt::Display for LexAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexAction::Defer => "DEFER",
            LexAction::Reduce => "REDUCE",
            LexAction::Shift => "SHIFT",
            LexAction::ShiftReduce => "SHIFT_REDUCE",
            LexAction::Skip => "SKIP",
            LexAction::SkipReduce => "SKIP_REDUCE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_actions() {
        assert!(LexAction::Defer.is_zero_width());
        assert!(LexAction::Reduce.is_zero_width());
        assert!(!LexAction::Shift.is_zero_width());
        assert!(!LexAction::SkipReduce.is_zero_width());
    }

    #[test]
    fn test_flushing_actions() {
        assert!(LexAction::Reduce.flushes());
        assert!(LexAction::ShiftReduce.flushes());
        assert!(LexAction::SkipReduce.flushes());
        assert!(!LexAction::Defer.flushes());
        assert!(!LexAction::Skip.flushes());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(LexAction::ShiftReduce.to_string(), "SHIFT_REDUCE");
        assert_eq!(LexAction::Defer.to_string(), "DEFER");
    }
}
