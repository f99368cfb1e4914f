//! Line ending normalization
//!
//! Folds CR, LF and CRLF into a single LF with one character of lookback, so
//! tables never need CR specific rules.

use std::iter::FusedIterator;

use crate::kit::lexer::characters::{CP_CR, CP_LF};

/// Iterator adapter that rewrites CR and CRLF to LF
#[derive(Debug, Clone)]
pub struct LineEndings<I> {
    inner: I,
    /// The previous character was a CR
    last_cr: bool,
}

impl<I> LineEndings<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            last_cr: false,
        }
    }
}

impl<I> Iterator for LineEndings<I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let ch = self.inner.next()?;
            if ch == CP_CR {
                self.last_cr = true;
                return Some(CP_LF);
            }
            if ch == CP_LF && self.last_cr {
                // second half of a CRLF pair
                self.last_cr = false;
                continue;
            }
            self.last_cr = false;
            return Some(ch);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        // a pending CR may swallow the next character
        let lower = if self.last_cr { lower.saturating_sub(1) } else { lower };
        (lower / 2 + lower % 2, upper)
    }
}

impl<I> FusedIterator for LineEndings<I> where I: FusedIterator<Item = char> {}

/// Extension trait adding [`LineEndings`] to any character iterator
pub trait NormalizeLineEndings: Iterator<Item = char> + Sized {
    fn normalize_line_endings(self) -> LineEndings<Self> {
        LineEndings::new(self)
    }
}

impl<I> NormalizeLineEndings for I where I: Iterator<Item = char> {}

/// Normalize every line ending in `text` to LF
pub fn normalize_line_endings(text: &str) -> String {
    text.chars().normalize_line_endings().collect()
}
