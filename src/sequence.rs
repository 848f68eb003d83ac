use std::fmt::Display;
use std::iter::FusedIterator;

use num_traits::{CheckedAdd, One, Zero};

/// Integer domain a Fibonacci sequence can be computed in.
///
/// `checked_add` lets the iterator end at the last representable term
/// instead of wrapping.
pub trait Term: Zero + One + CheckedAdd + Ord + Display + Copy {}

impl<T: Zero + One + CheckedAdd + Ord + Display + Copy> Term for T {}

/// Fibonacci terms strictly below a bound.
///
/// `current` is the next value to emit and `next` its successor; `next` is
/// `None` once the successor overflowed the term type.
#[derive(Debug, Clone)]
pub struct Fibonacci<T> {
    bound: T,
    current: Option<T>,
    next: Option<T>,
}

impl<T: Term> Fibonacci<T> {
    pub fn below(bound: T) -> Self {
        Self {
            bound,
            current: Some(T::zero()),
            next: Some(T::one()),
        }
    }
}

impl<T: Term> Iterator for Fibonacci<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current?;
        if current >= self.bound {
            self.current = None;
            return None;
        }
        self.current = self.next;
        self.next = self.next.and_then(|next| current.checked_add(&next));
        Some(current)
    }
}

impl<T: Term> FusedIterator for Fibonacci<T> {}

/// Starts a fresh sequence from `(0, 1)` that stops before reaching `bound`.
pub fn fibonacci_below<T: Term>(bound: T) -> Fibonacci<T> {
    Fibonacci::below(bound)
}
