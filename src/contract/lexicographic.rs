use std::cmp::Ordering;

use crate::contract::Comparable;

/// Three-way lexicographic composition of field comparisons.
///
/// Fields are fed in their declared order; the first field that differs decides the
/// result and the fields after it are never compared.
///
/// ```
/// use comparable::contract::Lexicographic;
/// use std::cmp::Ordering;
///
/// let ordering = Lexicographic::new()
///     .then(&String::from("abc"), &String::from("abc"))
///     .then(&0i32, &4i32)
///     .finish();
/// assert_eq!(ordering, Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicographic {
    ordering: Ordering,
}

impl Lexicographic {
    pub fn new() -> Self {
        Lexicographic {
            ordering: Ordering::Equal,
        }
    }

    /// Compares the next field pair, unless an earlier field already decided.
    pub fn then<T: Comparable>(self, lhs: &T, rhs: &T) -> Self {
        self.then_with(|| lhs.compare(rhs))
    }

    /// Same as [`then`](Lexicographic::then) with a caller-supplied comparison.
    pub fn then_with<F: FnOnce() -> Ordering>(self, compare: F) -> Self {
        match self.ordering {
            Ordering::Equal => Lexicographic {
                ordering: compare(),
            },
            _ => self,
        }
    }

    pub fn finish(self) -> Ordering {
        self.ordering
    }
}

impl Default for Lexicographic {
    fn default() -> Self {
        Lexicographic::new()
    }
}

/// Strict-less lexicographic composition that only ever calls `<` on the fields.
///
/// Each step computes `lhs.field < rhs.field || (!(rhs.field < lhs.field) && rest)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessChain {
    decided: Option<bool>,
}

impl LessChain {
    pub fn new() -> Self {
        LessChain { decided: None }
    }

    pub fn then<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> Self {
        if self.decided.is_some() {
            return self;
        }
        let decided = if lhs < rhs {
            Some(true)
        } else if rhs < lhs {
            Some(false)
        } else {
            None
        };
        LessChain { decided }
    }

    /// All fields tied means not less.
    pub fn finish(self) -> bool {
        self.decided.unwrap_or(false)
    }
}

/// Lexicographic three-way comparison of two field sequences.
///
/// When one sequence is a prefix of the other, the shorter one orders first.
pub fn lexicographic_cmp<T: Comparable>(lhs: &[T], rhs: &[T]) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(l, r)| l.compare(r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
}

/// Recursive strict-less formulation of [`lexicographic_cmp`], using only `<`.
pub fn lexicographic_less<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    match (lhs.split_first(), rhs.split_first()) {
        (Some((l, lhs_rest)), Some((r, rhs_rest))) => {
            l < r || (!(r < l) && lexicographic_less(lhs_rest, rhs_rest))
        }
        (None, Some(_)) => true,
        _ => false,
    }
}
