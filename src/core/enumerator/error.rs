/*!

Errors raised by the enumerator. In `FailureMode::Abort` they are returned from the call that triggered them. In
`FailureMode::Invalidate` the refused, unsupported, and budget errors instead mark a work item invalid, and the error
is only logged.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::api::{Sort, SortKind, Term};

/// Why a sort cannot be enumerated at all.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UnsupportedReason {
  /// An algebraic sort without constructors.
  NoConstructors,
  /// A function, set, or finite set sort that is not certainly finite.
  NotFinite,
  /// Bags and finite bags are never enumerated.
  Bag,
}

#[derive(Clone, PartialEq, Eq)]
pub enum EnumeratorError {
  /// Enumerating the sort would need at least 2^32 values.
  Refused {
    sort: Sort,
  },
  Unsupported {
    sort  : Sort,
    reason: UnsupportedReason,
  },
  /// The cumulative step counter of the session reached `max_count`.
  BudgetExceeded {
    max_count: usize,
  },
  /// A solution of a session seeded with `true` whose condition is not `true`.
  InconsistentSolution {
    expression: Term,
  },
}

impl EnumeratorError {
  /// Only a budget overrun can succeed when retried, and only with a larger budget.
  pub fn is_retryable(&self) -> bool {
    matches!(self, EnumeratorError::BudgetExceeded { .. })
  }
}

fn sort_description(sort: &Sort) -> &'static str {
  match sort.kind() {
    SortKind::Algebraic(_)       => "sort",
    SortKind::Function { .. }    => "function sort",
    SortKind::Set(_)             => "set sort",
    SortKind::FSet(_)            => "finite set sort",
    SortKind::Bag(_)             => "bag sort",
    SortKind::FBag(_)            => "finite bag sort",
  }
}

impl Display for EnumeratorError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      EnumeratorError::Refused { sort } => {
        write!(f, "{} {} has too many elements to enumerate", sort_description(sort), sort)
      }

      EnumeratorError::Unsupported { sort, reason: UnsupportedReason::NoConstructors } => {
        write!(f, "cannot enumerate elements of sort {} without constructors", sort)
      }

      EnumeratorError::Unsupported { sort, .. } => {
        write!(f, "cannot enumerate elements of {} {}", sort_description(sort), sort)
      }

      EnumeratorError::BudgetExceeded { max_count } => {
        write!(f, "enumeration was aborted, since it did not complete within {} iterations", max_count)
      }

      EnumeratorError::InconsistentSolution { expression } => {
        write!(f, "enumeration produced a solution whose condition {} is not true", expression)
      }

    }
  }
}

impl Debug for EnumeratorError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for EnumeratorError {}
