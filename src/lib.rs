/*!

A resumable, constructor-driven enumerator of the solutions of a boolean condition over variables of data sorts.

Given variables `x1, …, xn` and a condition `φ`, the enumerator lazily produces bindings of the variables to closed
terms under which `φ` rewrites to `true` (or, with a different filter, to anything but `true`). Variables of algebraic
sorts are split by constructors, and variables of finite function, set and finite set sorts by generating their
values. Everything the enumerator knows about the data comes from a `DataSpecification` and a `Rewriter`.

```
use dataenum::{
  api::{standard, DataSpec, IdentifierGenerator, SimpleRewriter, Substitution, Term, Variable},
  Enumerator, EnumeratorQueue, IsNotFalse, WorkItem,
};

let mut spec = DataSpec::new();
let e = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
let rewriter = SimpleRewriter::new(&spec);
let id_generator = IdentifierGenerator::new();

let a = Variable::new("a", e.clone());
let b = Variable::new("b", e.clone());
let condition = standard::not_equal_to(Term::variable(a.clone()), Term::variable(b.clone()));

let mut enumerator = Enumerator::new(&rewriter, &spec, &id_generator);
let mut sigma = Substitution::new();
let mut queue = EnumeratorQueue::from([WorkItem::new(vec![a, b], condition)]);

let solutions = enumerator.begin(&mut sigma, &mut queue, IsNotFalse).count();
assert_eq!(solutions, 2);
```

*/

pub mod abstractions;
pub mod api;
mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};

pub use crate::core::enumerator::{
  enumerate_expressions,
  is_enumerable,
  AcceptAll,
  Enumerator,
  EnumeratorError,
  EnumeratorIter,
  EnumeratorOptions,
  EnumeratorQueue,
  FailureMode,
  Filter,
  IsNotFalse,
  IsNotTrue,
  SortCache,
  Trace,
  UnsupportedReason,
  WorkItem
};

// The logging macros expand to `$crate::tracing`.
#[doc(hidden)]
pub use tracing;

// Configuration

/// Finite set and function sorts needing at least `2^MAX_ENUMERATION_BITS` values are refused.
pub const MAX_ENUMERATION_BITS    : usize = 32;
/// Generating more than `2^WARNING_ENUMERATION_BITS` values of a sort is logged as a warning.
pub const WARNING_ENUMERATION_BITS: usize = 16;
