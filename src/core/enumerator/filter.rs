/*!

A filter decides whether a rewritten condition is kept on the worklist. The enumerator calls it on the condition of
every child it produces; a rejected child is discarded together with its whole subtree.

Any `Fn(&Term) -> bool` is a filter.

*/

use crate::api::Term;

pub trait Filter {
  fn accept(&self, expression: &Term) -> bool;
}

impl<F: Fn(&Term) -> bool> Filter for F {
  fn accept(&self, expression: &Term) -> bool {
    self(expression)
  }
}

/// Keeps everything except the literal `false`. Finds all solutions of a condition.
#[derive(Copy, Clone, Default, Debug)]
pub struct IsNotFalse;

impl Filter for IsNotFalse {
  fn accept(&self, expression: &Term) -> bool {
    !expression.is_false()
  }
}

/// Keeps everything except the literal `true`. Finds the counterexamples of a condition.
#[derive(Copy, Clone, Default, Debug)]
pub struct IsNotTrue;

impl Filter for IsNotTrue {
  fn accept(&self, expression: &Term) -> bool {
    !expression.is_true()
  }
}

/// Keeps everything.
#[derive(Copy, Clone, Default, Debug)]
pub struct AcceptAll;

impl Filter for AcceptAll {
  fn accept(&self, _expression: &Term) -> bool {
    true
  }
}
