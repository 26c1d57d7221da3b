/*!

Fresh names for the variables the enumerator introduces. Names start with `@`, which cannot occur in user-written
identifiers, followed by a hint and a counter that is unique for the lifetime of the generator.

The generator is shared by reference between an enumerator and the nested enumerators it starts for finite-sort
materialization, so its counter lives in a `Cell`.

*/

use std::cell::Cell;

use crate::{
  abstractions::IString,
  api::{sort::Sort, variable::Variable}
};

const DEFAULT_HINT: &str = "x";

#[derive(Default, Debug)]
pub struct IdentifierGenerator {
  counter: Cell<usize>,
}

impl IdentifierGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  /// A fresh name built from `hint`.
  pub fn fresh(&self, hint: &str) -> IString {
    let index = self.counter.get();
    self.counter.set(index + 1);
    IString::from(format!("@{}{}", hint, index))
  }

  /// A fresh variable of the given sort.
  pub fn fresh_variable(&self, sort: &Sort) -> Variable {
    Variable {
      name: self.fresh(DEFAULT_HINT),
      sort: sort.clone(),
    }
  }

  /// Restarts numbering. Only sound once no term built from earlier names is still in use.
  pub fn clear(&self) {
    self.counter.set(0);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_are_unique() {
    let generator = IdentifierGenerator::new();
    let a = generator.fresh("x");
    let b = generator.fresh("x");
    let c = generator.fresh("y");
    assert_ne!(a, b);
    assert_eq!(&*a, "@x0");
    assert_eq!(&*c, "@y2");
    generator.clear();
    assert_eq!(&*generator.fresh("x"), "@x0");
  }
}
