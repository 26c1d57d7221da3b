/*!

A `FunctionSymbol` is a name with a sort. Constructors are function symbols whose target sort is the sort they
construct: a constructor with a non-function sort is a constant, and a constructor of sort `D1 # … # Dk -> S` takes
`k` arguments.

*/

use std::fmt::Display;

use crate::{
  abstractions::IString,
  api::sort::Sort
};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FunctionSymbol {
  pub name: IString,
  pub sort: Sort,
}

impl FunctionSymbol {
  pub fn new(name: &str, sort: Sort) -> FunctionSymbol {
    FunctionSymbol {
      name: IString::from(name),
      sort,
    }
  }

  /// The sorts of the arguments. Empty for constants.
  #[inline(always)]
  pub fn domain(&self) -> &[Sort] {
    self.sort.domain()
  }

  #[inline(always)]
  pub fn is_constant(&self) -> bool {
    !self.sort.is_function()
  }

  /// The sort of a fully applied term with this symbol at its head.
  #[inline(always)]
  pub fn target_sort(&self) -> &Sort {
    self.sort.target_sort()
  }

  #[inline(always)]
  pub fn has_name(&self, name: &str) -> bool {
    &*self.name == name
  }
}

impl Display for FunctionSymbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}
