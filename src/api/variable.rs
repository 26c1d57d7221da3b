use std::fmt::{Display, Formatter};

use crate::{
  abstractions::IString,
  api::sort::Sort
};

/// A typed variable. Two variables are the same variable exactly when both their names and their sorts agree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable {
  pub name: IString,
  pub sort: Sort,
}

impl Variable {
  pub fn new(name: &str, sort: Sort) -> Variable {
    Variable {
      name: IString::from(name),
      sort,
    }
  }

  /// Formats the variable together with its sort, as in `x: tree`.
  pub fn typed(&self) -> String {
    format!("{}: {}", self.name, self.sort)
  }
}

impl Display for Variable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}
