/*!

A `Sort` is a data type. Every sort has a fixed `SortKind`, a closed tagged union over the shapes of sorts the
enumerator distinguishes:

 - `Algebraic`: a named sort whose values are generated by constructors, for example `Bool` or a structured sort
   `D = struct d1(E) | d2(E)`. A named sort without constructors is opaque.
 - `Function`: `D1 # … # Dn -> C`.
 - `Set`, `FSet`, `Bag`, `FBag`: container sorts over an element sort.

Sorts are immutable, cheap to clone (reference counted), and compare structurally.

*/

use std::{
  fmt::{Display, Formatter},
  sync::Arc
};

use once_cell::sync::Lazy;

use crate::abstractions::{IString, join_string};

static BOOL_SORT: Lazy<Sort> = Lazy::new(|| Sort::algebraic("Bool"));

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SortKind {
  Algebraic(IString),
  Function {
    domain  : Vec<Sort>,
    codomain: Sort,
  },
  Set(Sort),
  FSet(Sort),
  Bag(Sort),
  FBag(Sort),
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sort(Arc<SortKind>);

impl Sort {
  pub fn new(kind: SortKind) -> Sort {
    Sort(Arc::new(kind))
  }

  pub fn algebraic(name: &str) -> Sort {
    Sort::new(SortKind::Algebraic(IString::from(name)))
  }

  pub fn function(domain: Vec<Sort>, codomain: Sort) -> Sort {
    Sort::new(SortKind::Function { domain, codomain })
  }

  pub fn set(element: Sort) -> Sort {
    Sort::new(SortKind::Set(element))
  }

  pub fn fset(element: Sort) -> Sort {
    Sort::new(SortKind::FSet(element))
  }

  pub fn bag(element: Sort) -> Sort {
    Sort::new(SortKind::Bag(element))
  }

  pub fn fbag(element: Sort) -> Sort {
    Sort::new(SortKind::FBag(element))
  }

  /// The sort of booleans. Its constructors `true` and `false` are predeclared by `DataSpec`.
  pub fn bool() -> Sort {
    BOOL_SORT.clone()
  }

  #[inline(always)]
  pub fn kind(&self) -> &SortKind {
    &self.0
  }

  #[inline(always)]
  pub fn is_bool(&self) -> bool {
    *self == *BOOL_SORT
  }

  #[inline(always)]
  pub fn is_function(&self) -> bool {
    matches!(self.kind(), SortKind::Function { .. })
  }

  /// The element sort of a container sort.
  pub fn element_sort(&self) -> Option<&Sort> {
    match self.kind() {
      SortKind::Set(element)
      | SortKind::FSet(element)
      | SortKind::Bag(element)
      | SortKind::FBag(element) => Some(element),
      _ => None,
    }
  }

  /// For a function sort, the codomain. For any other sort, the sort itself. This is the sort of the result of
  /// applying a symbol of this sort to its arguments.
  pub fn target_sort(&self) -> &Sort {
    match self.kind() {
      SortKind::Function { codomain, .. } => codomain,
      _ => self,
    }
  }

  /// For a function sort, the domain. Empty for any other sort.
  pub fn domain(&self) -> &[Sort] {
    match self.kind() {
      SortKind::Function { domain, .. } => domain,
      _ => &[],
    }
  }
}

impl Display for Sort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.kind() {

      SortKind::Algebraic(name) => write!(f, "{}", name),

      SortKind::Function { domain, codomain } => {
        write!(f, "{} -> {}", join_string(domain.iter(), " # "), codomain)
      }

      SortKind::Set(element)  => write!(f, "Set({})", element),
      SortKind::FSet(element) => write!(f, "FSet({})", element),
      SortKind::Bag(element)  => write!(f, "Bag({})", element),
      SortKind::FBag(element) => write!(f, "FBag({})", element),

    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sorts_compare_structurally() {
    assert_eq!(Sort::set(Sort::bool()), Sort::set(Sort::algebraic("Bool")));
    assert_ne!(Sort::set(Sort::bool()), Sort::fset(Sort::bool()));
    assert!(Sort::algebraic("Bool").is_bool());
  }

  #[test]
  fn display_sorts() {
    let e = Sort::algebraic("E");
    let f = Sort::function(vec![e.clone(), Sort::bool()], Sort::fset(e.clone()));
    assert_eq!(f.to_string(), "E # Bool -> FSet(E)");
    assert_eq!(f.target_sort(), &Sort::fset(e.clone()));
    assert_eq!(f.domain().len(), 2);
    assert_eq!(e.target_sort(), &e);
  }
}
