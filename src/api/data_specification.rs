/*!

The data specification answers the two questions the enumerator asks about sorts: which constructors generate a sort
(in declaration order), and whether a sort is certainly finite.

`DataSpecification` is the interface. `DataSpec` is a plain constructor table with a conservative finiteness check:
it may say "no" for some finite sorts but never says "yes" for an infinite one.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{HashMap, join_string},
  api::{
    sort::{Sort, SortKind},
    standard,
    symbol::FunctionSymbol
  }
};

pub trait DataSpecification {
  /// The constructors of `sort` in declaration order. Empty if `sort` is opaque.
  fn constructors(&self, sort: &Sort) -> Vec<FunctionSymbol>;

  /// Whether `sort` is certainly finite. May under-approximate.
  fn is_certainly_finite(&self, sort: &Sort) -> bool;
}

#[derive(Clone, Debug)]
pub struct DataSpec {
  constructors: HashMap<Sort, Vec<FunctionSymbol>>,
  /// Sorts in the order their first constructor was declared, for display.
  sort_order  : Vec<Sort>,
}

impl Default for DataSpec {
  fn default() -> Self {
    let mut spec = DataSpec {
      constructors: HashMap::default(),
      sort_order  : Vec::new(),
    };
    spec.add_constructor(standard::true_symbol());
    spec.add_constructor(standard::false_symbol());
    spec
  }
}

impl DataSpec {
  /// A specification declaring only `Bool` with constructors `true` and `false`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Declares `symbol` as a constructor of its target sort. Declaring the same constructor twice has no effect.
  pub fn add_constructor(&mut self, symbol: FunctionSymbol) {
    let sort = symbol.target_sort().clone();
    if !self.constructors.contains_key(&sort) {
      self.sort_order.push(sort.clone());
    }
    let constructors = self.constructors.entry(sort).or_default();
    if !constructors.contains(&symbol) {
      constructors.push(symbol);
    }
  }

  /// Declares a structured sort `name = struct c1(..) | c2(..) | …` and returns it. Each alternative is a constructor
  /// name together with its argument sorts.
  pub fn add_structured_sort(&mut self, name: &str, alternatives: &[(&str, Vec<Sort>)]) -> Sort {
    let sort = Sort::algebraic(name);
    for (constructor_name, arguments) in alternatives {
      let constructor_sort = if arguments.is_empty() {
        sort.clone()
      } else {
        Sort::function(arguments.clone(), sort.clone())
      };
      self.add_constructor(FunctionSymbol::new(constructor_name, constructor_sort));
    }
    sort
  }

  /// Every declared constructor, grouped by sort in declaration order.
  pub fn all_constructors(&self) -> impl Iterator<Item = &FunctionSymbol> + '_ {
    self.sort_order
        .iter()
        .flat_map(|sort| self.constructors.get(sort).into_iter().flatten())
  }

  fn is_finite_in_context(&self, sort: &Sort, visiting: &mut Vec<Sort>) -> bool {
    match sort.kind() {

      SortKind::Algebraic(_) => {
        // A sort reachable from itself through constructor arguments is treated as infinite.
        if visiting.contains(sort) {
          return false;
        }
        let constructors = match self.constructors.get(sort) {
          Some(constructors) if !constructors.is_empty() => constructors,
          _ => return false,
        };
        visiting.push(sort.clone());
        let finite = constructors.iter().all(
          |constructor| constructor.domain().iter().all(|argument| self.is_finite_in_context(argument, visiting))
        );
        visiting.pop();
        finite
      }

      SortKind::Function { domain, codomain } => {
        domain.iter().all(|s| self.is_finite_in_context(s, visiting))
            && self.is_finite_in_context(codomain, visiting)
      }

      SortKind::Set(element) | SortKind::FSet(element) => self.is_finite_in_context(element, visiting),

      SortKind::Bag(_) | SortKind::FBag(_) => false,

    }
  }
}

impl DataSpecification for DataSpec {
  fn constructors(&self, sort: &Sort) -> Vec<FunctionSymbol> {
    self.constructors.get(sort).cloned().unwrap_or_default()
  }

  fn is_certainly_finite(&self, sort: &Sort) -> bool {
    self.is_finite_in_context(sort, &mut Vec::new())
  }
}

impl Display for DataSpec {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for sort in self.sort_order.iter() {
      let constructors = self.constructors.get(sort).map(Vec::as_slice).unwrap_or(&[]);
      let alternatives = constructors.iter().map(
        |c| if c.is_constant() {
          c.name.to_string()
        } else {
          format!("{}({})", c.name, join_string(c.domain().iter(), ", "))
        }
      );
      writeln!(f, "sort {} = struct {};", sort, join_string(alternatives, " | "))?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finiteness_is_conservative() {
    let mut spec = DataSpec::new();
    let e    = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
    let d    = spec.add_structured_sort("D", &[("d1", vec![e.clone()]), ("d2", vec![e.clone()])]);
    let tree = spec.add_structured_sort(
      "tree",
      &[("leaf", vec![Sort::bool()]), ("node", vec![Sort::algebraic("tree"), Sort::algebraic("tree")])]
    );

    assert!(spec.is_certainly_finite(&Sort::bool()));
    assert!(spec.is_certainly_finite(&d));
    assert!(spec.is_certainly_finite(&Sort::function(vec![e.clone(), d.clone()], Sort::bool())));
    assert!(spec.is_certainly_finite(&Sort::set(e.clone())));
    assert!(spec.is_certainly_finite(&Sort::fset(d.clone())));
    assert!(!spec.is_certainly_finite(&tree));
    assert!(!spec.is_certainly_finite(&Sort::fset(tree.clone())));
    assert!(!spec.is_certainly_finite(&Sort::bag(e.clone())));
    assert!(!spec.is_certainly_finite(&Sort::algebraic("Pos")));
  }

  #[test]
  fn constructors_in_declaration_order() {
    let mut spec = DataSpec::new();
    let e = spec.add_structured_sort("E", &[("e2", vec![]), ("e1", vec![])]);
    let names: Vec<String> = spec.constructors(&e).iter().map(|c| c.name.to_string()).collect();
    assert_eq!(names, vec!["e2", "e1"]);
    assert_eq!(spec.constructors(&Sort::bool()).len(), 2);
    assert!(spec.constructors(&Sort::algebraic("Pos")).is_empty());
  }
}
