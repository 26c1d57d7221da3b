/*!

Built-in symbols and helpers to build and recognize the terms the enumerator itself produces or inspects: booleans,
equality, conditionals, and the set and finite-set operations used by the set specializations.

Polymorphic symbols such as `==` are instantiated per sort, so `==` on `Bool` and `==` on `Nat` are distinct symbols
that share a name. Recognition is by name.

*/

use once_cell::sync::Lazy;

use crate::api::{
  sort::Sort,
  symbol::FunctionSymbol,
  term::Term
};

pub const TRUE       : &str = "true";
pub const FALSE      : &str = "false";
pub const NOT        : &str = "!";
pub const AND        : &str = "&&";
pub const OR         : &str = "||";
pub const EQUAL_TO   : &str = "==";
pub const NOT_EQUAL  : &str = "!=";
pub const IF         : &str = "if";
pub const ELEMENT_OF : &str = "in";
pub const SET_CONS   : &str = "@set";
pub const FSET_EMPTY : &str = "{}";
pub const FSET_INSERT: &str = "@fset_insert";

static TRUE_TERM : Lazy<Term> = Lazy::new(|| Term::symbol(FunctionSymbol::new(TRUE, Sort::bool())));
static FALSE_TERM: Lazy<Term> = Lazy::new(|| Term::symbol(FunctionSymbol::new(FALSE, Sort::bool())));

// region Booleans

pub fn true_symbol() -> FunctionSymbol {
  FunctionSymbol::new(TRUE, Sort::bool())
}

pub fn false_symbol() -> FunctionSymbol {
  FunctionSymbol::new(FALSE, Sort::bool())
}

pub fn true_() -> Term {
  TRUE_TERM.clone()
}

pub fn false_() -> Term {
  FALSE_TERM.clone()
}

pub fn bool_(value: bool) -> Term {
  if value { true_() } else { false_() }
}

pub fn is_true(term: &Term) -> bool {
  *term == *TRUE_TERM
}

pub fn is_false(term: &Term) -> bool {
  *term == *FALSE_TERM
}

pub fn not(term: Term) -> Term {
  let b = Sort::bool();
  Term::apply(FunctionSymbol::new(NOT, Sort::function(vec![b.clone()], b)), vec![term])
}

pub fn and(lhs: Term, rhs: Term) -> Term {
  Term::apply(binary_bool_symbol(AND), vec![lhs, rhs])
}

pub fn or(lhs: Term, rhs: Term) -> Term {
  Term::apply(binary_bool_symbol(OR), vec![lhs, rhs])
}

fn binary_bool_symbol(name: &str) -> FunctionSymbol {
  let b = Sort::bool();
  FunctionSymbol::new(name, Sort::function(vec![b.clone(), b.clone()], b))
}

// endregion Booleans

// region Equality and conditionals

pub fn equal_to_symbol(sort: &Sort) -> FunctionSymbol {
  FunctionSymbol::new(EQUAL_TO, Sort::function(vec![sort.clone(), sort.clone()], Sort::bool()))
}

pub fn not_equal_to_symbol(sort: &Sort) -> FunctionSymbol {
  FunctionSymbol::new(NOT_EQUAL, Sort::function(vec![sort.clone(), sort.clone()], Sort::bool()))
}

pub fn equal_to(lhs: Term, rhs: Term) -> Term {
  let sort = lhs.sort();
  Term::apply(equal_to_symbol(&sort), vec![lhs, rhs])
}

pub fn not_equal_to(lhs: Term, rhs: Term) -> Term {
  let sort = lhs.sort();
  Term::apply(not_equal_to_symbol(&sort), vec![lhs, rhs])
}

/// `if(condition, then, else)`, of the sort of `then_branch`.
pub fn if_(condition: Term, then_branch: Term, else_branch: Term) -> Term {
  let sort   = then_branch.sort();
  let symbol = FunctionSymbol::new(IF, Sort::function(vec![Sort::bool(), sort.clone(), sort.clone()], sort));
  Term::apply(symbol, vec![condition, then_branch, else_branch])
}

// endregion Equality and conditionals

// region Sets

/// The empty finite set of the given element sort.
pub fn fset_empty(element_sort: &Sort) -> Term {
  Term::symbol(FunctionSymbol::new(FSET_EMPTY, Sort::fset(element_sort.clone())))
}

/// Inserts `element` into the finite set `set`.
pub fn fset_insert(element_sort: &Sort, element: Term, set: Term) -> Term {
  let fset   = Sort::fset(element_sort.clone());
  let symbol = FunctionSymbol::new(FSET_INSERT, Sort::function(vec![element_sort.clone(), fset.clone()], fset));
  Term::apply(symbol, vec![element, set])
}

/// The set constructor `@set(f, s)`: `x` is a member iff `f(x)` differs from the membership of `x` in the finite set
/// `s`. With `f` the constant false function the set is exactly `s`.
pub fn set_constructor(element_sort: &Sort, function: Term, fset: Term) -> Term {
  let characteristic = Sort::function(vec![element_sort.clone()], Sort::bool());
  let symbol = FunctionSymbol::new(
    SET_CONS,
    Sort::function(vec![characteristic, Sort::fset(element_sort.clone())], Sort::set(element_sort.clone()))
  );
  Term::apply(symbol, vec![function, fset])
}

/// Membership `element in set`, for `Set`, `FSet`, `Bag` and `FBag` sorts.
pub fn element_of(element: Term, set: Term) -> Term {
  let element_sort = element.sort();
  let symbol = FunctionSymbol::new(
    ELEMENT_OF,
    Sort::function(vec![element_sort, set.sort()], Sort::bool())
  );
  Term::apply(symbol, vec![element, set])
}

// endregion Sets

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn booleans_are_distinguished_constants() {
    assert!(true_().is_true());
    assert!(false_().is_false());
    assert!(!true_().is_false());
    assert_eq!(bool_(true), true_());
    assert_eq!(Term::symbol(true_symbol()), true_());
  }

  #[test]
  fn set_terms_have_expected_sorts() {
    let b     = Sort::bool();
    let empty = fset_empty(&b);
    let one   = fset_insert(&b, true_(), empty.clone());
    assert_eq!(one.sort(), Sort::fset(b.clone()));
    assert_eq!(element_of(true_(), one).sort(), b);
    assert_eq!(if_(true_(), empty.clone(), empty).sort(), Sort::fset(Sort::bool()));
  }
}
