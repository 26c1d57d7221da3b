/*!

A `Substitution` is the caller-owned evaluation environment handed to the rewriter: a finite map from variables to
terms, acting as the identity on every variable it does not bind.

The enumerator binds a variable only for the duration of one rewrite. `Substitution::bind_scoped` returns a
`ScopedBinding` guard that dereferences to the substitution with the binding in place and restores the previous
binding (or its absence) when dropped, on every exit path.

*/

use std::{
  fmt::{Display, Formatter},
  ops::Deref
};

use crate::{
  abstractions::{HashMap, join_string},
  api::{
    term::Term,
    variable::Variable
  }
};

#[derive(Clone, Default, Debug)]
pub struct Substitution {
  bindings: HashMap<Variable, Term>,
}

impl Substitution {
  pub fn new() -> Self {
    Self::default()
  }

  /// The value of `variable`, or the variable itself if it is unbound.
  pub fn apply(&self, variable: &Variable) -> Term {
    match self.bindings.get(variable) {
      Some(value) => value.clone(),
      None        => Term::variable(variable.clone()),
    }
  }

  #[inline(always)]
  pub fn get(&self, variable: &Variable) -> Option<&Term> {
    self.bindings.get(variable)
  }

  /// Binds `variable` to `value`, returning the previous binding. Binding a variable to itself removes the binding.
  pub fn insert(&mut self, variable: Variable, value: Term) -> Option<Term> {
    if value.as_variable() == Some(&variable) {
      self.bindings.remove(&variable)
    } else {
      self.bindings.insert(variable, value)
    }
  }

  pub fn remove(&mut self, variable: &Variable) -> Option<Term> {
    self.bindings.remove(variable)
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn clear(&mut self) {
    self.bindings.clear();
  }

  /// The bindings as a plain map, for syntactic substitution with `Term::substitute`.
  pub fn as_map(&self) -> &HashMap<Variable, Term> {
    &self.bindings
  }

  /// Binds `variable` to `value` until the returned guard is dropped.
  pub fn bind_scoped(&mut self, variable: Variable, value: Term) -> ScopedBinding<'_> {
    let previous = self.insert(variable.clone(), value);
    ScopedBinding {
      substitution: self,
      variable,
      previous,
    }
  }
}

impl Display for Substitution {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut bindings: Vec<String> = self.bindings
                                        .iter()
                                        .map(|(variable, value)| format!("{} := {}", variable, value))
                                        .collect();
    bindings.sort();
    write!(f, "[{}]", join_string(bindings.iter(), ", "))
  }
}

/// Restores the binding of one variable when dropped. See `Substitution::bind_scoped`.
pub struct ScopedBinding<'s> {
  substitution: &'s mut Substitution,
  variable    : Variable,
  previous    : Option<Term>,
}

impl Deref for ScopedBinding<'_> {
  type Target = Substitution;

  fn deref(&self) -> &Substitution {
    self.substitution
  }
}

impl Drop for ScopedBinding<'_> {
  fn drop(&mut self) {
    match self.previous.take() {
      Some(previous) => { self.substitution.bindings.insert(self.variable.clone(), previous); }
      None           => { self.substitution.bindings.remove(&self.variable); }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{sort::Sort, standard};

  #[test]
  fn scoped_binding_restores_previous_value() {
    let x = Variable::new("x", Sort::bool());
    let mut sigma = Substitution::new();
    sigma.insert(x.clone(), standard::false_());

    {
      let bound = sigma.bind_scoped(x.clone(), standard::true_());
      assert_eq!(bound.apply(&x), standard::true_());
    }
    assert_eq!(sigma.apply(&x), standard::false_());
  }

  #[test]
  fn scoped_binding_removes_fresh_binding() {
    let x = Variable::new("x", Sort::bool());
    let mut sigma = Substitution::new();

    {
      let bound = sigma.bind_scoped(x.clone(), standard::true_());
      assert_eq!(bound.len(), 1);
    }
    assert!(sigma.is_empty());
    assert_eq!(sigma.apply(&x), Term::variable(x));
  }
}
