/*!

A `WorkItem` is one node of the search: the variables still to be enumerated, the rewritten condition, and the trace
of bindings made on the way from the seed. The worklist (`EnumeratorQueue`) is a double-ended queue of work items
owned by the caller; the enumerator pops from the front and appends children at the back, so the search is
breadth-first.

The trace is a persistent list. A child shares its parent's trace and adds one binding in front, so producing children
never copies the bindings made so far.

*/

use std::{
  collections::VecDeque,
  fmt::{Debug, Display, Formatter},
  sync::Arc
};

use crate::{
  abstractions::{HashMap, join_string},
  api::{Rewriter, Substitution, Term, Variable}
};

pub type EnumeratorQueue = VecDeque<WorkItem>;

struct TraceNode {
  variable: Variable,
  value   : Term,
  next    : Trace,
}

/// The bindings made on the path from the seed to a work item, most recent first.
#[derive(Clone, Default)]
pub struct Trace(Option<Arc<TraceNode>>);

impl Trace {
  pub fn new() -> Self {
    Self::default()
  }

  /// A trace with `variable := value` in front of `self`.
  pub fn push(&self, variable: Variable, value: Term) -> Trace {
    Trace(Some(Arc::new(TraceNode { variable, value, next: self.clone() })))
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_none()
  }

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  pub fn iter(&self) -> TraceIter<'_> {
    TraceIter { node: self.0.as_deref() }
  }
}

pub struct TraceIter<'t> {
  node: Option<&'t TraceNode>,
}

impl<'t> Iterator for TraceIter<'t> {
  type Item = (&'t Variable, &'t Term);

  fn next(&mut self) -> Option<Self::Item> {
    let node  = self.node?;
    self.node = node.next.0.as_deref();
    Some((&node.variable, &node.value))
  }
}

#[derive(Clone)]
pub struct WorkItem {
  variables : Vec<Variable>,
  expression: Term,
  trace     : Trace,
  valid     : bool,
}

impl WorkItem {
  /// A seed item with an empty trace.
  pub fn new(variables: Vec<Variable>, expression: Term) -> Self {
    WorkItem {
      variables,
      expression,
      trace: Trace::new(),
      valid: true,
    }
  }

  /// The child of `self` obtained by binding `variable` to `value`.
  pub(crate) fn child(&self, variables: Vec<Variable>, expression: Term, variable: Variable, value: Term) -> Self {
    WorkItem {
      variables,
      expression,
      trace: self.trace.push(variable, value),
      valid: true,
    }
  }

  /// `self` with its condition replaced by `expression`. The trace is kept.
  pub(crate) fn with_expression(mut self, expression: Term) -> Self {
    self.expression = expression;
    self
  }

  #[inline(always)]
  pub fn variables(&self) -> &[Variable] {
    &self.variables
  }

  #[inline(always)]
  pub fn expression(&self) -> &Term {
    &self.expression
  }

  #[inline(always)]
  pub fn trace(&self) -> &Trace {
    &self.trace
  }

  /// An item with no variables left is a solution.
  #[inline(always)]
  pub fn is_solution(&self) -> bool {
    self.variables.is_empty()
  }

  #[inline(always)]
  pub fn is_valid(&self) -> bool {
    self.valid
  }

  /// Marks the item as the end of an enumeration that could not be completed.
  pub fn invalidate(&mut self) {
    self.valid = false;
  }

  /// Resolves the trace into closed values: every variable bound on the path maps to its value with all later
  /// bindings substituted into it.
  fn resolved_bindings(&self) -> HashMap<Variable, Term> {
    let mut resolved: HashMap<Variable, Term> = HashMap::default();
    // Most recent first, so the fresh variables of a value are resolved before the value itself.
    for (variable, value) in self.trace.iter() {
      let value = value.substitute(&resolved);
      resolved.insert(variable.clone(), value);
    }
    resolved
  }

  /// The values of `variables` on the path to this item, normalized by `rewriter`. A variable the trace never bound
  /// maps to itself.
  pub fn assignments<R: Rewriter + ?Sized>(&self, variables: &[Variable], rewriter: &R) -> Vec<Term> {
    let resolved = self.resolved_bindings();
    let empty    = Substitution::new();
    variables.iter()
             .map(|variable| {
               match resolved.get(variable) {
                 Some(value) => rewriter.rewrite(value, &empty),
                 None        => Term::variable(variable.clone()),
               }
             })
             .collect()
  }

  /// The value of a single variable. See `WorkItem::assignments`.
  pub fn value_of<R: Rewriter + ?Sized>(&self, variable: &Variable, rewriter: &R) -> Term {
    let resolved = self.resolved_bindings();
    match resolved.get(variable) {
      Some(value) => rewriter.rewrite(value, &Substitution::new()),
      None        => Term::variable(variable.clone()),
    }
  }

  /// Adds `v := value` to `sigma` for each of `variables` the trace binds.
  pub fn add_assignments<R: Rewriter + ?Sized>(&self, variables: &[Variable], sigma: &mut Substitution, rewriter: &R) {
    let values = self.assignments(variables, rewriter);
    for (variable, value) in variables.iter().zip(values) {
      if value.as_variable() != Some(variable) {
        sigma.insert(variable.clone(), value);
      }
    }
  }
}

impl Display for WorkItem {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{{ variables = [{}], expression = {}{} }}",
      join_string(self.variables.iter().map(Variable::typed), ", "),
      self.expression,
      if self.valid { "" } else { ", invalid" }
    )
  }
}

impl Debug for WorkItem {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{standard, DataSpec, FunctionSymbol, SimpleRewriter, Sort};

  #[test]
  fn assignments_resolve_fresh_variables() {
    let mut spec = DataSpec::new();
    let e = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
    let d = spec.add_structured_sort("D", &[("d1", vec![e.clone()]), ("d2", vec![e.clone()])]);
    let rewriter = SimpleRewriter::new(&spec);

    let x  = Variable::new("x", d.clone());
    let y  = Variable::new("y", e.clone());
    let d1 = FunctionSymbol::new("d1", Sort::function(vec![e.clone()], d));
    let e2 = Term::symbol(FunctionSymbol::new("e2", e));

    let seed   = WorkItem::new(vec![x.clone()], standard::true_());
    let middle = seed.child(vec![y.clone()], standard::true_(), x.clone(), Term::apply(d1.clone(), vec![Term::variable(y.clone())]));
    let leaf   = middle.child(vec![], standard::true_(), y.clone(), e2.clone());

    assert!(leaf.is_solution());
    assert_eq!(leaf.trace().len(), 2);
    assert_eq!(seed.trace().len(), 0);
    assert_eq!(leaf.value_of(&x, &rewriter), Term::apply(d1, vec![e2.clone()]));
    assert_eq!(leaf.value_of(&y, &rewriter), e2);

    let mut sigma = Substitution::new();
    let z = Variable::new("z", Sort::bool());
    leaf.add_assignments(&[y.clone(), z.clone()], &mut sigma, &rewriter);
    assert_eq!(sigma.len(), 1);
    assert_eq!(sigma.apply(&z), Term::variable(z));
  }

  #[test]
  fn invalidated_items_display_as_invalid() {
    let x = Variable::new("x", Sort::bool());
    let mut item = WorkItem::new(vec![x], standard::true_());
    assert!(item.is_valid());
    item.invalidate();
    assert!(!item.is_valid());
    assert_eq!(item.to_string(), "{ variables = [x: Bool], expression = true, invalid }");
  }
}
