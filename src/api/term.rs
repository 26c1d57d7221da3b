/*!

A `Term` is an immutable data expression: a variable, a function symbol, an application of a term to arguments, or a
lambda abstraction. Terms are reference counted and compare structurally, so cloning is cheap and two independently
built copies of the same expression are equal.

Each term caches a few `TermAttributes` computed at construction. They let substitution and rewriting skip subterms
that cannot change.

*/

use std::{
  fmt::{Display, Formatter},
  hash::{Hash, Hasher},
  sync::Arc
};

use enumflags2::{bitflags, BitFlags};

use crate::{
  abstractions::{HashMap, join_string},
  api::{
    sort::Sort,
    standard,
    symbol::FunctionSymbol,
    variable::Variable
  }
};

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TermAttribute {
  /// No variable occurs in the term, neither free nor bound. Substitution and rewriting under a substitution leave
  /// such a term unchanged apart from normalization.
  Ground,

  /// A lambda abstraction occurs somewhere in the term.
  ContainsBinder,
}

pub type TermAttributes = BitFlags<TermAttribute, u8>;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TermKind {
  Variable(Variable),
  Symbol(FunctionSymbol),
  Application {
    head     : Term,
    arguments: Vec<Term>,
  },
  Lambda {
    parameters: Vec<Variable>,
    body      : Term,
  },
}

#[derive(Debug)]
struct TermNode {
  kind      : TermKind,
  attributes: TermAttributes,
}

#[derive(Clone, Debug)]
pub struct Term(Arc<TermNode>);

impl Term {
  fn new(kind: TermKind) -> Term {
    let attributes = match &kind {

      TermKind::Variable(_) => TermAttributes::empty(),

      TermKind::Symbol(_) => TermAttribute::Ground.into(),

      TermKind::Application { head, arguments } => {
        let mut attributes = head.attributes();
        for argument in arguments {
          let argument_attributes = argument.attributes();
          if !argument_attributes.contains(TermAttribute::Ground) {
            attributes.remove(TermAttribute::Ground);
          }
          attributes |= argument_attributes & TermAttribute::ContainsBinder;
        }
        attributes
      }

      TermKind::Lambda { body, .. } => {
        let mut attributes = body.attributes() | TermAttribute::ContainsBinder;
        attributes.remove(TermAttribute::Ground);
        attributes
      }

    };

    Term(Arc::new(TermNode { kind, attributes }))
  }

  // region Constructors

  pub fn variable(variable: Variable) -> Term {
    Term::new(TermKind::Variable(variable))
  }

  pub fn symbol(symbol: FunctionSymbol) -> Term {
    Term::new(TermKind::Symbol(symbol))
  }

  /// Applies `symbol` to `arguments`. With no arguments the result is the symbol itself.
  pub fn apply(symbol: FunctionSymbol, arguments: Vec<Term>) -> Term {
    Term::apply_term(Term::symbol(symbol), arguments)
  }

  /// Applies an arbitrary head term (a symbol, a variable of function sort, or a lambda) to `arguments`.
  pub fn apply_term(head: Term, arguments: Vec<Term>) -> Term {
    if arguments.is_empty() {
      head
    } else {
      Term::new(TermKind::Application { head, arguments })
    }
  }

  pub fn lambda(parameters: Vec<Variable>, body: Term) -> Term {
    Term::new(TermKind::Lambda { parameters, body })
  }

  // endregion Constructors

  // region Accessors

  #[inline(always)]
  pub fn kind(&self) -> &TermKind {
    &self.0.kind
  }

  #[inline(always)]
  pub fn attributes(&self) -> TermAttributes {
    self.0.attributes
  }

  #[inline(always)]
  pub fn is_ground(&self) -> bool {
    self.0.attributes.contains(TermAttribute::Ground)
  }

  #[inline(always)]
  pub fn is_variable(&self) -> bool {
    matches!(self.kind(), TermKind::Variable(_))
  }

  pub fn as_variable(&self) -> Option<&Variable> {
    match self.kind() {
      TermKind::Variable(v) => Some(v),
      _ => None,
    }
  }

  #[inline(always)]
  pub fn is_true(&self) -> bool {
    standard::is_true(self)
  }

  #[inline(always)]
  pub fn is_false(&self) -> bool {
    standard::is_false(self)
  }

  /// The function symbol at the head of the term, if there is one. For a constant this is the constant itself.
  pub fn head_symbol(&self) -> Option<&FunctionSymbol> {
    match self.kind() {
      TermKind::Symbol(symbol) => Some(symbol),
      TermKind::Application { head, .. } => head.head_symbol(),
      _ => None,
    }
  }

  /// Whether the head symbol of the term has the given name.
  pub fn has_head(&self, name: &str) -> bool {
    self.head_symbol().map_or(false, |symbol| symbol.has_name(name))
  }

  /// The arguments of an application. Empty for every other term.
  pub fn arguments(&self) -> &[Term] {
    match self.kind() {
      TermKind::Application { arguments, .. } => arguments,
      _ => &[],
    }
  }

  pub fn sort(&self) -> Sort {
    match self.kind() {
      TermKind::Variable(v) => v.sort.clone(),
      TermKind::Symbol(symbol) => symbol.sort.clone(),
      TermKind::Application { head, .. } => head.sort().target_sort().clone(),
      TermKind::Lambda { parameters, body } => {
        Sort::function(parameters.iter().map(|p| p.sort.clone()).collect(), body.sort())
      }
    }
  }

  // endregion Accessors

  /// Replaces free occurrences of the variables in `map` without normalizing the result. Variables bound by a
  /// lambda shadow the map inside its body.
  pub fn substitute(&self, map: &HashMap<Variable, Term>) -> Term {
    if map.is_empty() || self.is_ground() {
      return self.clone();
    }

    match self.kind() {

      TermKind::Variable(v) => map.get(v).cloned().unwrap_or_else(|| self.clone()),

      TermKind::Symbol(_) => self.clone(),

      TermKind::Application { head, arguments } => {
        Term::apply_term(
          head.substitute(map),
          arguments.iter().map(|argument| argument.substitute(map)).collect()
        )
      }

      TermKind::Lambda { parameters, body } => {
        if parameters.iter().any(|p| map.contains_key(p)) {
          let mut inner = map.clone();
          for p in parameters {
            inner.remove(p);
          }
          Term::lambda(parameters.clone(), body.substitute(&inner))
        } else {
          Term::lambda(parameters.clone(), body.substitute(map))
        }
      }

    }
  }

  /// Whether `variable` occurs free in the term.
  pub fn occurs_free(&self, variable: &Variable) -> bool {
    if self.is_ground() {
      return false;
    }
    match self.kind() {
      TermKind::Variable(v) => v == variable,
      TermKind::Symbol(_) => false,
      TermKind::Application { head, arguments } => {
        head.occurs_free(variable) || arguments.iter().any(|argument| argument.occurs_free(variable))
      }
      TermKind::Lambda { parameters, body } => {
        !parameters.contains(variable) && body.occurs_free(variable)
      }
    }
  }
}

impl PartialEq for Term {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0) || self.0.kind == other.0.kind
  }
}

impl Eq for Term {}

impl Hash for Term {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.kind.hash(state)
  }
}

const INFIX_SYMBOLS: [&str; 5] = ["==", "!=", "&&", "||", "in"];

impl Display for Term {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.kind() {

      TermKind::Variable(v) => write!(f, "{}", v),

      TermKind::Symbol(symbol) => write!(f, "{}", symbol),

      TermKind::Application { head, arguments } => {
        match head.kind() {

          TermKind::Symbol(symbol) if arguments.len() == 2 && INFIX_SYMBOLS.contains(&&*symbol.name) => {
            write!(f, "({} {} {})", arguments[0], symbol.name, arguments[1])
          }

          TermKind::Symbol(symbol) if arguments.len() == 1 && symbol.has_name(standard::NOT) => {
            write!(f, "!{}", arguments[0])
          }

          TermKind::Lambda { .. } => write!(f, "({})({})", head, join_string(arguments.iter(), ", ")),

          _ => write!(f, "{}({})", head, join_string(arguments.iter(), ", ")),

        }
      }

      TermKind::Lambda { parameters, body } => {
        let typed_parameters = parameters.iter().map(|p| p.typed());
        write!(f, "lambda {}. {}", join_string(typed_parameters, ", "), body)
      }

    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn structural_equality_and_ground_attribute() {
    let e  = Sort::algebraic("E");
    let e1 = FunctionSymbol::new("e1", e.clone());
    let x  = Variable::new("x", e.clone());

    let a = Term::apply(standard::equal_to_symbol(&e), vec![Term::symbol(e1.clone()), Term::variable(x.clone())]);
    let b = Term::apply(standard::equal_to_symbol(&e), vec![Term::symbol(e1.clone()), Term::variable(x.clone())]);
    assert_eq!(a, b);
    assert!(!a.is_ground());
    assert!(Term::symbol(e1).is_ground());
    assert_eq!(a.sort(), Sort::bool());
    assert_eq!(a.to_string(), "(e1 == x)");
  }

  #[test]
  fn substitution_respects_lambda_binders() {
    let b    = Sort::bool();
    let x    = Variable::new("x", b.clone());
    let y    = Variable::new("y", b.clone());
    let body = standard::and(Term::variable(x.clone()), Term::variable(y.clone()));
    let lam  = Term::lambda(vec![x.clone()], body);

    let mut map = HashMap::new();
    map.insert(x.clone(), standard::true_());
    map.insert(y.clone(), standard::false_());

    let result = lam.substitute(&map);
    let expected = Term::lambda(vec![x.clone()], standard::and(Term::variable(x.clone()), standard::false_()));
    assert_eq!(result, expected);
    assert!(!result.occurs_free(&x));
    assert!(lam.occurs_free(&y));
    assert_eq!(result.sort(), Sort::function(vec![b.clone()], b));
  }
}
