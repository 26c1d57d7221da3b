/*!

The rewriter is the normalization oracle the enumerator consults after every binding. `Rewriter::rewrite(term, σ)`
must return the normal form of `term` with the substitution `σ` applied, deterministically.

`SimpleRewriter` is a small innermost normalizer for the built-in symbols of the `standard` module. It knows:

 - boolean simplification, including `b && !b = false` and `b || !b = true`,
 - equality: syntactic identity, boolean constants, and distinctness of constructors,
 - `!=` as negated equality, `if` on constant conditions or equal branches,
 - beta reduction of applied lambdas,
 - membership in `{}`, `@fset_insert(e, s)` and `@set(f, s)`.

Values bound in the substitution are taken to be normal forms already. Finite sets are not brought into a canonical
order, so two finite sets compare equal only if they were built in the same order.

*/

use crate::{
  abstractions::HashSet,
  api::{
    data_specification::DataSpec,
    standard,
    substitution::Substitution,
    symbol::FunctionSymbol,
    term::{Term, TermKind}
  }
};

pub trait Rewriter {
  fn rewrite(&self, term: &Term, sigma: &Substitution) -> Term;
}

impl<R: Rewriter + ?Sized> Rewriter for &R {
  fn rewrite(&self, term: &Term, sigma: &Substitution) -> Term {
    (**self).rewrite(term, sigma)
  }
}

#[derive(Clone, Debug, Default)]
pub struct SimpleRewriter {
  constructors: HashSet<FunctionSymbol>,
}

impl SimpleRewriter {
  pub fn new(dataspec: &DataSpec) -> Self {
    SimpleRewriter {
      constructors: dataspec.all_constructors().cloned().collect(),
    }
  }

  fn normalize(&self, term: &Term, sigma: &Substitution) -> Term {
    match term.kind() {

      TermKind::Variable(v) => sigma.apply(v),

      TermKind::Symbol(_) => term.clone(),

      TermKind::Lambda { parameters, body } => {
        if parameters.iter().any(|p| sigma.get(p).is_some()) {
          let mut inner = sigma.clone();
          for p in parameters {
            inner.remove(p);
          }
          Term::lambda(parameters.clone(), self.normalize(body, &inner))
        } else {
          Term::lambda(parameters.clone(), self.normalize(body, sigma))
        }
      }

      TermKind::Application { head, arguments } => {
        let head      = self.normalize(head, sigma);
        let arguments = arguments.iter().map(|argument| self.normalize(argument, sigma)).collect();
        self.reduce(head, arguments)
      }

    }
  }

  /// Reduces the application of a normalized head to normalized arguments.
  fn reduce(&self, head: Term, mut arguments: Vec<Term>) -> Term {
    if let TermKind::Lambda { parameters, body } = head.kind() {
      if parameters.len() == arguments.len() {
        let map = parameters.iter().cloned().zip(arguments).collect();
        return self.normalize(&body.substitute(&map), &Substitution::new());
      }
    }

    let name = match head.kind() {
      TermKind::Symbol(symbol) => symbol.name.clone(),
      _ => return Term::apply_term(head, arguments),
    };

    match (&*name, arguments.len()) {

      (standard::NOT, 1) => self.not(arguments.swap_remove(0)),

      (standard::AND, 2) => {
        let rhs = arguments.swap_remove(1);
        self.and(arguments.swap_remove(0), rhs)
      }

      (standard::OR, 2) => {
        let rhs = arguments.swap_remove(1);
        self.or(arguments.swap_remove(0), rhs)
      }

      (standard::EQUAL_TO, 2) => self.equal(&arguments[0], &arguments[1]),

      (standard::NOT_EQUAL, 2) => {
        let equal = self.equal(&arguments[0], &arguments[1]);
        self.not(equal)
      }

      (standard::IF, 3) => {
        if arguments[0].is_true() {
          arguments.swap_remove(1)
        } else if arguments[0].is_false() || arguments[1] == arguments[2] {
          arguments.swap_remove(2)
        } else {
          Term::apply_term(head, arguments)
        }
      }

      (standard::ELEMENT_OF, 2) => self.element_of(&arguments[0], &arguments[1]),

      _ => Term::apply_term(head, arguments),

    }
  }

  fn not(&self, term: Term) -> Term {
    if term.is_true() {
      standard::false_()
    } else if term.is_false() {
      standard::true_()
    } else if term.has_head(standard::NOT) && term.arguments().len() == 1 {
      term.arguments()[0].clone()
    } else {
      standard::not(term)
    }
  }

  fn is_negation_of(term: &Term, other: &Term) -> bool {
    term.has_head(standard::NOT) && term.arguments().len() == 1 && term.arguments()[0] == *other
  }

  fn and(&self, lhs: Term, rhs: Term) -> Term {
    if lhs.is_false() || rhs.is_false() {
      standard::false_()
    } else if lhs.is_true() {
      rhs
    } else if rhs.is_true() || lhs == rhs {
      lhs
    } else if Self::is_negation_of(&lhs, &rhs) || Self::is_negation_of(&rhs, &lhs) {
      standard::false_()
    } else {
      standard::and(lhs, rhs)
    }
  }

  fn or(&self, lhs: Term, rhs: Term) -> Term {
    if lhs.is_true() || rhs.is_true() {
      standard::true_()
    } else if lhs.is_false() {
      rhs
    } else if rhs.is_false() || lhs == rhs {
      lhs
    } else if Self::is_negation_of(&lhs, &rhs) || Self::is_negation_of(&rhs, &lhs) {
      standard::true_()
    } else {
      standard::or(lhs, rhs)
    }
  }

  fn is_constructor_term(&self, term: &Term) -> bool {
    term.head_symbol().map_or(false, |symbol| self.constructors.contains(symbol))
  }

  fn equal(&self, lhs: &Term, rhs: &Term) -> Term {
    if lhs == rhs {
      return standard::true_();
    }

    if lhs.sort().is_bool() {
      if lhs.is_true() {
        return rhs.clone();
      }
      if rhs.is_true() {
        return lhs.clone();
      }
      if lhs.is_false() {
        return self.not(rhs.clone());
      }
      if rhs.is_false() {
        return self.not(lhs.clone());
      }
    }

    if self.is_constructor_term(lhs) && self.is_constructor_term(rhs) {
      if lhs.head_symbol() != rhs.head_symbol() || lhs.arguments().len() != rhs.arguments().len() {
        return standard::false_();
      }
      return lhs.arguments()
                .iter()
                .zip(rhs.arguments())
                .fold(standard::true_(), |acc, (a, b)| self.and(acc, self.equal(a, b)));
    }

    standard::equal_to(lhs.clone(), rhs.clone())
  }

  fn element_of(&self, element: &Term, set: &Term) -> Term {
    if set.has_head(standard::FSET_EMPTY) {
      return standard::false_();
    }

    let arguments = set.arguments();
    if set.has_head(standard::FSET_INSERT) && arguments.len() == 2 {
      let here  = self.equal(element, &arguments[0]);
      let there = self.element_of(element, &arguments[1]);
      return self.or(here, there);
    }

    if set.has_head(standard::SET_CONS) && arguments.len() == 2 {
      let characteristic = self.reduce(arguments[0].clone(), vec![element.clone()]);
      let in_finite_part = self.element_of(element, &arguments[1]);
      let equal = self.equal(&characteristic, &in_finite_part);
      return self.not(equal);
    }

    standard::element_of(element.clone(), set.clone())
  }
}

impl Rewriter for SimpleRewriter {
  fn rewrite(&self, term: &Term, sigma: &Substitution) -> Term {
    self.normalize(term, sigma)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{sort::Sort, variable::Variable};

  fn rewriter_with_e() -> (SimpleRewriter, Sort) {
    let mut spec = DataSpec::new();
    let e = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
    spec.add_structured_sort("D", &[("d1", vec![e.clone()]), ("d2", vec![e.clone()])]);
    (SimpleRewriter::new(&spec), e)
  }

  #[test]
  fn contradiction_rewrites_to_false() {
    let (rewriter, _) = rewriter_with_e();
    let pos = Sort::algebraic("Pos");
    let x   = Term::variable(Variable::new("x", pos.clone()));
    let n17 = Term::symbol(FunctionSymbol::new("17", pos));
    let phi = standard::and(
      standard::equal_to(x.clone(), n17.clone()),
      standard::not_equal_to(x.clone(), n17.clone())
    );
    assert!(rewriter.rewrite(&phi, &Substitution::new()).is_false());

    let phi = standard::and(standard::equal_to(x.clone(), n17.clone()), standard::equal_to(x.clone(), x.clone()));
    assert_eq!(rewriter.rewrite(&phi, &Substitution::new()), standard::equal_to(x, n17));
  }

  #[test]
  fn constructor_equality() {
    let (rewriter, e) = rewriter_with_e();
    let e1 = Term::symbol(FunctionSymbol::new("e1", e.clone()));
    let e2 = Term::symbol(FunctionSymbol::new("e2", e.clone()));
    let sigma = Substitution::new();
    assert!(rewriter.rewrite(&standard::equal_to(e1.clone(), e2.clone()), &sigma).is_false());
    assert!(rewriter.rewrite(&standard::not_equal_to(e1.clone(), e2), &sigma).is_true());
    assert!(rewriter.rewrite(&standard::equal_to(e1.clone(), e1), &sigma).is_true());
  }

  #[test]
  fn substitution_is_applied() {
    let (rewriter, e) = rewriter_with_e();
    let x  = Variable::new("x", e.clone());
    let e1 = Term::symbol(FunctionSymbol::new("e1", e.clone()));
    let e2 = Term::symbol(FunctionSymbol::new("e2", e.clone()));
    let phi = standard::equal_to(Term::variable(x.clone()), e1.clone());

    let mut sigma = Substitution::new();
    sigma.insert(x.clone(), e2);
    assert!(rewriter.rewrite(&phi, &sigma).is_false());
    sigma.insert(x, e1);
    assert!(rewriter.rewrite(&phi, &sigma).is_true());
  }

  #[test]
  fn set_membership() {
    let (rewriter, _) = rewriter_with_e();
    let b  = Sort::bool();
    let fs = Variable::new("s", Sort::fset(b.clone()));
    let p  = Variable::new("p", b.clone());

    let set = standard::set_constructor(
      &b,
      Term::lambda(vec![p], standard::false_()),
      Term::variable(fs.clone())
    );
    let phi = standard::element_of(standard::true_(), set);
    let expected = standard::element_of(standard::true_(), Term::variable(fs.clone()));
    assert_eq!(rewriter.rewrite(&phi, &Substitution::new()), expected);

    let only_false = standard::fset_insert(&b, standard::false_(), standard::fset_empty(&b));
    let mut sigma = Substitution::new();
    sigma.insert(fs.clone(), only_false);
    assert!(rewriter.rewrite(&expected, &sigma).is_false());

    let only_true = standard::fset_insert(&b, standard::true_(), standard::fset_empty(&b));
    sigma.insert(fs, only_true);
    assert!(rewriter.rewrite(&expected, &sigma).is_true());
  }

  #[test]
  fn beta_reduction_and_conditionals() {
    let (rewriter, e) = rewriter_with_e();
    let p  = Variable::new("p", e.clone());
    let e1 = Term::symbol(FunctionSymbol::new("e1", e.clone()));
    let e2 = Term::symbol(FunctionSymbol::new("e2", e.clone()));

    // lambda p. if(p == e1, e2, e1), applied to e1 and e2
    let body = standard::if_(standard::equal_to(Term::variable(p.clone()), e1.clone()), e2.clone(), e1.clone());
    let f    = Term::lambda(vec![p], body);
    let sigma = Substitution::new();
    assert_eq!(rewriter.rewrite(&Term::apply_term(f.clone(), vec![e1.clone()]), &sigma), e2);
    assert_eq!(rewriter.rewrite(&Term::apply_term(f, vec![e2]), &sigma), e1);
  }
}
