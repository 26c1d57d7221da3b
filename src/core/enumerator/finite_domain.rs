/*!

Enumeration of the finite sorts that are not split by constructors: finite sets and functions over finite sorts. Both
start from the materialized value lists of their component sorts and generate every set or function as a closed term.

The number of generated values grows exponentially. A finite set sort over `n` elements has `2^n` values, and a
function sort with `|D|` points in its domain and `|C|` values in its codomain has `|C|^|D|` values. Generation is
refused when the exponent in bits reaches `MAX_ENUMERATION_BITS`, and a warning is logged above
`WARNING_ENUMERATION_BITS`.

*/

use std::rc::Rc;

use crate::{
  abstractions::NatSet,
  api::{
    standard,
    DataSpecification,
    IdentifierGenerator,
    Rewriter,
    Sort,
    SortKind,
    Substitution,
    Term,
    Variable
  },
  log::warning,
  MAX_ENUMERATION_BITS,
  WARNING_ENUMERATION_BITS,
};

use super::{Enumerator, EnumeratorError, EnumeratorOptions, FailureMode};

/// The smallest `k` with `2^k >= n`. Both 0 and 1 give 0.
pub(crate) fn ceil_log2(n: usize) -> usize {
  if n <= 1 {
    0
  } else {
    (usize::BITS - (n - 1).leading_zeros()) as usize
  }
}

/// The finite set containing `elements[i]` for every bit `i` set in `mask`, built by inserting into `{}` in order.
pub(crate) fn make_set(mask: usize, element_sort: &Sort, elements: &[Term]) -> Term {
  let members = NatSet::from_mask(mask);
  elements.iter()
          .enumerate()
          .filter(|(index, _)| members.contains(*index))
          .fold(standard::fset_empty(element_sort), |set, (_, element)| {
            standard::fset_insert(element_sort, element.clone(), set)
          })
}

/// The body of the function with index `*function_index`, from the argument at `argument` onward. The index is read
/// as a number in base `|codomain|`, consuming one digit per point of the domain, least significant first.
///
/// Branches with identical results are merged, so the result only tests the arguments it depends on. Every list in
/// `domain_values` and `codomain_values` must be nonempty.
pub(crate) fn make_if_expression(
  function_index : &mut usize,
  argument       : usize,
  domain_values  : &[Rc<[Term]>],
  codomain_values: &[Term],
  parameters     : &[Variable],
) -> Term
{
  if argument == domain_values.len() {
    let digit = *function_index % codomain_values.len();
    *function_index /= codomain_values.len();
    return codomain_values[digit].clone();
  }

  // The last value of the argument is the default branch; the others are tested from the back.
  let values     = &domain_values[argument];
  let mut result = make_if_expression(function_index, argument + 1, domain_values, codomain_values, parameters);
  for value in values.iter().rev().skip(1) {
    let branch = make_if_expression(function_index, argument + 1, domain_values, codomain_values, parameters);
    if branch != result {
      let condition = standard::equal_to(Term::variable(parameters[argument].clone()), value.clone());
      result = standard::if_(condition, branch, result);
    }
  }
  result
}

impl<'a, R: Rewriter, D: DataSpecification> Enumerator<'a, R, D> {
  /// Every subset of the finite sort `element`, as a finite set rewritten under `sigma`.
  pub(crate) fn finite_set_values(
    &self,
    sort   : &Sort,
    element: &Sort,
    sigma  : &Substitution,
  ) -> Result<Vec<Term>, EnumeratorError>
  {
    let elements = self.materialize(element)?;
    let n        = elements.len();

    if n >= MAX_ENUMERATION_BITS {
      return Err(EnumeratorError::Refused { sort: sort.clone() });
    }
    if n > WARNING_ENUMERATION_BITS {
      warning!(1, "Generate 2^{} sets to enumerate sort {}", n, sort);
    }

    let sets = (0..1usize << n).map(|mask| self.rewriter.rewrite(&make_set(mask, element, &elements), sigma))
                               .collect();
    Ok(sets)
  }

  /// Every function of the finite function sort `domain -> codomain`, as a closed lambda term.
  pub(crate) fn function_values(
    &self,
    sort    : &Sort,
    domain  : &[Sort],
    codomain: &Sort,
  ) -> Result<Vec<Term>, EnumeratorError>
  {
    let codomain_values = self.materialize(codomain)?;

    let mut domain_values = Vec::with_capacity(domain.len());
    let mut parameters    = Vec::with_capacity(domain.len());
    let mut domain_size   = 1usize;
    for argument_sort in domain {
      let values  = self.materialize(argument_sort)?;
      domain_size = domain_size.saturating_mul(values.len());
      domain_values.push(values);
      parameters.push(self.id_generator.fresh_variable(argument_sort));
    }

    // Without codomain values no function can be written down.
    if codomain_values.is_empty() {
      return Ok(Vec::new());
    }

    let bits = domain_size.saturating_mul(ceil_log2(codomain_values.len()));
    if bits >= MAX_ENUMERATION_BITS {
      return Err(EnumeratorError::Refused { sort: sort.clone() });
    }
    if bits > WARNING_ENUMERATION_BITS {
      warning!(1, "Generate 2^{} functions to enumerate sort {}", bits, sort);
    }

    // A codomain of size 1 or an empty domain leaves exactly one function.
    let function_count = if codomain_values.len() == 1 || domain_size == 0 {
      1
    } else {
      match u32::try_from(domain_size).ok().and_then(|exponent| codomain_values.len().checked_pow(exponent)) {
        Some(count) => count,
        None        => return Err(EnumeratorError::Refused { sort: sort.clone() }),
      }
    };

    if function_count == 1 {
      return Ok(vec![Term::lambda(parameters, codomain_values[0].clone())]);
    }

    let functions = (0..function_count).map(|index| {
                                         let mut function_index = index;
                                         let body = make_if_expression(
                                           &mut function_index,
                                           0,
                                           &domain_values,
                                           &codomain_values,
                                           &parameters
                                         );
                                         Term::lambda(parameters.clone(), body)
                                       })
                                       .collect();
    Ok(functions)
  }

  fn is_enumerable_in_context(&self, sort: &Sort, parents: &mut Vec<Sort>) -> bool {
    match sort.kind() {

      SortKind::Function { domain, codomain } => {
        self.dataspec.is_certainly_finite(sort) && self.function_values(sort, domain, codomain).is_ok()
      }

      SortKind::Set(element) => self.dataspec.is_certainly_finite(element),

      SortKind::FSet(element) => {
        self.dataspec.is_certainly_finite(element)
            && self.finite_set_values(sort, element, &Substitution::new()).is_ok()
      }

      SortKind::Bag(_) | SortKind::FBag(_) => false,

      SortKind::Algebraic(_) => {
        let constructors = self.cache.constructors(sort, self.dataspec);
        if constructors.is_empty() {
          return false;
        }
        // A recursive occurrence is split by the same constructors again.
        if parents.contains(sort) {
          return true;
        }
        parents.push(sort.clone());
        let enumerable = constructors.iter().all(
          |constructor| constructor.domain().iter().all(|argument| self.is_enumerable_in_context(argument, parents))
        );
        parents.pop();
        enumerable
      }

    }
  }
}

/// Whether enumerating a variable of `sort` can never fail with an unsupported or refused sort. Finite sets and
/// function sorts are checked by generating their values.
pub fn is_enumerable<R: Rewriter, D: DataSpecification>(dataspec: &D, rewriter: &R, sort: &Sort) -> bool {
  let id_generator = IdentifierGenerator::new();
  let enumerator   = Enumerator::with_options(
    rewriter,
    dataspec,
    &id_generator,
    EnumeratorOptions::default().with_failure_mode(FailureMode::Abort)
  );
  enumerator.is_enumerable_in_context(sort, &mut Vec::new())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{DataSpec, FunctionSymbol, SimpleRewriter};

  #[test]
  fn ceil_log2_boundaries() {
    assert_eq!(ceil_log2(0), 0);
    assert_eq!(ceil_log2(1), 0);
    assert_eq!(ceil_log2(2), 1);
    assert_eq!(ceil_log2(3), 2);
    assert_eq!(ceil_log2(4), 2);
    assert_eq!(ceil_log2(5), 3);
    assert_eq!(ceil_log2(1 << 20), 20);
  }

  #[test]
  fn sets_follow_the_mask() {
    let b = Sort::bool();
    let elements = vec![standard::true_(), standard::false_()];
    assert_eq!(make_set(0, &b, &elements), standard::fset_empty(&b));
    assert_eq!(
      make_set(2, &b, &elements),
      standard::fset_insert(&b, standard::false_(), standard::fset_empty(&b))
    );
    let both = standard::fset_insert(
      &b,
      standard::false_(),
      standard::fset_insert(&b, standard::true_(), standard::fset_empty(&b))
    );
    assert_eq!(make_set(3, &b, &elements), both);
  }

  #[test]
  fn if_expressions_merge_equal_branches() {
    let e  = Sort::algebraic("E");
    let p  = Variable::new("p", e.clone());
    let e1 = Term::symbol(FunctionSymbol::new("e1", e.clone()));
    let e2 = Term::symbol(FunctionSymbol::new("e2", e.clone()));
    let domain: Vec<Rc<[Term]>> = vec![vec![e1.clone(), e2.clone()].into()];
    let codomain = vec![standard::true_(), standard::false_()];

    // Index 0 maps both points to true.
    let mut index = 0;
    let body = make_if_expression(&mut index, 0, &domain, &codomain, &[p.clone()]);
    assert_eq!(body, standard::true_());

    // Index 1: the default branch (e2) reads the lowest digit.
    let mut index = 1;
    let body = make_if_expression(&mut index, 0, &domain, &codomain, &[p.clone()]);
    let expected = standard::if_(
      standard::equal_to(Term::variable(p), e1),
      standard::true_(),
      standard::false_()
    );
    assert_eq!(body, expected);
  }

  #[test]
  fn enumerability() {
    let mut spec = DataSpec::new();
    let e    = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
    let tree = spec.add_structured_sort(
      "tree",
      &[("leaf", vec![Sort::bool()]), ("node", vec![Sort::algebraic("tree"), Sort::algebraic("tree")])]
    );
    let rewriter = SimpleRewriter::new(&spec);

    assert!(is_enumerable(&spec, &rewriter, &e));
    assert!(is_enumerable(&spec, &rewriter, &tree));
    assert!(is_enumerable(&spec, &rewriter, &Sort::fset(e.clone())));
    assert!(is_enumerable(&spec, &rewriter, &Sort::set(e.clone())));
    assert!(is_enumerable(&spec, &rewriter, &Sort::function(vec![e.clone()], Sort::bool())));
    assert!(!is_enumerable(&spec, &rewriter, &Sort::bag(e.clone())));
    assert!(!is_enumerable(&spec, &rewriter, &Sort::fset(tree)));
    assert!(!is_enumerable(&spec, &rewriter, &Sort::algebraic("Pos")));
  }
}
