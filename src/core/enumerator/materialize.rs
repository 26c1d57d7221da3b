/*!

Materialization lists every value of a finite sort as a closed term, by enumerating a single fresh variable of that
sort under the condition `true`. Every solution of such a session must have the condition `true`; anything else means
the rewriter did not reduce a closed condition and is reported as `EnumeratorError::InconsistentSolution`.

Value lists are cached per session, keyed by sort, so a finite sort is materialized at most once no matter how many
function or finite set sorts mention it.

*/

use std::rc::Rc;

use crate::{
  api::{
    standard,
    DataSpecification,
    IdentifierGenerator,
    Rewriter,
    Sort,
    Substitution,
    Term
  },
  log::debug
};

use super::{
  Enumerator,
  EnumeratorError,
  EnumeratorOptions,
  EnumeratorQueue,
  FailureMode,
  IsNotFalse,
  UnsupportedReason,
  WorkItem
};

impl<'a, R: Rewriter, D: DataSpecification> Enumerator<'a, R, D> {
  /// The values of the finite sort `sort`, from the session cache if possible.
  pub(crate) fn materialize(&self, sort: &Sort) -> Result<Rc<[Term]>, EnumeratorError> {
    if let Some(values) = self.cache.values(sort) {
      return Ok(values);
    }
    let values = self.nested().collect_values(sort)?;
    Ok(self.cache.insert_values(sort, values))
  }

  fn collect_values(&mut self, sort: &Sort) -> Result<Vec<Term>, EnumeratorError> {
    if !self.dataspec.is_certainly_finite(sort) {
      return Err(EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::NotFinite });
    }

    let variable  = self.id_generator.fresh_variable(sort);
    let rewriter  = self.rewriter;
    let mut sigma = Substitution::new();
    let mut queue = EnumeratorQueue::from([WorkItem::new(vec![variable.clone()], standard::true_())]);

    let mut values = Vec::new();
    for solution in self.begin(&mut sigma, &mut queue, IsNotFalse) {
      let solution = solution?;
      if !solution.expression().is_true() {
        return Err(EnumeratorError::InconsistentSolution { expression: solution.expression().clone() });
      }
      values.push(solution.value_of(&variable, rewriter));
    }

    debug!(3, "materialized {} values of sort {}", values.len(), sort);
    Ok(values)
  }

  /// Every value of the finite sort `sort`, in enumeration order. Values are cached for the rest of the session.
  pub fn enumerate_expressions(&self, sort: &Sort) -> Result<Vec<Term>, EnumeratorError> {
    Ok(self.materialize(sort)?.to_vec())
  }
}

/// Every value of the finite sort `sort` as a closed normal form, in enumeration order.
///
/// Fails with `Unsupported` if `sort` is not certainly finite or cannot be enumerated, with `Refused` if a finite set
/// or function sort it depends on is too large, and with `InconsistentSolution` if `rewriter` leaves a closed
/// condition unreduced.
pub fn enumerate_expressions<R: Rewriter, D: DataSpecification>(
  sort        : &Sort,
  dataspec    : &D,
  rewriter    : &R,
  id_generator: &IdentifierGenerator,
) -> Result<Vec<Term>, EnumeratorError>
{
  let enumerator = Enumerator::with_options(
    rewriter,
    dataspec,
    id_generator,
    EnumeratorOptions::default().with_failure_mode(FailureMode::Abort)
  );
  enumerator.enumerate_expressions(sort)
}
