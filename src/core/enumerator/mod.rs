/*!

The enumerator searches for the values of a list of variables that make a condition hold, by repeatedly splitting the
first variable of the front work item into one child per possible value. How a variable is split depends on its sort:

| sort                 | children                                                                   |
|:---------------------|:---------------------------------------------------------------------------|
| finite function sort | one per function, each a `lambda` over an `if` tree on the domain values   |
| `Set(E)`             | one, binding the variable to `@set(lambda x. false, s)` for a fresh `s`    |
| `FSet(E)`            | one per subset of the finite sort `E`                                      |
| `Bag(E)`, `FBag(E)`  | none, bags cannot be enumerated                                            |
| algebraic sort       | one per constructor, applied to fresh variables that join the worklist     |

Each child's condition is the parent's condition rewritten under the new binding. A child whose condition the caller's
filter rejects is dropped. A work item without variables is a solution.

The worklist, the substitution, and the filter belong to the caller. The enumerator holds only borrowed collaborators,
the options, the session's step counter, and the per-session caches shared with the nested enumerators it starts
to materialize finite sorts.

# Failure modes

When a step or the step budget cannot be honored, `FailureMode::Abort` returns the error to the caller, while
`FailureMode::Invalidate` marks the offending work item invalid and leaves it at the front of the worklist. The
driver stops at an invalid front item, and the iterator yields it as its last item.

*/

mod error;
mod filter;
mod finite_domain;
mod iterator;
mod materialize;
mod sort_cache;
mod work_item;


use std::rc::Rc;

use crate::{
  api::{
    standard,
    DataSpecification,
    FunctionSymbol,
    IdentifierGenerator,
    Rewriter,
    Sort,
    SortKind,
    Substitution,
    Term,
    Variable
  },
  log::{trace, warning}
};

pub use error::{EnumeratorError, UnsupportedReason};
pub use filter::{AcceptAll, Filter, IsNotFalse, IsNotTrue};
pub use finite_domain::is_enumerable;
pub use iterator::EnumeratorIter;
pub use materialize::enumerate_expressions;
pub use sort_cache::SortCache;
pub use work_item::{EnumeratorQueue, Trace, TraceIter, WorkItem};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FailureMode {
  /// Return the error to the caller.
  Abort,
  /// Leave an invalid work item at the front of the worklist and stop.
  #[default]
  Invalidate,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EnumeratorOptions {
  /// The maximum number of steps in one session, counted across all calls to `Enumerator::next`.
  pub max_count                : usize,
  pub failure_mode             : FailureMode,
  /// A child whose condition did not change under its binding is not required to enumerate the constructor's fresh
  /// variables. Leaves such variables unbound in solutions.
  pub drop_irrelevant_variables: bool,
}

impl Default for EnumeratorOptions {
  fn default() -> Self {
    EnumeratorOptions {
      max_count                : usize::MAX,
      failure_mode             : FailureMode::default(),
      drop_irrelevant_variables: false,
    }
  }
}

impl EnumeratorOptions {
  pub fn with_max_count(mut self, max_count: usize) -> Self {
    self.max_count = max_count;
    self
  }

  pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
    self.failure_mode = failure_mode;
    self
  }

  pub fn with_drop_irrelevant_variables(mut self, drop: bool) -> Self {
    self.drop_irrelevant_variables = drop;
    self
  }
}

pub struct Enumerator<'a, R: Rewriter, D: DataSpecification> {
  rewriter    : &'a R,
  dataspec    : &'a D,
  id_generator: &'a IdentifierGenerator,
  cache       : Rc<SortCache>,
  options     : EnumeratorOptions,
  /// Steps taken in the current session.
  steps       : usize,
}

impl<'a, R: Rewriter, D: DataSpecification> Enumerator<'a, R, D> {
  pub fn new(rewriter: &'a R, dataspec: &'a D, id_generator: &'a IdentifierGenerator) -> Self {
    Self::with_options(rewriter, dataspec, id_generator, EnumeratorOptions::default())
  }

  pub fn with_options(
    rewriter    : &'a R,
    dataspec    : &'a D,
    id_generator: &'a IdentifierGenerator,
    options     : EnumeratorOptions,
  ) -> Self
  {
    Enumerator {
      rewriter,
      dataspec,
      id_generator,
      cache: Rc::new(SortCache::new()),
      options,
      steps: 0,
    }
  }

  /// An enumerator for materializing finite sorts. It shares the collaborators and caches of `self`, aborts on any
  /// failure, and has no step budget of its own.
  pub(crate) fn nested(&self) -> Enumerator<'a, R, D> {
    Enumerator {
      rewriter    : self.rewriter,
      dataspec    : self.dataspec,
      id_generator: self.id_generator,
      cache       : Rc::clone(&self.cache),
      options     : EnumeratorOptions::default().with_failure_mode(FailureMode::Abort),
      steps       : 0,
    }
  }

  // region Accessors

  #[inline(always)]
  pub fn options(&self) -> &EnumeratorOptions {
    &self.options
  }

  #[inline(always)]
  pub fn max_count(&self) -> usize {
    self.options.max_count
  }

  #[inline(always)]
  pub fn failure_mode(&self) -> FailureMode {
    self.options.failure_mode
  }

  #[inline(always)]
  pub fn rewriter(&self) -> &'a R {
    self.rewriter
  }

  #[inline(always)]
  pub fn dataspec(&self) -> &'a D {
    self.dataspec
  }

  #[inline(always)]
  pub fn id_generator(&self) -> &'a IdentifierGenerator {
    self.id_generator
  }

  /// Steps taken since the session started.
  #[inline(always)]
  pub fn steps(&self) -> usize {
    self.steps
  }

  #[inline(always)]
  pub fn budget_exhausted(&self) -> bool {
    self.steps >= self.options.max_count
  }

  /// Starts a new session: the step counter and the caches are reset.
  pub fn reset(&mut self) {
    self.steps = 0;
    self.cache.clear();
  }

  // endregion Accessors

  /// Reports a step that cannot be carried out on `item`. In `Abort` mode the error is returned; in `Invalidate` mode
  /// `item` is marked invalid and put back at the front of the worklist. Inconsistent solutions are not reported here,
  /// they escape in either mode.
  fn cannot_enumerate(
    &self,
    queue: &mut EnumeratorQueue,
    mut item: WorkItem,
    error: EnumeratorError,
  ) -> Result<(), EnumeratorError>
  {
    match self.options.failure_mode {
      FailureMode::Abort => Err(error),
      FailureMode::Invalidate => {
        warning!(1, "{}", error);
        item.invalidate();
        queue.push_front(item);
        Ok(())
      }
    }
  }

  /// Rewrites the condition of `item` under `sigma`, which binds `variable` to `value`, and appends the child to the
  /// worklist if `accept` keeps its condition. `added` are the fresh variables occurring in `value`.
  #[allow(clippy::too_many_arguments)]
  fn add_child<F: Filter + ?Sized>(
    &self,
    queue   : &mut EnumeratorQueue,
    sigma   : &Substitution,
    accept  : &F,
    item    : &WorkItem,
    rest    : &[Variable],
    added   : Vec<Variable>,
    variable: &Variable,
    value   : Term,
  )
  {
    let condition = self.rewriter.rewrite(item.expression(), sigma);
    if !accept.accept(&condition) {
      trace!(5, "rejected {} := {}", variable, value);
      return;
    }

    let unchanged = self.options.drop_irrelevant_variables && condition == *item.expression();
    let variables = if added.is_empty() || unchanged {
      rest.to_vec()
    } else {
      let mut variables = Vec::with_capacity(rest.len() + added.len());
      variables.extend_from_slice(rest);
      variables.extend(added);
      variables
    };

    trace!(5, "accepted {} := {} with condition {}", variable, value, condition);
    queue.push_back(item.child(variables, condition, variable.clone(), value));
  }

  /// Splits the first variable of the front work item. The front item must be a valid non-solution.
  pub fn enumerate_front<F: Filter + ?Sized>(
    &self,
    queue : &mut EnumeratorQueue,
    sigma : &mut Substitution,
    accept: &F,
  ) -> Result<(), EnumeratorError>
  {
    let item = match queue.pop_front() {
      Some(item) => item,
      None       => return Ok(()),
    };
    debug_assert!(item.is_valid());

    // A solution has nothing left to split.
    let (variable, rest) = match item.variables().split_first() {
      Some((variable, rest)) => (variable.clone(), rest.to_vec()),
      None => {
        queue.push_front(item);
        return Ok(());
      }
    };
    let sort = variable.sort.clone();
    trace!(5, "enumerate {} in {}", variable.typed(), item);

    match sort.kind() {

      SortKind::Function { domain, codomain } => {
        if !self.dataspec.is_certainly_finite(&sort) {
          let error = EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::NotFinite };
          return self.cannot_enumerate(queue, item, error);
        }
        let functions = match self.function_values(&sort, domain, codomain) {
          Ok(functions) => functions,
          Err(error @ EnumeratorError::InconsistentSolution { .. }) => return Err(error),
          Err(error)    => return self.cannot_enumerate(queue, item, error),
        };
        for function in functions {
          let bound = sigma.bind_scoped(variable.clone(), function.clone());
          self.add_child(queue, &bound, accept, &item, &rest, Vec::new(), &variable, function);
        }
      }

      SortKind::Set(element) => {
        if !self.dataspec.is_certainly_finite(element) {
          let error = EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::NotFinite };
          return self.cannot_enumerate(queue, item, error);
        }
        // A set is the finite set of the elements for which the characteristic function is false, which here is all
        // of them. Only the finite part remains to be enumerated.
        let parameter = self.id_generator.fresh_variable(element);
        let finite    = self.id_generator.fresh_variable(&Sort::fset(element.clone()));
        let value     = standard::set_constructor(
          element,
          Term::lambda(vec![parameter], standard::false_()),
          Term::variable(finite.clone())
        );
        let bound = sigma.bind_scoped(variable.clone(), value.clone());
        self.add_child(queue, &bound, accept, &item, &rest, vec![finite], &variable, value);
      }

      SortKind::FSet(element) => {
        if !self.dataspec.is_certainly_finite(element) {
          let error = EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::NotFinite };
          return self.cannot_enumerate(queue, item, error);
        }
        let sets = match self.finite_set_values(&sort, element, sigma) {
          Ok(sets)   => sets,
          Err(error @ EnumeratorError::InconsistentSolution { .. }) => return Err(error),
          Err(error) => return self.cannot_enumerate(queue, item, error),
        };
        for set in sets {
          let bound = sigma.bind_scoped(variable.clone(), set.clone());
          self.add_child(queue, &bound, accept, &item, &rest, Vec::new(), &variable, set);
        }
      }

      SortKind::Bag(_) | SortKind::FBag(_) => {
        let error = EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::Bag };
        return self.cannot_enumerate(queue, item, error);
      }

      SortKind::Algebraic(_) => {
        let constructors = self.cache.constructors(&sort, self.dataspec);
        if constructors.is_empty() {
          let error = EnumeratorError::Unsupported { sort: sort.clone(), reason: UnsupportedReason::NoConstructors };
          return self.cannot_enumerate(queue, item, error);
        }
        for constructor in constructors.iter() {
          let (value, added) = self.constructor_instance(constructor, sigma);
          let bound = sigma.bind_scoped(variable.clone(), value.clone());
          self.add_child(queue, &bound, accept, &item, &rest, added, &variable, value);
        }
      }

    }

    Ok(())
  }

  /// `c(y1, …, yn)` for fresh variables `yi` of the argument sorts of `c`, rewritten under `sigma`, together with the
  /// fresh variables.
  fn constructor_instance(&self, constructor: &FunctionSymbol, sigma: &Substitution) -> (Term, Vec<Variable>) {
    if constructor.is_constant() {
      let value = self.rewriter.rewrite(&Term::symbol(constructor.clone()), sigma);
      return (value, Vec::new());
    }

    let fresh: Vec<Variable> = constructor.domain()
                                          .iter()
                                          .map(|sort| self.id_generator.fresh_variable(sort))
                                          .collect();
    let arguments = fresh.iter().cloned().map(Term::variable).collect();
    let value     = self.rewriter.rewrite(&Term::apply(constructor.clone(), arguments), sigma);
    (value, fresh)
  }

  /// Takes steps until the front of the worklist is a solution or an invalid item, the worklist is empty, or the
  /// session's step budget is used up. Returns the number of steps taken.
  pub fn next<F: Filter + ?Sized>(
    &mut self,
    queue : &mut EnumeratorQueue,
    sigma : &mut Substitution,
    accept: &F,
  ) -> Result<usize, EnumeratorError>
  {
    let mut count = 0;
    while let Some(front) = queue.front() {
      if front.is_solution() || !front.is_valid() || self.budget_exhausted() {
        break;
      }
      self.enumerate_front(queue, sigma, accept)?;
      self.steps += 1;
      count      += 1;
    }
    Ok(count)
  }

  /// Starts iterating over the solutions in `queue`. The condition of every seed item is first rewritten under
  /// `sigma`, and seeds whose condition `accept` rejects are dropped.
  pub fn begin<'s, F: Filter>(
    &'s mut self,
    sigma : &'s mut Substitution,
    queue : &'s mut EnumeratorQueue,
    accept: F,
  ) -> EnumeratorIter<'s, 'a, R, D, F>
  {
    EnumeratorIter::new(self, sigma, queue, accept)
  }
}
