/*!

`EnumeratorIter` yields the solutions of a worklist one at a time. Creating it primes the first solution; advancing
it removes the solution just yielded and drives the search to the next one.

The step budget is enforced here. When it runs out before the next solution is found, `FailureMode::Abort` yields
`Err(EnumeratorError::BudgetExceeded)` once, and `FailureMode::Invalidate` yields the front work item marked invalid.
Either way the worklist is cleared and the iterator ends.

Solutions are yielded with their trace, so the caller can read off the values of its variables with
`WorkItem::assignments`. An invalid item is never a solution, and callers in `Invalidate` mode must check
`WorkItem::is_valid`.

*/

use crate::{
  api::{DataSpecification, Rewriter, Substitution},
  log::{debug, warning}
};

use super::{
  Enumerator,
  EnumeratorError,
  EnumeratorQueue,
  FailureMode,
  Filter,
  WorkItem
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum IterState {
  /// The front of the worklist has not been yielded yet.
  Ready,
  /// The front of the worklist was yielded and is removed on the next advance.
  Yielded,
  Done,
}

pub struct EnumeratorIter<'s, 'a, R: Rewriter, D: DataSpecification, F: Filter> {
  enumerator: &'s mut Enumerator<'a, R, D>,
  sigma     : &'s mut Substitution,
  queue     : &'s mut EnumeratorQueue,
  accept    : F,
  state     : IterState,
  /// An error to yield before ending.
  pending   : Option<EnumeratorError>,
}

impl<'s, 'a, R: Rewriter, D: DataSpecification, F: Filter> EnumeratorIter<'s, 'a, R, D, F> {
  pub(crate) fn new(
    enumerator: &'s mut Enumerator<'a, R, D>,
    sigma     : &'s mut Substitution,
    queue     : &'s mut EnumeratorQueue,
    accept    : F,
  ) -> Self
  {
    // Seeds start from their rewritten condition. A seed may be an item left by an earlier step of the session, so its
    // trace is kept.
    let seeds: Vec<WorkItem> = queue.drain(..).collect();
    for seed in seeds {
      if !seed.is_valid() {
        queue.push_back(seed);
        continue;
      }
      let condition = enumerator.rewriter().rewrite(seed.expression(), sigma);
      if accept.accept(&condition) {
        queue.push_back(seed.with_expression(condition));
      }
    }

    let mut iter = EnumeratorIter {
      enumerator,
      sigma,
      queue,
      accept,
      state  : IterState::Ready,
      pending: None,
    };
    iter.search();
    iter
  }

  /// The number of steps taken in the enumerator's session so far.
  pub fn steps(&self) -> usize {
    self.enumerator.steps()
  }

  /// Whether the iterator has nothing more to yield.
  pub fn at_end(&self) -> bool {
    self.pending.is_none() && (self.state == IterState::Done || (self.state == IterState::Ready && self.queue.is_empty()))
  }

  /// The work item most recently yielded, while it is still at the front of the worklist.
  pub fn current(&self) -> Option<&WorkItem> {
    match self.state {
      IterState::Yielded => self.queue.front(),
      _                  => None,
    }
  }

  /// Drives the search until the front is a solution or invalid, then enforces the budget if the search stopped
  /// short of that.
  fn search(&mut self) {
    match self.enumerator.next(self.queue, self.sigma, &self.accept) {
      Err(error) => {
        self.fail(error);
      }
      Ok(_) => {
        if let Some(front) = self.queue.front() {
          if front.is_valid() && !front.is_solution() {
            self.enforce_budget();
          }
        }
      }
    }
  }

  fn fail(&mut self, error: EnumeratorError) {
    debug!(3, "enumeration failed after {} steps: {}", self.enumerator.steps(), error);
    self.queue.clear();
    self.pending = Some(error);
  }

  fn enforce_budget(&mut self) {
    let max_count = self.enumerator.max_count();
    match self.enumerator.failure_mode() {
      FailureMode::Abort => {
        self.fail(EnumeratorError::BudgetExceeded { max_count });
      }
      FailureMode::Invalidate => {
        warning!(1, "enumeration did not complete within {} iterations", max_count);
        if let Some(mut front) = self.queue.pop_front() {
          front.invalidate();
          self.queue.clear();
          self.queue.push_back(front);
        }
      }
    }
  }

  /// Removes the solution yielded last and finds the next one.
  fn advance(&mut self) {
    self.queue.pop_front();
    if self.queue.is_empty() {
      return;
    }
    if self.enumerator.budget_exhausted() {
      self.enforce_budget();
    } else {
      self.search();
    }
  }
}

impl<'s, 'a, R: Rewriter, D: DataSpecification, F: Filter> Iterator for EnumeratorIter<'s, 'a, R, D, F> {
  type Item = Result<WorkItem, EnumeratorError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.state == IterState::Yielded {
      self.advance();
      self.state = IterState::Ready;
    }

    if let Some(error) = self.pending.take() {
      self.state = IterState::Done;
      return Some(Err(error));
    }

    if self.state == IterState::Done {
      return None;
    }

    match self.queue.front() {
      None => {
        self.state = IterState::Done;
        debug!(3, "enumeration finished after {} steps", self.enumerator.steps());
        None
      }
      Some(front) => {
        let front  = front.clone();
        self.state = if front.is_valid() { IterState::Yielded } else { IterState::Done };
        Some(Ok(front))
      }
    }
  }
}
