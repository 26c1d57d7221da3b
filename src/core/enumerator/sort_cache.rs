/*!

Per-session memo tables shared by an enumerator and the nested enumerators it starts: the constructors of each sort,
and the materialized value lists of finite sorts. Entries are reference counted slices, so a caller can hold a list
while the cache is updated during recursion.

*/

use std::{cell::RefCell, rc::Rc};

use crate::{
  abstractions::HashMap,
  api::{DataSpecification, FunctionSymbol, Sort, Term}
};

#[derive(Default)]
pub struct SortCache {
  constructors: RefCell<HashMap<Sort, Rc<[FunctionSymbol]>>>,
  values      : RefCell<HashMap<Sort, Rc<[Term]>>>,
}

impl SortCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn constructors<D: DataSpecification + ?Sized>(&self, sort: &Sort, dataspec: &D) -> Rc<[FunctionSymbol]> {
    if let Some(constructors) = self.constructors.borrow().get(sort) {
      return constructors.clone();
    }
    let constructors: Rc<[FunctionSymbol]> = dataspec.constructors(sort).into();
    self.constructors.borrow_mut().insert(sort.clone(), constructors.clone());
    constructors
  }

  pub fn values(&self, sort: &Sort) -> Option<Rc<[Term]>> {
    self.values.borrow().get(sort).cloned()
  }

  pub fn insert_values(&self, sort: &Sort, values: Vec<Term>) -> Rc<[Term]> {
    let values: Rc<[Term]> = values.into();
    self.values.borrow_mut().insert(sort.clone(), values.clone());
    values
  }

  pub fn clear(&self) {
    self.constructors.borrow_mut().clear();
    self.values.borrow_mut().clear();
  }
}
