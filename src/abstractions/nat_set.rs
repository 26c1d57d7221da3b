/*!

A set of small natural numbers, backed by a bit vector. Used to select members of a finite set by index, for example
when the subsets of a finite element sort are generated from a bitmask.

*/

use std::fmt::{Display, Formatter};
use bit_set::BitSet;

use crate::abstractions::join_string;

#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct NatSet {
  bits: BitSet,
}

impl NatSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds the set whose members are the positions of the one bits of `mask`.
  pub fn from_mask(mut mask: usize) -> Self {
    let mut set   = NatSet::new();
    let mut index = 0;
    while mask != 0 {
      if mask & 1 == 1 {
        set.insert(index);
      }
      mask >>= 1;
      index += 1;
    }
    set
  }

  #[inline(always)]
  pub fn insert(&mut self, value: usize) -> bool {
    self.bits.insert(value)
  }

  #[inline(always)]
  pub fn contains(&self, value: usize) -> bool {
    self.bits.contains(value)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.bits.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.bits.is_empty()
  }

  /// Iterates over the members in increasing order.
  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.bits.iter()
  }
}

impl Display for NatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{{}}}", join_string(self.iter(), ", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_mask_selects_one_bits() {
    let set = NatSet::from_mask(0b1011);
    assert!(set.contains(0));
    assert!(set.contains(1));
    assert!(!set.contains(2));
    assert!(set.contains(3));
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_string(), "{0, 1, 3}");
  }

  #[test]
  fn empty_mask_is_empty_set() {
    assert!(NatSet::from_mask(0).is_empty());
  }
}
