use std::iter::once;
use std::fmt::Display;

/**
Interleave the items of an iterator with separators, which doesn't exist in the stdlib. (C.f. `Vec::join(…)`)

From: https://stackoverflow.com/a/66951473
Usage:

    # use dataenum::abstractions::join_iter;
    let iter = ["d1", "e1"].iter().cloned();
    assert_eq!(join_iter(iter, |_| ", ").collect::<String>(), "d1, e1");
 */
pub fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
                    -> impl Iterator<Item = T>
{
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |s| once(sep(&s)).chain(once(s))))
}

/// Join a list of displayable things with a given separator. Used by the `Display` impls of sorts, terms, and
/// work items.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|t| t.to_string()), |_| sep.to_string()).collect::<String>()
}

#[cfg(test)]
mod tests {
  use super::{join_iter, join_string};

  #[test]
  fn join_iter_interleaves_separator() {
    let iter   = ["Bool", "Nat", "Pos"].iter().cloned();
    let joined = join_iter(iter, |_| " # ").collect::<String>();
    assert_eq!(joined, "Bool # Nat # Pos");
  }

  #[test]
  fn join_string_of_empty_and_singleton() {
    let empty: [u8; 0] = [];
    assert_eq!(join_string(empty.iter(), ", "), "");
    assert_eq!(join_string([7].iter(), ", "), "7");
    assert_eq!(join_string([1, 3, 5].iter(), ", "), "1, 3, 5");
  }
}
