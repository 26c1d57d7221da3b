/*!

Types/type aliases that abstract over the implementing backing type.

A motivating example is the `IString` type, an interned string. A number of external crates could provide this
functionality. This module redirects to whatever chosen implementation we want.

*/

mod nat_set;
mod string_join;

// Logging
pub mod log;

// A set of natural numbers
pub use nat_set::NatSet;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Join sequences with a separator
pub use string_join::{join_iter, join_string};

// Hash maps used throughout. Swapping the hasher happens here.
pub type HashMap<K, V> = std::collections::HashMap<K, V>;
pub type HashSet<T>    = std::collections::HashSet<T>;
