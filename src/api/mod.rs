/*!

The public data model and the collaborator interfaces the enumerator is written against: sorts, function symbols,
variables, terms, substitutions, the data specification, the rewriter, and the fresh identifier generator.

The interfaces (`DataSpecification`, `Rewriter`) are traits so that a production rewriter or data specification can be
plugged in. `DataSpec` and `SimpleRewriter` are small default implementations.

*/

pub mod sort;
pub mod symbol;
pub mod variable;
pub mod term;
pub mod standard;
pub mod substitution;
pub mod data_specification;
pub mod rewriter;
pub mod identifier_generator;

pub use sort::{Sort, SortKind};
pub use symbol::FunctionSymbol;
pub use variable::Variable;
pub use term::{Term, TermAttribute, TermAttributes, TermKind};
pub use substitution::{ScopedBinding, Substitution};
pub use data_specification::{DataSpec, DataSpecification};
pub use rewriter::{Rewriter, SimpleRewriter};
pub use identifier_generator::IdentifierGenerator;
