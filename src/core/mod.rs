/*!

The enumeration engine. Everything here is written against the collaborator traits of the `api` module, so the engine
never depends on a particular rewriter or data specification.

| part                      | purpose                                                                   |
|:--------------------------|:--------------------------------------------------------------------------|
| `enumerator::Enumerator`  | the enumeration step and the driver, with the session's step budget       |
| `enumerator::EnumeratorIter` | resumable iteration over solutions                                     |
| `enumerator::WorkItem`    | a node of the search with its trace of bindings                           |
| `enumerator::Filter`      | acceptance of rewritten conditions                                        |
| `enumerator::SortCache`   | per-session constructor lists and materialized finite sorts               |

*/

pub mod enumerator;
