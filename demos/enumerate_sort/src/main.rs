use dataenum::{
  api::{standard, DataSpec, IdentifierGenerator, SimpleRewriter, Sort, Substitution, Term, Variable},
  enumerate_expressions,
  log::set_global_logging_threshold,
  Enumerator,
  EnumeratorOptions,
  EnumeratorQueue,
  IsNotFalse,
  WorkItem,
};

fn main() {
  set_global_logging_threshold(3);

  let mut spec = DataSpec::new();
  let e = spec.add_structured_sort("E", &[("e1", vec![]), ("e2", vec![])]);
  let d = spec.add_structured_sort("D", &[("d1", vec![e.clone()]), ("d2", vec![e.clone()])]);
  spec.add_structured_sort(
    "tree",
    &[("leaf", vec![Sort::bool()]), ("node", vec![Sort::algebraic("tree"), Sort::algebraic("tree")])]
  );
  let rewriter     = SimpleRewriter::new(&spec);
  let id_generator = IdentifierGenerator::new();

  println!("{}", spec);

  for sort in [d.clone(), Sort::fset(e.clone()), Sort::function(vec![e.clone()], Sort::bool())] {
    match enumerate_expressions(&sort, &spec, &rewriter, &id_generator) {
      Ok(values) => {
        println!("{} has {} values:", sort, values.len());
        for value in values {
          println!("  {}", value);
        }
      }
      Err(error) => println!("{}: {}", sort, error),
    }
  }

  // A contradiction is pruned before any step is taken.
  let x = Variable::new("x", Sort::algebraic("tree"));
  let y = Variable::new("y", d.clone());
  let condition = standard::not_equal_to(Term::variable(y.clone()), Term::variable(y.clone()));
  println!("solutions of {}:", condition);
  let mut enumerator = Enumerator::with_options(
    &rewriter,
    &spec,
    &id_generator,
    EnumeratorOptions::default().with_max_count(64)
  );
  let mut sigma = Substitution::new();
  let mut queue = EnumeratorQueue::from([WorkItem::new(vec![y.clone()], condition)]);
  println!("  {} solutions", enumerator.begin(&mut sigma, &mut queue, IsNotFalse).count());

  enumerator.reset();
  println!("trees, at most 64 steps:");
  let mut queue = EnumeratorQueue::from([WorkItem::new(vec![x.clone()], standard::true_())]);
  for item in enumerator.begin(&mut sigma, &mut queue, IsNotFalse) {
    match item {
      Ok(solution) if solution.is_valid() => println!("  x = {}", solution.value_of(&x, &rewriter)),
      Ok(_)      => println!("  step budget used up"),
      Err(error) => println!("  {}", error),
    }
  }
}
