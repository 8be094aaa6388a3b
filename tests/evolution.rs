use eca::rule::{self, Rule};
use eca::row::{self, Row};
use eca::universe::{self, Universe};
use eca::Error;

fn row(cells: &[u8]) -> Row {
  Row::from_cells(cells.to_vec()).unwrap()
}

#[test]
fn rule_90_scenario() {
  let rule = rule::decode(90).unwrap();
  assert_eq!(rule.to_string(), "01011010");
  let next = universe::step(&row(&[0, 1, 0, 1, 0, 1, 0, 1, 0]), &rule).unwrap();
  assert_eq!(next, row(&[1, 0, 0, 0, 0, 0, 0, 0, 1]));
}

#[test]
fn rule_222_scenario() {
  let rule: Rule = "11011110".parse().unwrap();
  let seed = row::seed(9).unwrap();
  assert_eq!(seed, row(&[0, 0, 0, 0, 1, 0, 0, 0, 0]));
  let next = universe::step(&seed, &rule).unwrap();
  assert_eq!(next, row(&[0, 0, 0, 1, 1, 1, 0, 0, 0]));
}

#[test]
fn rule_30_from_seed() {
  let mut uni = Universe::from_seed(30, 5).unwrap();
  let rows = uni.history(2).unwrap();
  assert_eq!(rows[1], row(&[0, 1, 1, 1, 0]));
  assert_eq!(rows[2], row(&[1, 1, 0, 0, 1]));
}

#[test]
fn wraps_left_edge() {
  // Rule 16 only keeps `100`: every live cell moves one to the right.
  let rule = rule::decode(16).unwrap();
  let next = universe::step(&row(&[0, 0, 0, 1]), &rule).unwrap();
  assert_eq!(next, row(&[1, 0, 0, 0]));
}

#[test]
fn wraps_right_edge() {
  // Rule 2 only keeps `001`: every live cell moves one to the left.
  let rule = rule::decode(2).unwrap();
  let next = universe::step(&row(&[1, 0, 0, 0, 0, 0, 0]), &rule).unwrap();
  assert_eq!(next, row(&[0, 0, 0, 0, 0, 0, 1]));
}

#[test]
fn step_is_deterministic_and_keeps_length() {
  let start = row(&[1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1]);
  for n in 0..256 {
    let rule = rule::decode(n).unwrap();
    let a = universe::step(&start, &rule).unwrap();
    let b = universe::step(&start, &rule).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), start.len());
    assert!(a.cells().iter().all(|&c| c <= 1));
  }
}

#[test]
fn step_leaves_input_untouched() {
  let start = row(&[0, 1, 1, 0, 1]);
  let copy = start.clone();
  universe::step(&start, &rule::RULE_110).unwrap();
  assert_eq!(start, copy);
}

#[test]
fn error_cases() {
  assert!(matches!(rule::decode(256), Err(Error::OutOfRange(256))));
  assert!(matches!(rule::decode(-1), Err(Error::OutOfRange(-1))));
  assert!(matches!(row::seed(0), Err(Error::InvalidLength(0))));
  let empty = Row::from_cells(vec![]).unwrap();
  assert!(matches!(universe::step(&empty, &rule::RULE_90), Err(Error::EmptyRow)));
}
