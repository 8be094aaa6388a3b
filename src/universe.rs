use std::hash::{BuildHasherDefault, Hash};
use indexmap::IndexSet;
use rustc_hash::FxHasher;
use crate::error::{Error, Result};
use crate::row::{self, Row};
use crate::rule::{self, Neighborhood, Rule};

/// Compute the next generation of `row`.
///
/// The row is a ring: cell `0`'s left neighbor is the last cell and the last
/// cell's right neighbor is cell `0`. All cells update at once from `row`,
/// which is left untouched.
pub fn step(row: &Row, rule: &Rule) -> Result<Row> {
  let len = row.len();
  if len == 0 {
    return Err(Error::EmptyRow);
  }

  let next = (0..len)
    .map(|i| rule.next_state(neighborhood(row, i)))
    .collect();
  Ok(Row::from_cells_unchecked(next))
}

/// `i` must be a valid index of the non-empty `row`.
pub fn neighborhood(row: &Row, i: usize) -> Neighborhood {
  let len = row.len();
  Neighborhood {
    left: row[(i + len - 1) % len],
    center: row[i],
    right: row[(i + 1) % len],
  }
}

/// Decode `rule_decimal`, seed a row of `length` cells and pass it to `emit`
/// followed by each of the next `num_steps` generations.
///
/// Returns the decoded rule so callers never decode it again.
pub fn run<F>(
  length: i64,
  num_steps: u64,
  rule_decimal: i64,
  mut emit: F,
) -> Result<Rule>
where
  F: FnMut(&Row) -> Result<()>
{
  let rule = rule::decode(rule_decimal)?;
  let mut row = row::seed(length)?;
  emit(&row)?;
  for _ in 0..num_steps {
    row = step(&row, &rule)?;
    emit(&row)?;
  }
  Ok(rule)
}

/// An automaton together with its current generation.
#[derive(Debug, Clone)]
pub struct Universe {
  rule: Rule,
  row: Row,
  generation: u64,
}

impl Universe {
  pub fn new(rule: Rule, row: Row) -> Self {
    Self {
      rule,
      row,
      generation: 0,
    }
  }

  pub fn from_seed(rule_decimal: i64, length: i64) -> Result<Self> {
    Ok(Self::new(rule::decode(rule_decimal)?, row::seed(length)?))
  }

  pub fn rule(&self) -> &Rule {
    &self.rule
  }

  pub fn row(&self) -> &Row {
    &self.row
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn step(&mut self) -> Result<()> {
    self.row = step(&self.row, &self.rule)?;
    self.generation += 1;
    log::trace!("generation {}: population {}", self.generation, self.row.population());
    Ok(())
  }

  pub fn simulate(&mut self, num_steps: u64) -> Result<()> {
    for _ in 0..num_steps {
      self.step()?;
    }
    Ok(())
  }

  /// The current row followed by the next `num_steps` generations.
  pub fn history(&mut self, num_steps: u64) -> Result<Vec<Row>> {
    let mut rows = vec![self.row.clone()];
    for _ in 0..num_steps {
      self.step()?;
      rows.push(self.row.clone());
    }
    Ok(rows)
  }
}

/// A repeating stretch of generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
  /// First generation that belongs to the cycle.
  pub start: u64,
  pub period: u64,
}

/// Generations seen so far, in order.
struct Seen<T> {
  rows: IndexSet<T, BuildHasherDefault<FxHasher>>,
}

impl<T: Hash + Eq> Seen<T> {
  fn new() -> Self {
    Self {
      rows: IndexSet::default(),
    }
  }

  /// Record the next generation, or the cycle it closes.
  fn visit(&mut self, row: T) -> Option<Cycle> {
    let generation = self.rows.len();
    let (index, inserted) = self.rows.insert_full(row);
    if inserted {
      return None;
    }

    let cycle = Cycle {
      start: index as u64,
      period: (generation - index) as u64,
    };
    log::debug!("found cycle {:?}", cycle);
    Some(cycle)
  }
}

/// Evolve `row` for at most `limit` steps looking for a repeated generation.
pub fn find_cycle(row: &Row, rule: &Rule, limit: u64) -> Result<Option<Cycle>> {
  if row.is_empty() {
    return Err(Error::EmptyRow);
  }

  let mut seen = Seen::new();
  let mut row = row.clone();
  for generation in 0..=limit {
    if let Some(cycle) = seen.visit(row.clone()) {
      return Ok(Some(cycle));
    }
    if generation < limit {
      row = step(&row, rule)?;
    }
  }
  Ok(None)
}

/// The first repeat among consecutive generations `rows`, oldest first.
pub fn cycle_in(rows: &[Row]) -> Option<Cycle> {
  let mut seen = Seen::new();
  rows.iter().find_map(|row| seen.visit(row))
}
