use std::ops::Index;
use std::str::FromStr;
use crate::error::{Error, Result};

/// One generation of cells. Every cell is `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
  cells: Vec<u8>,
}

/// The generation-0 row: a single live cell at `length / 2`.
pub fn seed(length: i64) -> Result<Row> {
  if length <= 0 {
    return Err(Error::InvalidLength(length));
  }

  let mut cells = vec![0u8; length as usize];
  cells[length as usize / 2] = 1;
  log::debug!("seeded row of {} cells", length);
  Ok(Row { cells })
}

impl Row {
  pub fn from_cells(cells: Vec<u8>) -> Result<Self> {
    if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &c)| c > 1) {
      return Err(Error::InvalidCell { index, value });
    }
    Ok(Self { cells })
  }

  /// Callers guarantee every cell is `0` or `1`.
  pub(crate) fn from_cells_unchecked(cells: Vec<u8>) -> Self {
    debug_assert!(cells.iter().all(|&c| c <= 1));
    Self { cells }
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn cells(&self) -> &[u8] {
    &self.cells
  }

  pub fn population(&self) -> usize {
    self.cells.iter().filter(|&&c| c == 1).count()
  }
}

impl Index<usize> for Row {
  type Output = u8;

  fn index(&self, i: usize) -> &u8 {
    &self.cells[i]
  }
}

/// Accepts `0`/`1` as well as the RLE and rendered markers (`.`/`b` dead,
/// `*`/`o` alive).
impl FromStr for Row {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let cells = s.bytes().enumerate().map(|(index, c)| match c {
      b'0' | b'.' | b'b' => Ok(0),
      b'1' | b'*' | b'o' => Ok(1),
      _ => Err(Error::InvalidCell { index, value: c }),
    }).collect::<Result<Vec<_>>>()?;
    Ok(Self { cells })
  }
}
