use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
  /// Rule numbers are 8-bit.
  #[error("rule number {0} is out of range 0-255")]
  OutOfRange(i64),
  /// Rows need at least one cell.
  #[error("row length {0} must be positive")]
  InvalidLength(i64),
  #[error("cannot evolve an empty row")]
  EmptyRow,
  #[error("cell {index} has value {value}, expected 0 or 1")]
  InvalidCell {
    index: usize,
    value: u8,
  },
  #[error("invalid rule string {0:?}, expected 8 binary digits")]
  InvalidRuleString(String),
  #[error("invalid RLE: {0}")]
  InvalidRle(String),
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
