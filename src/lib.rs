//! Elementary (one-dimensional, two-state, radius-1) cellular automata on a
//! ring of cells.
//!
//! ```
//! let rule = eca::rule::decode(90)?;
//! let row = eca::row::seed(9)?;
//! let next = eca::universe::step(&row, &rule)?;
//! assert_eq!(next.cells(), &[0, 0, 0, 1, 0, 1, 0, 0, 0]);
//! # Ok::<(), eca::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod rle;
pub mod row;
pub mod rule;
pub mod universe;

pub use error::{Error, Result};
pub use row::Row;
pub use rule::Rule;
pub use universe::Universe;
