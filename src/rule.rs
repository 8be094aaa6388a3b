use std::fmt::{self, Display};
use std::str::FromStr;
use crate::error::{Error, Result};

/// Transition table of an elementary automaton.
///
/// `bits[0]` is the most significant bit of the rule number and holds the
/// next state of the `111` neighborhood; `bits[7]` holds the next state of
/// `000`. Use [`complement`] to go from a neighborhood pattern to an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
  bits: [u8; 8],
}

/// The three cells a new state depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
  pub left: u8,
  pub center: u8,
  pub right: u8,
}

pub const RULE_30: Rule = Rule {
  bits: [0, 0, 0, 1, 1, 1, 1, 0],
};

pub const RULE_90: Rule = Rule {
  bits: [0, 1, 0, 1, 1, 0, 1, 0],
};

pub const RULE_110: Rule = Rule {
  bits: [0, 1, 1, 0, 1, 1, 1, 0],
};

/// Decode a decimal rule number into its table.
pub fn decode(rule_decimal: i64) -> Result<Rule> {
  if !(0..=255).contains(&rule_decimal) {
    return Err(Error::OutOfRange(rule_decimal));
  }

  let n = rule_decimal as u8;
  let mut bits = [0u8; 8];
  for (i, bit) in bits.iter_mut().enumerate() {
    *bit = n >> (7 - i) & 1;
  }
  log::debug!("decoded rule {} as {:08b}", rule_decimal, n);
  Ok(Rule { bits })
}

/// Maps a neighborhood pattern (`0..8`, left cell most significant) to its
/// index in the rule table, which runs from `111` down to `000`.
pub fn complement(pattern: u8) -> usize {
  assert!(pattern < 8);
  7 - pattern as usize
}

impl Neighborhood {
  /// Only the low bit of each cell counts.
  pub fn pattern(&self) -> u8 {
    (self.left & 1) << 2 | (self.center & 1) << 1 | self.right & 1
  }
}

impl Rule {
  pub fn number(&self) -> u8 {
    self.bits.iter().fold(0u8, |acc, &b| acc << 1 | b)
  }

  pub fn bits(&self) -> &[u8; 8] {
    &self.bits
  }

  pub fn next_state(&self, neighborhood: Neighborhood) -> u8 {
    self.bits[complement(neighborhood.pattern())]
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for b in &self.bits {
      write!(f, "{}", b)?;
    }
    Ok(())
  }
}

impl FromStr for Rule {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    if s.len() != 8 {
      return Err(Error::InvalidRuleString(s.to_owned()));
    }

    let mut bits = [0u8; 8];
    for (bit, c) in bits.iter_mut().zip(s.bytes()) {
      *bit = match c {
        b'0' => 0,
        b'1' => 1,
        _ => return Err(Error::InvalidRuleString(s.to_owned())),
      };
    }
    Ok(Rule { bits })
  }
}
