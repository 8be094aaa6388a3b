use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::rule::{self, Rule};

/// A stack of generations read from RLE, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  pub rows: Vec<Row>,
  pub rule: Option<Rule>,
}

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*W(\d+))?\s*$")
    .expect("header pattern is valid")
});

const MAX_LINE_LEN: usize = 70;

/// Read generations from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>. Every
/// line of the pattern is one row; the rule, if any, is written `W<number>`.
pub fn read(src: impl AsRef<str>) -> Result<Pattern> {
  let mut lines = src.as_ref().lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'));

  let header = lines.next()
    .ok_or_else(|| Error::InvalidRle("missing header line".to_owned()))?;
  let caps = HEADER_RE.captures(header)
    .ok_or_else(|| Error::InvalidRle(format!("invalid header line {:?}", header)))?;
  let width = parse_num(&caps[1])?;
  let height = parse_num(&caps[2])?;
  if width == 0 {
    return Err(Error::InvalidRle("pattern width must be positive".to_owned()));
  }
  let rule = match caps.get(3) {
    Some(m) => Some(rule::decode(parse_num(m.as_str())? as i64)?),
    None => None,
  };

  let body: String = lines.collect();
  let mut rows = vec![];
  let mut cells = vec![0u8; width];
  let mut x: usize = 0;
  let mut src = body.as_str();
  loop {
    if src.is_empty() {
      return Err(Error::InvalidRle("unexpected EOF".to_owned()));
    }

    let num_len = src.find(|c: char| !c.is_ascii_digit()).unwrap_or(src.len());
    let num = if num_len == 0 { 1 } else { parse_num(&src[..num_len])? };
    src = &src[num_len..];

    let c = match src.chars().next() {
      Some(c) => c,
      None => return Err(Error::InvalidRle("unexpected EOF".to_owned())),
    };
    match c {
      'b' | 'o' => {
        let end = x.checked_add(num)
          .filter(|&end| end <= width)
          .ok_or_else(|| Error::InvalidRle(format!("row {} is wider than {}", rows.len(), width)))?;
        if c == 'o' {
          cells[x..end].iter_mut().for_each(|cell| *cell = 1);
        }
        x = end;
      }
      '$' => {
        // The row after the last `$` still has to fit.
        if num >= height - rows.len() {
          return Err(too_many_rows(height));
        }
        rows.push(Row::from_cells_unchecked(cells));
        for _ in 1..num {
          rows.push(Row::from_cells_unchecked(vec![0u8; width]));
        }
        cells = vec![0u8; width];
        x = 0;
      }
      '!' => {
        if rows.len() >= height {
          return Err(too_many_rows(height));
        }
        rows.push(Row::from_cells_unchecked(cells));
        break;
      }
      _ => {
        return Err(Error::InvalidRle(format!("invalid character {:?}", c)));
      }
    }

    src = &src[c.len_utf8()..];
  }

  rows.resize(height, Row::from_cells_unchecked(vec![0u8; width]));

  Ok(Pattern { rows, rule })
}

fn too_many_rows(height: usize) -> Error {
  Error::InvalidRle(format!("more rows than the {} in the header", height))
}

fn parse_num(s: &str) -> Result<usize> {
  s.parse().map_err(|_| Error::InvalidRle(format!("invalid number {:?}", s)))
}

/// Write generations to a RLE string, one pattern row per generation.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>. All
/// rows must have the width of the first one.
pub fn write(rows: &[Row], rule: Option<&Rule>) -> Result<String> {
  let width = rows.first().map_or(0, Row::len);
  if let Some(row) = rows.iter().find(|row| row.len() != width) {
    return Err(Error::InvalidLength(row.len() as i64));
  }
  let mut output = format!("x = {}, y = {}", width, rows.len());
  if let Some(rule) = rule {
    output.push_str(&format!(", rule = W{}", rule.number()));
  }
  output.push('\n');

  let mut num_consec_next_rows = 0;
  for (y, row) in rows.iter().enumerate() {
    if y > 0 {
      num_consec_next_rows += 1;
    }

    let mut runs = vec![];
    for (c, group) in &row.cells().iter().group_by(|&&c| c) {
      runs.push((c, group.count()));
    }
    if let Some(&(0, _)) = runs.last() {
      runs.pop();
    }
    if runs.is_empty() {
      continue;
    }

    if num_consec_next_rows > 0 {
      RleUnit::NextRow.write(num_consec_next_rows, &mut output);
      num_consec_next_rows = 0;
    }
    for (c, num) in runs {
      let unit = if c == 1 { RleUnit::Alive } else { RleUnit::Dead };
      unit.write(num, &mut output);
    }
  }

  RleUnit::End.write(1, &mut output);
  output.push('\n');
  Ok(output)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
  End,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
      Self::End => '!',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    let line_start = s.rfind('\n').map_or(0, |i| i + 1);
    if s.len() - line_start + buf.len() > MAX_LINE_LEN {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}
