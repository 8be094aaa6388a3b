use std::path::Path;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::Itertools;
use crate::error::{Error, Result};
use crate::row::Row;

/// Characters used to draw cells as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
  pub alive: char,
  pub dead: char,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      alive: '*',
      dead: ' ',
    }
  }
}

/// One line of text, one character per cell, no trailing newline.
pub fn render(row: &Row, style: RenderStyle) -> String {
  row.cells().iter()
    .map(|&c| if c == 1 { style.alive } else { style.dead })
    .collect()
}

/// Every row rendered on its own newline-terminated line.
pub fn render_all(rows: &[Row], style: RenderStyle) -> String {
  rows.iter()
    .map(|row| format!("{}\n", render(row, style)))
    .join("")
}

/// Space-time diagram: pixel row `y` is generation `y`, live cells are white.
pub fn to_image(rows: &[Row]) -> Result<GrayImage> {
  let width = rows.first().map_or(0, Row::len);
  if width == 0 {
    return Err(Error::EmptyRow);
  }

  let mut buffer: GrayImage = ImageBuffer::new(width as u32, rows.len() as u32);
  for (y, row) in rows.iter().enumerate() {
    if row.len() != width {
      return Err(Error::InvalidLength(row.len() as i64));
    }
    for (x, &c) in row.cells().iter().enumerate() {
      if c == 1 {
        buffer.put_pixel(x as u32, y as u32, Luma([255u8]));
      }
    }
  }
  Ok(buffer)
}

/// Save the diagram of `rows`; the format follows the extension of `path`.
pub fn save_image(rows: &[Row], path: impl AsRef<Path>) -> Result<()> {
  let buffer = to_image(rows)?;
  buffer.save(path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use crate::universe::Universe;

  #[test]
  fn render_row() {
    let row: Row = "00101".parse().unwrap();
    assert_eq!(render(&row, RenderStyle::default()), "  * *");
    assert_eq!(render(&row, RenderStyle { alive: '#', dead: '.' }), "..#.#");
  }

  #[test]
  fn render_rule_90_triangle() {
    let mut uni = Universe::from_seed(90, 9).unwrap();
    let rows = uni.history(4).unwrap();
    let style = RenderStyle { alive: '*', dead: '.' };
    assert_eq!(render_all(&rows, style), r"
....*....
...*.*...
..*...*..
.*.*.*.*.
*.......*
".trim_start_matches('\n'));
  }

  #[test]
  fn image_pixels() {
    let mut uni = Universe::from_seed(222, 5).unwrap();
    let rows = uni.history(2).unwrap();
    let img = to_image(&rows).unwrap();
    assert_eq!(img.dimensions(), (5, 3));
    assert_eq!(img.get_pixel(2, 0), &Luma([255u8]));
    assert_eq!(img.get_pixel(0, 0), &Luma([0u8]));
    assert_eq!(img.get_pixel(0, 2), &Luma([255u8]));
  }

  #[test]
  fn save_image_follows_extension() {
    use image::GenericImageView;
    use std::fs;

    let mut uni = Universe::from_seed(222, 5).unwrap();
    let rows = uni.history(2).unwrap();
    let dir = std::env::temp_dir();
    let png = dir.join(format!("eca-export-{}.png", std::process::id()));
    let bmp = dir.join(format!("eca-export-{}.bmp", std::process::id()));
    save_image(&rows, &png).unwrap();
    save_image(&rows, &bmp).unwrap();

    assert!(fs::read(&png).unwrap().starts_with(b"\x89PNG"));
    assert!(fs::read(&bmp).unwrap().starts_with(b"BM"));

    let img = image::open(&png).unwrap();
    fs::remove_file(&png).unwrap();
    fs::remove_file(&bmp).unwrap();
    assert_eq!(img.dimensions(), (5, 3));
    assert_eq!(img.get_pixel(2, 0).0[0], 255);
    assert_eq!(img.get_pixel(1, 0).0[0], 0);
    assert_eq!(img.get_pixel(1, 1).0[0], 255);
  }

  #[test]
  fn image_needs_cells() {
    assert!(matches!(to_image(&[]), Err(Error::EmptyRow)));
  }

  #[test]
  fn image_rows_share_width() {
    let rows: Vec<Row> = vec!["010".parse().unwrap(), "01".parse().unwrap()];
    assert!(matches!(to_image(&rows), Err(Error::InvalidLength(2))));
  }
}
