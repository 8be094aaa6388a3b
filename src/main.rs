use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use eca::export::{self, RenderStyle};
use eca::{rle, universe};

/// Run an elementary cellular automaton from a single live cell.
#[derive(Debug, Parser)]
#[command(name = "eca")]
struct Args {
  /// Number of cells in a row.
  #[arg(allow_negative_numbers = true)]
  length: i64,
  /// Number of generations after the first one.
  num_steps: u64,
  /// Rule number, 0-255.
  #[arg(allow_negative_numbers = true)]
  rule: i64,

  /// Character drawn for live cells.
  #[arg(long, default_value_t = '*')]
  alive: char,
  /// Character drawn for dead cells.
  #[arg(long, default_value_t = ' ')]
  dead: char,

  /// Also write every generation to this RLE file.
  #[arg(long)]
  rle: Option<PathBuf>,
  /// Also save the space-time diagram to this image file.
  #[arg(long)]
  image: Option<PathBuf>,
  /// Report the first repeated generation, if any, after the output.
  #[arg(long)]
  cycle: bool,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();
  log::info!("rule {}, {} cells, {} steps", args.rule, args.length, args.num_steps);

  let style = RenderStyle {
    alive: args.alive,
    dead: args.dead,
  };
  let keep_rows = args.rle.is_some() || args.image.is_some() || args.cycle;
  let mut rows = vec![];

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let rule = universe::run(args.length, args.num_steps, args.rule, |row| {
    writeln!(out, "{}", export::render(row, style))?;
    if keep_rows {
      rows.push(row.clone());
    }
    Ok(())
  })?;
  out.flush()?;

  if let Some(path) = &args.rle {
    std::fs::write(path, rle::write(&rows, Some(&rule))?)
      .with_context(|| format!("writing {}", path.display()))?;
  }
  if let Some(path) = &args.image {
    export::save_image(&rows, path)
      .with_context(|| format!("saving {}", path.display()))?;
  }
  if args.cycle {
    match universe::cycle_in(&rows) {
      Some(cycle) => writeln!(out, "cycle: start {}, period {}", cycle.start, cycle.period)?,
      None => writeln!(out, "no cycle within {} steps", args.num_steps)?,
    }
    out.flush()?;
  }

  Ok(())
}
