use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use mc_core::DisplayConfig;

/// Decode every non-blank line of `input` and write each rendered record
/// to `out`, separated by blank lines.
///
/// A line that fails to decode is logged and counted; the batch continues.
/// Returns the number of failed lines so the caller can set the exit code.
///
/// # Errors
/// Returns an error if reading a line or writing a record fails.
pub fn run_batch<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &DisplayConfig,
) -> Result<usize> {
    let mut failures = 0usize;
    let mut first = true;

    for line in input.lines() {
        let line = line.context("cannot read input line")?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        match mc_core::decode(raw) {
            Ok(model) => {
                let rendered = mc_render::render(&model, config)
                    .with_context(|| format!("cannot render {raw}"))?;
                if !first {
                    writeln!(out).context("cannot write output")?;
                }
                write!(out, "{rendered}").context("cannot write output")?;
                if !rendered.ends_with('\n') {
                    writeln!(out).context("cannot write output")?;
                }
                first = false;
            }
            Err(e) => {
                log::warn!("{raw}: {e}");
                failures += 1;
            }
        }
    }

    Ok(failures)
}
