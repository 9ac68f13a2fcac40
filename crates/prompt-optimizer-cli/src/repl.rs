use std::io::{BufRead, Write};

use prompt_optimizer_core::{optimize, Result};

const QUIT_COMMANDS: &[&str] = &[":quit", ":q", ":exit"];

/// Read prompts until EOF or a quit command, printing each document
///
/// A prompt spans lines up to the next empty line.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<usize> {
    let mut optimized = 0;

    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        let Some(prompt) = read_prompt(&mut reader, &mut writer)? else {
            break;
        };

        if QUIT_COMMANDS.contains(&prompt.trim()) {
            break;
        }

        match optimize(&prompt) {
            Ok(result) => {
                writeln!(writer)?;
                write!(writer, "{}", result.optimized)?;
                writeln!(writer)?;
                optimized += 1;
            }
            Err(e) if e.is_validation() => {
                writeln!(writer, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(optimized, "repl finished");
    Ok(optimized)
}

/// Collect lines until an empty line; `None` on EOF with nothing read
fn read_prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Option<String>> {
    let mut lines: Vec<String> = Vec::new();

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            });
        }

        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if line.trim().is_empty() {
            return Ok(Some(lines.join("\n")));
        }
        if lines.is_empty() && QUIT_COMMANDS.contains(&line.trim()) {
            return Ok(Some(line.to_string()));
        }

        lines.push(line.to_string());
        write!(writer, ". ")?;
        writer.flush()?;
    }
}
