use std::io::{BufRead, Write};

use cmake_pilot_core::error::Result;

/// Reads one line without its line ending; `None` once input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let content_length = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(content_length);
    Ok(Some(line))
}

/// Asks a yes/no question until it gets an answer.
///
/// An empty answer means yes. Running out of input means no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    loop {
        write!(output, "{prompt} (Y/n): ")?;
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            writeln!(output)?;
            return Ok(false);
        };

        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

/// Asks for free text.
///
/// Returns `None` when the answer is empty or input is exhausted.
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    match read_line(input)? {
        Some(answer) if !answer.trim().is_empty() => Ok(Some(answer.trim().to_string())),
        Some(_) => Ok(None),
        None => {
            writeln!(output)?;
            Ok(None)
        }
    }
}

/// Asks for a value that is taken exactly as typed, empty included.
///
/// Returns `None` only when input is exhausted.
pub fn prompt_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    let answer = read_line(input)?;
    if answer.is_none() {
        writeln!(output)?;
    }
    Ok(answer)
}
