//! Colored console output: one-line messages and boxed panels.

use std::io::{stdout, Stdout, Write};

use cmake_pilot_core::error::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

/// What a message is reporting, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Banner,
    Farewell,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success | Tone::Banner => Color::Green,
            Tone::Failure => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Farewell => Color::Blue,
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, Tone::Banner | Tone::Farewell)
    }
}

pub struct Console<W: Write> {
    out: W,
    colored: bool,
}

impl Console<Stdout> {
    #[must_use]
    pub fn stdout(colored: bool) -> Self {
        Self::new(stdout(), colored)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Gives back the sink, e.g. to inspect what was printed.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn message(&mut self, tone: Tone, text: &str) -> Result<()> {
        if self.colored {
            if tone.is_bold() {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.out,
                SetForegroundColor(tone.color()),
                Print(text),
                ResetColor,
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            write!(self.out, "{text}")?;
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints `text` inside a box sized to its widest line.
    pub fn panel(&mut self, text: &str) -> Result<()> {
        let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = "─".repeat(width + 2);

        writeln!(self.out, "┌{border}┐")?;
        for line in text.lines() {
            let padding = " ".repeat(width - line.chars().count());
            write!(self.out, "│ ")?;
            if self.colored {
                queue!(
                    self.out,
                    SetForegroundColor(Color::Cyan),
                    Print(line),
                    ResetColor
                )?;
            } else {
                write!(self.out, "{line}")?;
            }
            writeln!(self.out, "{padding} │")?;
        }
        writeln!(self.out, "└{border}┘")?;

        self.out.flush()?;
        Ok(())
    }
}
