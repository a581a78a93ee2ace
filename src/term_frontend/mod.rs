use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, stderr, stdout, Write};

use crate::report::{CONSTANT_TERM_LABEL, DISAGREEMENT_LABEL};

/// Prints a rendered report, highlighting the result lines.
pub fn print_report(report: &str) -> io::Result<()> {
    let mut out = stdout();
    for line in report.lines() {
        if line.starts_with(CONSTANT_TERM_LABEL) {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset),
                ResetColor,
            )?;
        } else if line.starts_with(DISAGREEMENT_LABEL) {
            queue!(out, SetForegroundColor(Color::Yellow), Print(line), ResetColor)?;
        } else if !line.starts_with(' ') {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(out, Print(line))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

pub fn print_header(title: &str) -> io::Result<()> {
    let mut out = stdout();
    queue!(
        out,
        SetAttribute(Attribute::Underlined),
        Print(title),
        SetAttribute(Attribute::Reset),
        Print("\n"),
    )?;
    out.flush()
}

pub fn print_error(message: &str) -> io::Result<()> {
    let mut err = stderr();
    queue!(
        err,
        SetForegroundColor(Color::Red),
        Print("error: "),
        ResetColor,
        Print(message),
        Print("\n"),
    )?;
    err.flush()
}
