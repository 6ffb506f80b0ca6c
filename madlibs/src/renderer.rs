//! Rendering pass: substitute collected answers back into the template

use tracing::debug;

use crate::collector::Choice;
use crate::console::Console;
use crate::error::{MadLibError, Result};
use crate::scanner;
use crate::template::Template;

/// A finished story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub lines: Vec<String>,
    /// Number of placeholders substituted
    pub replaced: usize,
}

/// Substitute answers into one line
///
/// Output is assembled from the text between spans plus the next answer per
/// span, so answer text is never scanned again. `line_no` is 1-based and only
/// used for error reporting.
pub fn render_line<'a, I>(line: &str, line_no: usize, answers: &mut I) -> Result<(String, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = String::with_capacity(line.len());
    let mut pos = 0;
    let mut replaced = 0;

    for span in scanner::spans(line) {
        let answer = answers.next().ok_or_else(|| MadLibError::MissingAnswer {
            line: line_no,
            name: span.name(line).to_string(),
        })?;
        out.push_str(&line[pos..span.open]);
        out.push_str(answer);
        pos = span.end();
        replaced += 1;
    }
    out.push_str(&line[pos..]);

    Ok((out, replaced))
}

/// Substitute `choices` into `template` in discovery order
pub fn render(template: &Template, choices: &[Choice]) -> Result<Story> {
    let mut answers = choices.iter().map(|c| c.answer.as_str());
    let mut lines = Vec::with_capacity(template.lines().len());
    let mut replaced = 0;

    for (idx, line) in template.lines().iter().enumerate() {
        let (rendered, count) = render_line(line, idx + 1, &mut answers)?;
        lines.push(rendered);
        replaced += count;
    }

    let unused = answers.count();
    if unused > 0 {
        debug!(unused, "Answers left over after rendering");
    }

    Ok(Story { lines, replaced })
}

/// Print a story with its header and replacement footer
pub fn display<C: Console + ?Sized>(story: &Story, console: &mut C) -> Result<()> {
    console.write_line("Your Mad Lib story:")?;
    for line in &story.lines {
        console.write_line(line)?;
    }
    console.blank_line()?;
    console.write_line(&format!("{} placeholder(s) replaced.", story.replaced))
}
