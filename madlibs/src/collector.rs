//! Collection pass: ask the user for a value per placeholder

use tracing::debug;

use crate::article;
use crate::console::Console;
use crate::error::Result;
use crate::template::Template;

/// The user's answer for one placeholder occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Placeholder text as written in the template
    pub name: String,
    /// What the user typed, verbatim
    pub answer: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answer: answer.into(),
        }
    }
}

/// Prompt for every placeholder of `template` in discovery order
///
/// Each occurrence is asked for separately, even when a name repeats. A blank
/// line is printed once all answers are in.
pub fn collect_choices<C: Console + ?Sized>(template: &Template, console: &mut C) -> Result<Vec<Choice>> {
    let mut choices = Vec::new();

    for name in template.placeholders() {
        let answer = console.read_line(&article::prompt_for(name))?;
        choices.push(Choice::new(name, answer));
    }

    console.blank_line()?;
    debug!(path = %template.path().display(), count = choices.len(), "Collected choices");
    Ok(choices)
}
