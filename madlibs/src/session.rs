//! Game session: repeated rounds and the closing summary

use tracing::{debug, info};

use crate::collector::{self, Choice};
use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::renderer;
use crate::template::Template;

/// Welcome text printed before the first round
pub const BANNER: [&str; 4] = [
    "Welcome to CS 106B Mad Libs!",
    "I will ask you to provide various words",
    "and phrases to fill in a story.",
    "At the end, I will display your story to you.",
];

pub const FILE_PROMPT: &str = "Mad Lib input file? ";
pub const FILE_ERROR: &str = "Unable to open that file.  Try again.";
pub const CONTINUE_PROMPT: &str = "Do another Mad Lib (Y/N)? ";

/// Totals accumulated across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Completed collection passes
    pub stories: usize,
    /// Substitutions across all rounds
    pub replaced: usize,
}

impl SessionStats {
    pub fn record_story(&mut self) {
        self.stories += 1;
    }

    pub fn record_replaced(&mut self, count: usize) {
        self.replaced += count;
    }

    /// Placeholders per story, if any story was played
    pub fn average(&self) -> Option<f64> {
        if self.stories == 0 {
            None
        } else {
            Some(self.replaced as f64 / self.stories as f64)
        }
    }

    /// The two summary lines printed when the game ends
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Mad Lib stories you created: {}", self.stories),
            format!(
                "Total placeholders replaced: {} ({:.1} per story)",
                self.replaced,
                self.average().unwrap_or(0.0)
            ),
        ]
    }
}

/// Where a session is in its round
#[derive(Debug)]
enum State {
    PromptingFile,
    Collecting(Template),
    Rendering(Template, Vec<Choice>),
    AskingContinue,
    Summary,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::PromptingFile => "prompting-file",
            State::Collecting(_) => "collecting",
            State::Rendering(..) => "rendering",
            State::AskingContinue => "asking-continue",
            State::Summary => "summary",
        }
    }
}

/// One play-through of as many rounds as the user wants
pub struct Session<'a, C: Console + ?Sized> {
    console: &'a mut C,
    config: &'a Config,
    stats: SessionStats,
}

impl<'a, C: Console + ?Sized> Session<'a, C> {
    pub fn new(console: &'a mut C, config: &'a Config) -> Self {
        Self {
            console,
            config,
            stats: SessionStats::default(),
        }
    }

    /// Play rounds until the user declines another, then print the summary
    pub fn run(mut self) -> Result<SessionStats> {
        if self.config.banner {
            for line in BANNER {
                self.console.write_line(line)?;
            }
            self.console.blank_line()?;
        }

        let mut state = State::PromptingFile;
        loop {
            state = match state {
                State::PromptingFile => {
                    let path =
                        self.console
                            .prompt_for_file(FILE_PROMPT, FILE_ERROR, self.config.template_dir.as_deref())?;
                    self.console.blank_line()?;
                    State::Collecting(Template::load(&path)?)
                }
                State::Collecting(template) => {
                    let choices = collector::collect_choices(&template, &mut *self.console)?;
                    self.stats.record_story();
                    State::Rendering(template, choices)
                }
                State::Rendering(template, choices) => {
                    let story = renderer::render(&template, &choices)?;
                    renderer::display(&story, &mut *self.console)?;
                    self.stats.record_replaced(story.replaced);
                    info!(path = %template.path().display(), replaced = story.replaced, "Round complete");
                    State::AskingContinue
                }
                State::AskingContinue => {
                    if self.console.confirm(CONTINUE_PROMPT)? {
                        State::PromptingFile
                    } else {
                        State::Summary
                    }
                }
                State::Summary => break,
            };
            debug!(state = state.name(), "Session state");
        }

        self.console.blank_line()?;
        for line in self.stats.summary_lines() {
            self.console.write_line(&line)?;
        }
        info!(stories = self.stats.stories, replaced = self.stats.replaced, "Session finished");
        Ok(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::LineConsole;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn play(input: &str, config: &Config) -> (Result<SessionStats>, String) {
        let mut console = LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = Session::new(&mut console, config).run();
        (result, String::from_utf8(console.into_writer()).unwrap())
    }

    #[test]
    fn test_average() {
        assert_eq!(SessionStats::default().average(), None);
        let stats = SessionStats { stories: 2, replaced: 5 };
        assert_eq!(stats.average(), Some(2.5));
    }

    #[test]
    fn test_summary_lines() {
        let stats = SessionStats { stories: 2, replaced: 6 };
        assert_eq!(
            stats.summary_lines(),
            [
                "Mad Lib stories you created: 2".to_string(),
                "Total placeholders replaced: 6 (3.0 per story)".to_string(),
            ]
        );

        let stats = SessionStats { stories: 3, replaced: 2 };
        assert_eq!(stats.summary_lines()[1], "Total placeholders replaced: 2 (0.7 per story)");
    }

    #[test]
    fn test_single_round_transcript() {
        let temp = TempDir::new().unwrap();
        let story = temp.path().join("fox.txt");
        fs::write(&story, "A <adjective> fox jumped over the <noun>.\n").unwrap();

        let input = format!("{}\nlazy\ndog\nn\n", story.display());
        let (result, out) = play(&input, &Config::default());

        assert_eq!(result.unwrap(), SessionStats { stories: 1, replaced: 2 });
        let expected = [
            "Welcome to CS 106B Mad Libs!",
            "I will ask you to provide various words",
            "and phrases to fill in a story.",
            "At the end, I will display your story to you.",
            "",
            "Mad Lib input file? ",
            "",
            "Please type an adjective:",
            "Please type a noun:",
            "",
            "Your Mad Lib story:",
            "A lazy fox jumped over the dog.",
            "",
            "2 placeholder(s) replaced.",
            "Do another Mad Lib (Y/N)? ",
            "",
            "Mad Lib stories you created: 1",
            "Total placeholders replaced: 2 (2.0 per story)",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_two_rounds_summary() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("one.txt");
        let second = temp.path().join("two.txt");
        fs::write(&first, "<noun> <verb>\n<adverb>\n").unwrap();
        fs::write(&second, "<a><b><c>\n").unwrap();

        let input = format!(
            "{}\ndog\nran\nquickly\ny\n{}\n1\n2\n3\nno\n",
            first.display(),
            second.display()
        );
        let (result, out) = play(&input, &Config::default());

        assert_eq!(result.unwrap(), SessionStats { stories: 2, replaced: 6 });
        assert!(out.contains("dog ran\nquickly\n"));
        assert!(out.contains("123\n"));
        assert_eq!(out.matches("3 placeholder(s) replaced.").count(), 2);
        assert!(out.ends_with("\nMad Lib stories you created: 2\nTotal placeholders replaced: 6 (3.0 per story)\n"));
    }

    #[test]
    fn test_zero_placeholder_round() {
        let temp = TempDir::new().unwrap();
        let story = temp.path().join("plain.txt");
        fs::write(&story, "Nothing <here\n").unwrap();

        let input = format!("{}\nN\n", story.display());
        let (result, out) = play(&input, &Config::default());

        assert_eq!(result.unwrap(), SessionStats { stories: 1, replaced: 0 });
        assert!(out.contains("Your Mad Lib story:\nNothing <here\n\n0 placeholder(s) replaced."));
        assert!(out.contains("Total placeholders replaced: 0 (0.0 per story)"));
    }

    #[test]
    fn test_bad_file_then_good_with_template_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tiny.txt"), "<Umbrella>").unwrap();
        let config = Config {
            template_dir: Some(temp.path().to_path_buf()),
            banner: false,
        };

        let (result, out) = play("nope.txt\ntiny.txt\nred\nn\n", &config);

        assert_eq!(result.unwrap().replaced, 1);
        assert!(out.starts_with("Mad Lib input file? \nUnable to open that file.  Try again.\n"));
        assert!(out.contains("Please type an Umbrella:"));
        assert!(!out.contains("Welcome"));
    }

    #[test]
    fn test_non_utf8_template_plays() {
        let temp = TempDir::new().unwrap();
        let story = temp.path().join("cafe.txt");
        fs::write(&story, b"Caf\xe9 <noun>\n").unwrap();

        let input = format!("{}\ntea\nn\n", story.display());
        let (result, out) = play(&input, &Config::default());

        assert_eq!(result.unwrap(), SessionStats { stories: 1, replaced: 1 });
        assert!(out.contains("Please type a noun:"));
        assert!(out.contains("Caf\u{FFFD} tea\n"));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(State::PromptingFile.name(), "prompting-file");
        assert_eq!(State::Collecting(Template::parse("t", "<a>")).name(), "collecting");
        assert_eq!(State::Rendering(Template::parse("t", ""), Vec::new()).name(), "rendering");
        assert_eq!(State::AskingContinue.name(), "asking-continue");
        assert_eq!(State::Summary.name(), "summary");
    }

    #[test]
    fn test_input_closed_before_continue() {
        let temp = TempDir::new().unwrap();
        let story = temp.path().join("s.txt");
        fs::write(&story, "<noun>").unwrap();

        let input = format!("{}\ncat\n", story.display());
        let (result, _) = play(&input, &Config::default());
        assert!(matches!(result, Err(crate::error::MadLibError::InputClosed)));
    }
}
