//! Mad Libs - fill in the blanks of a story template
//!
//! A template is a text file with bracketed placeholders such as `<noun>`.
//! Each round the user picks a template, is asked for a word per placeholder,
//! and sees the story with their words substituted. When they stop, the game
//! reports how many stories they made and how many placeholders they filled.
//!
//! # Pipeline
//!
//! ```text
//! prompt for file -> Template::load
//!                 -> collector::collect_choices   (one prompt per placeholder)
//!                 -> renderer::render / display   (same discovery order)
//!                 -> confirm another round
//! ```
//!
//! The template is read once per round and both passes walk the same lines,
//! pairing placeholders with answers purely by discovery order.
//!
//! # Example
//!
//! ```
//! use madlibs::{Choice, Template, render};
//!
//! let template = Template::parse("fox.txt", "A <adjective> fox jumped over the <noun>.");
//! let choices = vec![Choice::new("adjective", "lazy"), Choice::new("noun", "dog")];
//! let story = render(&template, &choices).unwrap();
//! assert_eq!(story.lines, vec!["A lazy fox jumped over the dog."]);
//! assert_eq!(story.replaced, 2);
//! ```

pub mod article;
pub mod cli;
pub mod collector;
pub mod config;
pub mod console;
pub mod error;
pub mod renderer;
pub mod scanner;
pub mod session;
pub mod template;

pub use article::{article_for, prompt_for};
pub use collector::{Choice, collect_choices};
pub use config::Config;
pub use console::{Console, LineConsole, ReadlineConsole};
pub use error::{MadLibError, Result};
pub use renderer::{Story, display, render, render_line};
pub use scanner::{Span, find_span, placeholder_names, spans};
pub use session::{Session, SessionStats};
pub use template::Template;
