//! The hero's typed terminal.
//!
//! [`Typer`] is a time-free state machine: every [`Typer::step`] either
//! reveals one more character of the current command or commits the
//! finished line to history. The driver decides how long to wait between
//! steps (see [`Typer::peek`]).

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Working directory shown in the terminal footer.
pub const WORKING_DIR: &str = "~/projects/portfolio";

/// One prompt/command pair of the intro script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    /// Prompt shown before the command, e.g. `user@host`.
    pub prompt: String,
    /// Command typed after the prompt.
    pub command: String,
}

impl ScriptLine {
    /// Creates a script line.
    pub fn new(prompt: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            command: command.into(),
        }
    }
}

impl std::fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}> {}", self.prompt, self.command)
    }
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyperStep {
    /// One more character became visible.
    Keystroke,
    /// The current line moved into history.
    Commit,
}

/// Typing animation state.
#[derive(Debug, Clone)]
pub struct Typer {
    script: Vec<ScriptLine>,
    history_limit: usize,
    line_index: usize,
    typed_chars: usize,
    history: VecDeque<ScriptLine>,
    done: bool,
}

impl Typer {
    /// Creates a typer at the start of `script`. An empty script is done
    /// immediately.
    #[instrument(skip(script), fields(lines = script.len()))]
    pub fn new(script: Vec<ScriptLine>, history_limit: usize) -> Self {
        let done = script.is_empty();
        let capacity = history_limit.min(script.len());
        Self {
            script,
            history_limit,
            line_index: 0,
            typed_chars: 0,
            history: VecDeque::with_capacity(capacity),
            done,
        }
    }

    /// The step the next call to [`Typer::step`] will perform.
    pub fn peek(&self) -> Option<TyperStep> {
        let line = self.current()?;
        if self.typed_chars < line.command.chars().count() {
            Some(TyperStep::Keystroke)
        } else {
            Some(TyperStep::Commit)
        }
    }

    /// Advances the animation by one step; `None` once done.
    pub fn step(&mut self) -> Option<TyperStep> {
        let step = self.peek()?;
        match step {
            TyperStep::Keystroke => self.typed_chars += 1,
            TyperStep::Commit => self.commit(),
        }
        Some(step)
    }

    fn commit(&mut self) {
        let Some(line) = self.script.get(self.line_index).cloned() else {
            self.done = true;
            return;
        };
        debug!(line = %line, "Committing typed line");

        self.history.push_back(line);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }

        if self.line_index + 1 >= self.script.len() {
            self.done = true;
        } else {
            self.line_index += 1;
            self.typed_chars = 0;
        }
    }

    /// The line being typed, if any.
    pub fn current(&self) -> Option<&ScriptLine> {
        if self.done {
            None
        } else {
            self.script.get(self.line_index)
        }
    }

    /// Visible part of the current command.
    pub fn typed(&self) -> &str {
        let Some(line) = self.current() else {
            return "";
        };
        match line.command.char_indices().nth(self.typed_chars) {
            Some((end, _)) => &line.command[..end],
            None => &line.command,
        }
    }

    /// Committed lines, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ScriptLine> {
        self.history.iter()
    }

    /// True once the last line has been committed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Footer status text.
    pub fn status(&self) -> &'static str {
        if self.done {
            "ready when you are"
        } else {
            "typing…"
        }
    }

    /// Draws the terminal frame.
    pub fn render(&self) -> String {
        let mut frame = String::new();
        for line in self.history() {
            frame.push_str(&line.to_string());
            frame.push('\n');
        }
        if let Some(line) = self.current() {
            frame.push_str(&format!("{}> {}▌\n", line.prompt, self.typed()));
        }
        frame.push_str(&format!("{}  {}\n", WORKING_DIR, self.status()));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<ScriptLine> {
        vec![ScriptLine::new("me@void", "ls"), ScriptLine::new("me@void", "cd")]
    }

    #[test]
    fn test_steps_type_then_commit() {
        let mut typer = Typer::new(script(), 4);
        assert_eq!(typer.step(), Some(TyperStep::Keystroke));
        assert_eq!(typer.typed(), "l");
        assert_eq!(typer.step(), Some(TyperStep::Keystroke));
        assert_eq!(typer.typed(), "ls");
        assert_eq!(typer.peek(), Some(TyperStep::Commit));
        assert_eq!(typer.step(), Some(TyperStep::Commit));
        assert_eq!(typer.typed(), "");
        assert_eq!(typer.history().count(), 1);
        assert_eq!(typer.current(), Some(&ScriptLine::new("me@void", "cd")));
    }

    #[test]
    fn test_done_after_last_commit() {
        let mut typer = Typer::new(script(), 4);
        let steps: Vec<_> = std::iter::from_fn(|| typer.step()).collect();
        assert_eq!(steps.len(), 6);
        assert!(typer.is_done());
        assert_eq!(typer.status(), "ready when you are");
        assert_eq!(typer.step(), None);
    }

    #[test]
    fn test_empty_script_is_done() {
        let mut typer = Typer::new(Vec::new(), 4);
        assert!(typer.is_done());
        assert_eq!(typer.step(), None);
        assert_eq!(typer.render(), format!("{}  ready when you are\n", WORKING_DIR));
    }

    #[test]
    fn test_unbounded_history_limit() {
        let mut typer = Typer::new(script(), usize::MAX);
        while typer.step().is_some() {}
        assert_eq!(typer.history().count(), 2);
    }

    #[test]
    fn test_multibyte_commands_type_by_character() {
        let mut typer = Typer::new(vec![ScriptLine::new("p", "héllo")], 4);
        typer.step();
        typer.step();
        assert_eq!(typer.typed(), "hé");
    }
}
