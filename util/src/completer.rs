use rustyline::{Context, Helper, Highlighter, Hinter, Result, Validator, completion::Completer};
use std::collections::BTreeSet;

/// A rustyline completer for line-level commands.
///
/// Bare words (such as `quit`) and `:`-prefixed commands are only offered
/// while the cursor is still inside the first word of the line; expression
/// text after that gets no suggestions.
#[derive(Helper, Highlighter, Hinter, Validator)]
pub struct CommandCompleter {
    words: BTreeSet<String>,
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(
        words: impl IntoIterator<Item = impl Into<String>>,
        commands: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Start of the replaced span and the candidates for `line[..pos]`.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];

        if let Some(prefix) = head.strip_prefix(':') {
            if !prefix.chars().all(char::is_alphanumeric) {
                return (pos, Vec::new());
            }
            let completions = self
                .commands
                .iter()
                .filter(|c| c.starts_with(prefix))
                .cloned()
                .collect();
            return (1, completions);
        }

        if !head.chars().all(char::is_alphabetic) {
            return (pos, Vec::new());
        }

        let mut completions = self
            .words
            .iter()
            .filter(|w| w.starts_with(head))
            .cloned()
            .collect::<Vec<_>>();

        if pos == 0 {
            completions.extend(self.commands.iter().map(|c| format!(":{c}")));
        }

        (0, completions)
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context) -> Result<(usize, Vec<String>)> {
        Ok(self.candidates(line, pos))
    }
}
