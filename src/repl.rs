use std::{fmt::Display, io, path::Path};

use anyhow::Context as _;
use rustyline::{
    completion::Completer, error::ReadlineError, highlight::Highlighter, hint::Hinter,
    history::FileHistory, validate::Validator, Context, Editor, Helper,
};
use tracing::{debug, warn};
use vec1::Vec1;

use crate::atom::{arities, translate_chain};
use crate::combinator::{arity_label, group};
use crate::error::{Error, EvaluationFailure};
use crate::eval::{evaluate_prefixes, ArgumentMode, ChainKind, Oracle};
use crate::parse::{parse_line, Command, Line};
use crate::render::{Renderer, Terminal, Tone};
use crate::tokens;

const BANNER: &str = "🟢🟡🔴 Jello 🔴🟡🟢\n";
const INPUT_SYMBOL: &str = "> ";
const OUTPUT_SYMBOL: &str = "➡️";
const INITIAL_INDENT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Everything that happens to one line of input, minus the terminal.
pub(crate) struct Session<O> {
    oracle: O,
    mode: ArgumentMode,
}

fn report(out: &mut dyn Renderer, err: &dyn Display) -> io::Result<()> {
    out.line(&format!("Error: {}", err), Tone::Error)
}

impl<O: Oracle> Session<O> {
    pub(crate) fn new(oracle: O, mode: ArgumentMode) -> Self {
        Self { oracle, mode }
    }

    pub(crate) fn handle(&self, input: &str, out: &mut dyn Renderer) -> io::Result<Flow> {
        match parse_line(input) {
            Ok(Command::Quit) => return Ok(Flow::Quit),
            Ok(Command::Blank) => {}
            Ok(Command::Run(line)) => self.run(&line, out)?,
            Err(err) => report(out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn run(&self, line: &Line, out: &mut dyn Renderer) -> io::Result<()> {
        let atoms = match translate_chain(&line.chain) {
            Ok(atoms) => atoms,
            Err(err) => return report(out, &err),
        };
        debug!(chain = ?line.chain, %atoms, "translated chain");

        let width = atoms.chars().count();
        let shown = line.arguments.join(" ");
        let outcomes = evaluate_prefixes(&self.oracle, &atoms, &line.arguments, self.mode);
        for (prefix, outcome) in outcomes {
            out.span(&format!("   {:<width$}", prefix), Tone::Prefix)?;
            out.span(&format!(" {} {} ", shown, OUTPUT_SYMBOL), Tone::Argument)?;
            match outcome {
                Ok(output) => out.line(&output, Tone::Output)?,
                Err(failure) => show_failure(out, &failure)?,
            }
        }

        self.describe(line, out)
    }

    /// Prints the chain's arity pattern, its combinators and their tree.
    fn describe(&self, line: &Line, out: &mut dyn Renderer) -> io::Result<()> {
        let kind = ChainKind::of(&line.arguments);
        let grouped = arities(&line.chain).and_then(|arities| {
            let arities = Vec1::try_from_vec(arities).map_err(|_| Error::EmptyChain)?;
            let grouping = group(&arities)?;
            Ok((arities, grouping))
        });
        let (arities, grouping) = match grouped {
            Ok(grouped) => grouped,
            Err(err) => return report(out, &err),
        };

        out.span("    This is a ", Tone::Plain)?;
        out.span(&arity_label(&arities), Tone::Arity)?;
        let names = grouping.name_sequence();
        if names.is_empty() {
            out.line(&format!(" {} chain", kind.name()), Tone::Plain)?;
        } else {
            out.line(&format!(" {} chain ({})", kind.name(), names), Tone::Plain)?;
        }
        for row in grouping.render(INITIAL_INDENT).lines() {
            out.line(row, Tone::Plain)?;
        }
        Ok(())
    }
}

fn show_failure(out: &mut dyn Renderer, failure: &EvaluationFailure) -> io::Result<()> {
    report(out, failure)?;
    out.line(&format!("stderr: {}", failure.stderr.trim_end()), Tone::Error)
}

/// Completes the word under the cursor from the keyword tables.
pub(crate) struct Keywords {
    words: Vec<&'static str>,
}

impl Keywords {
    pub(crate) fn new() -> Self {
        Self {
            words: tokens::keywords().collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .trim_end_matches(|c: char| !(c.is_whitespace() || c == ':'))
            .len();
        let partial = &before[start..];
        let words = self
            .words
            .iter()
            .filter(|word| word.starts_with(partial))
            .map(|word| word.to_string())
            .collect();
        (start, words)
    }
}

impl Completer for Keywords {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for Keywords {
    type Hint = String;
}

impl Highlighter for Keywords {}

impl Validator for Keywords {}

impl Helper for Keywords {}

/// Reads lines until `q` or end of input, remembering them in `history`.
pub(crate) fn repl<O: Oracle>(
    session: &Session<O>,
    history: &Path,
    color: bool,
) -> anyhow::Result<()> {
    let mut editor: Editor<Keywords, FileHistory> =
        Editor::new().context("could not start the line editor")?;
    editor.set_helper(Some(Keywords::new()));
    if let Err(err) = editor.load_history(history) {
        debug!(path = ?history, %err, "no history loaded");
    }

    let mut out = Terminal::new(io::stdout(), color);
    out.line(BANNER, Tone::Plain)?;

    loop {
        let input = match editor.readline(INPUT_SYMBOL) {
            Ok(input) => input,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("could not read input"),
        };

        if !input.trim().is_empty() {
            let saved = editor
                .add_history_entry(input.as_str())
                .and_then(|_| editor.append_history(history));
            if let Err(err) = saved {
                warn!(path = ?history, %err, "could not save history");
            }
        }

        if session.handle(&input, &mut out)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
