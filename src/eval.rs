use std::{path::PathBuf, process::Command};

use tracing::debug;

use crate::error::EvaluationFailure;

/// Something that can run a string of Jelly atoms.
pub(crate) trait Oracle {
    fn evaluate(&self, atoms: &str, arguments: &[&str]) -> Result<String, EvaluationFailure>;
}

/// Runs `<program> eun <atoms> <arguments>...` and waits for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct JellyProcess {
    program: PathBuf,
}

impl JellyProcess {
    pub(crate) fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Oracle for JellyProcess {
    fn evaluate(&self, atoms: &str, arguments: &[&str]) -> Result<String, EvaluationFailure> {
        debug!(program = ?self.program, atoms, ?arguments, "running interpreter");
        let output = Command::new(&self.program)
            .arg("eun")
            .arg(atoms)
            .args(arguments)
            .output()
            .map_err(|err| EvaluationFailure::new(None, err.to_string()))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!(status = ?output.status.code(), %stderr, "interpreter failed");
            Err(EvaluationFailure::new(output.status.code(), stderr))
        }
    }
}

/// Whether a chain was given one argument or more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChainKind {
    Monadic,
    Dyadic,
}

impl ChainKind {
    pub(crate) fn of(arguments: &[&str]) -> Self {
        if arguments.len() == 1 {
            ChainKind::Monadic
        } else {
            ChainKind::Dyadic
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            ChainKind::Monadic => "monadic",
            ChainKind::Dyadic => "dyadic",
        }
    }
}

/// Which of the user's arguments reach the interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ArgumentMode {
    /// Only the first argument, even for a dyadic chain.
    #[default]
    FirstOnly,
    /// The first two arguments, when there are two.
    Dyadic,
}

impl ArgumentMode {
    pub(crate) fn select<'a, 'b>(self, arguments: &'b [&'a str]) -> &'b [&'a str] {
        let count = match self {
            ArgumentMode::FirstOnly => 1,
            ArgumentMode::Dyadic => 2,
        };
        &arguments[..count.min(arguments.len())]
    }
}

/// Every left-anchored prefix of `atoms`, shortest first, split on characters.
pub(crate) fn prefixes(atoms: &str) -> impl Iterator<Item = &str> {
    atoms
        .char_indices()
        .map(move |(i, c)| &atoms[..i + c.len_utf8()])
}

/// Evaluates the prefixes of `atoms` one at a time, as the iterator is
/// advanced. A failing prefix does not stop the ones after it.
pub(crate) fn evaluate_prefixes<'a>(
    oracle: &'a dyn Oracle,
    atoms: &'a str,
    arguments: &'a [&'a str],
    mode: ArgumentMode,
) -> impl Iterator<Item = (&'a str, Result<String, EvaluationFailure>)> + 'a {
    let arguments = mode.select(arguments);
    prefixes(atoms).map(move |prefix| (prefix, oracle.evaluate(prefix, arguments)))
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use std::cell::RefCell;

    /// Records every call; fails any program containing `fail_on`.
    #[derive(Default)]
    pub(crate) struct Scripted {
        pub(crate) calls: RefCell<Vec<(String, Vec<String>)>>,
        pub(crate) fail_on: Option<char>,
    }

    impl Oracle for Scripted {
        fn evaluate(&self, atoms: &str, arguments: &[&str]) -> Result<String, EvaluationFailure> {
            self.calls.borrow_mut().push((
                atoms.to_string(),
                arguments.iter().map(|a| a.to_string()).collect(),
            ));
            match self.fail_on {
                Some(c) if atoms.contains(c) => Err(EvaluationFailure::new(Some(1), "bad atom")),
                _ => Ok(format!("{}({})", atoms, arguments.join(","))),
            }
        }
    }

    fn run(
        oracle: &Scripted,
        atoms: &str,
        arguments: &[&str],
        mode: ArgumentMode,
    ) -> Vec<(String, Result<String, EvaluationFailure>)> {
        evaluate_prefixes(oracle, atoms, arguments, mode)
            .map(|(prefix, outcome)| (prefix.to_string(), outcome))
            .collect()
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(prefixes("SḤ").collect::<Vec<_>>(), vec!["S", "SḤ"]);
        assert_eq!(prefixes("Œg").collect::<Vec<_>>(), vec!["Œ", "Œg"]);
        assert_eq!(prefixes("").count(), 0);
    }

    #[test]
    fn test_every_prefix() {
        let oracle = Scripted::default();
        let seen = run(&oracle, "SḤ", &["5"], ArgumentMode::FirstOnly);
        assert_eq!(
            *oracle.calls.borrow(),
            vec![
                ("S".to_string(), vec!["5".to_string()]),
                ("SḤ".to_string(), vec!["5".to_string()]),
            ]
        );
        assert_eq!(seen[1], ("SḤ".to_string(), Ok("SḤ(5)".to_string())));
    }

    #[test]
    fn test_lazy() {
        let oracle = Scripted::default();
        let mut outcomes = evaluate_prefixes(&oracle, "SḤṚ", &["5"], ArgumentMode::FirstOnly);
        assert!(oracle.calls.borrow().is_empty());
        outcomes.next();
        assert_eq!(oracle.calls.borrow().len(), 1);
    }

    #[test]
    fn test_failure_does_not_stop() {
        let oracle = Scripted {
            fail_on: Some('+'),
            ..Scripted::default()
        };
        let seen = run(&oracle, "S+Ṛ", &["1"], ArgumentMode::FirstOnly);
        assert_eq!(seen.len(), 3);
        assert!(seen[0].1.is_ok());
        assert_eq!(seen[1].1, Err(EvaluationFailure::new(Some(1), "bad atom")));
        assert_eq!(seen[2].1, Err(EvaluationFailure::new(Some(1), "bad atom")));
    }

    #[test]
    fn test_argument_modes() {
        let oracle = Scripted::default();
        run(&oracle, "+", &["1", "2"], ArgumentMode::FirstOnly);
        run(&oracle, "+", &["1", "2"], ArgumentMode::Dyadic);
        run(&oracle, "+", &["1"], ArgumentMode::Dyadic);
        let arguments: Vec<Vec<String>> =
            oracle.calls.borrow().iter().map(|(_, a)| a.clone()).collect();
        assert_eq!(arguments, vec![vec!["1"], vec!["1", "2"], vec!["1"]]);
    }

    #[test]
    fn test_chain_kind() {
        assert_eq!(ChainKind::of(&["5"]), ChainKind::Monadic);
        assert_eq!(ChainKind::of(&["5", "6"]), ChainKind::Dyadic);
        assert_eq!(ChainKind::of(&["5", "6", "7"]), ChainKind::Dyadic);
        assert_eq!(ChainKind::Monadic.name(), "monadic");
    }

    #[test]
    fn test_missing_interpreter() {
        let oracle = JellyProcess::new("/nonexistent/jelly-interpreter");
        let failure = oracle.evaluate("S", &["5"]);
        assert!(matches!(failure, Err(EvaluationFailure { status: None, .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_status() {
        assert_eq!(JellyProcess::new("echo").evaluate("S", &["5"]), Ok("eun S 5".to_string()));
        let outcome = JellyProcess::new("false").evaluate("S", &["5"]);
        assert_eq!(outcome.map_err(|failure| failure.status), Err(Some(1)));
    }
}
