mod atom;
mod combinator;
mod error;
mod eval;
mod parse;
mod render;
mod repl;
mod tokens;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use eval::{ArgumentMode, JellyProcess};
use repl::{repl, Session};

/// Build Jelly chains out of keywords and watch every prefix evaluate.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Jelly interpreter to run chains with
    #[arg(long, default_value = "jelly")]
    interpreter: PathBuf,

    /// File that input history is appended to
    #[arg(long, default_value = "jello_history.txt")]
    history: PathBuf,

    /// Pass the second argument to the interpreter as well, when there is one
    #[arg(long)]
    dyadic: bool,

    /// Print without colours
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn mode(&self) -> ArgumentMode {
        if self.dyadic {
            ArgumentMode::Dyadic
        } else {
            ArgumentMode::FirstOnly
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("JELLO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(JellyProcess::new(&cli.interpreter), cli.mode());
    repl(&session, &cli.history, !cli.no_color)
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use unwrap::unwrap;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = unwrap!(Cli::try_parse_from(["jello"]));
        assert_eq!(cli.interpreter, PathBuf::from("jelly"));
        assert_eq!(cli.history, PathBuf::from("jello_history.txt"));
        assert_eq!(cli.mode(), ArgumentMode::FirstOnly);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_flags() {
        let cli = unwrap!(Cli::try_parse_from([
            "jello",
            "--interpreter",
            "/opt/jelly/bin/jelly",
            "--dyadic",
            "--no-color",
        ]));
        assert_eq!(cli.interpreter, PathBuf::from("/opt/jelly/bin/jelly"));
        assert_eq!(cli.mode(), ArgumentMode::Dyadic);
        assert!(cli.no_color);
    }
}
