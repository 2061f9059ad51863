use std::io::{self, Write};

/// What a span of output means. Only the terminal knows how that looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Plain,
    Prefix,
    Argument,
    Output,
    Error,
    Arity,
}

pub(crate) trait Renderer {
    fn span(&mut self, text: &str, tone: Tone) -> io::Result<()>;
    fn newline(&mut self) -> io::Result<()>;

    fn line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        self.span(text, tone)?;
        self.newline()
    }
}

/// Writes spans to a terminal, coloured with ANSI escapes unless `color` is off.
pub(crate) struct Terminal<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub(crate) fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn escape(tone: Tone) -> Option<&'static str> {
        match tone {
            Tone::Plain => None,
            Tone::Prefix => Some("\x1b[33m"),
            Tone::Argument => Some("\x1b[34m"),
            Tone::Output => Some("\x1b[32m"),
            Tone::Error | Tone::Arity => Some("\x1b[31m"),
        }
    }
}

impl<W: Write> Renderer for Terminal<W> {
    fn span(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        match Self::escape(tone).filter(|_| self.color) {
            Some(escape) => write!(self.out, "{}{}\x1b[0m", escape, text),
            None => write!(self.out, "{}", text),
        }
    }

    fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// Keeps every span so tests can look at both text and tone.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) spans: Vec<(Tone, String)>,
    }

    impl Recorder {
        pub(crate) fn text(&self) -> String {
            self.spans.iter().map(|(_, text)| text.as_str()).collect()
        }

        pub(crate) fn toned(&self, tone: Tone) -> Vec<&str> {
            self.spans
                .iter()
                .filter(|(t, _)| *t == tone)
                .map(|(_, text)| text.as_str())
                .collect()
        }
    }

    impl Renderer for Recorder {
        fn span(&mut self, text: &str, tone: Tone) -> io::Result<()> {
            self.spans.push((tone, text.to_string()));
            Ok(())
        }

        fn newline(&mut self) -> io::Result<()> {
            self.spans.push((Tone::Plain, "\n".to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_terminal_color() {
        let mut terminal = Terminal::new(Vec::new(), true);
        terminal.span("10", Tone::Output).unwrap();
        terminal.line(" done", Tone::Plain).unwrap();
        assert_eq!(String::from_utf8(terminal.out).unwrap(), "\x1b[32m10\x1b[0m done\n");
    }

    #[test]
    fn test_terminal_plain() {
        let mut terminal = Terminal::new(Vec::new(), false);
        terminal.line("Error", Tone::Error).unwrap();
        assert_eq!(String::from_utf8(terminal.out).unwrap(), "Error\n");
    }
}
