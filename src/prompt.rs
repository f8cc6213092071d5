use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::config::ResolvedConfig;
use crate::error::FetchError;
use crate::output::OutputMode;

pub const CONTINUE_QUESTION: &str = "Continue anyway? (y/N): ";

pub trait Confirm {
    fn confirm(&self, question: &str) -> Result<bool, FetchError>;
}

/// Writes the question to `output` and reads one answer line from `input`.
pub struct LineConfirm {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl LineConfirm {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Reads stdin. The question goes wherever the progress lines of `mode` go,
    /// so JSON on stdout stays parseable.
    pub fn stdin(mode: OutputMode) -> Self {
        let input: Box<dyn BufRead + Send> = Box::new(io::BufReader::new(io::stdin()));
        let output: Box<dyn Write + Send> = match mode {
            OutputMode::Human => Box::new(io::stdout()),
            OutputMode::Json => Box::new(io::stderr()),
        };
        Self::new(input, output)
    }
}

impl Confirm for LineConfirm {
    fn confirm(&self, question: &str) -> Result<bool, FetchError> {
        {
            let mut output = self
                .output
                .lock()
                .map_err(|_| FetchError::Prompt("output lock poisoned".to_string()))?;
            output
                .write_all(question.as_bytes())
                .and_then(|_| output.flush())
                .map_err(|err| FetchError::Prompt(err.to_string()))?;
        }
        let mut answer = String::new();
        self.input
            .lock()
            .map_err(|_| FetchError::Prompt("input lock poisoned".to_string()))?
            .read_line(&mut answer)
            .map_err(|err| FetchError::Prompt(err.to_string()))?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers without asking. Used for `--yes` and for non-interactive runs.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _question: &str) -> Result<bool, FetchError> {
        Ok(self.0)
    }
}

impl<T: Confirm + ?Sized> Confirm for Box<T> {
    fn confirm(&self, question: &str) -> Result<bool, FetchError> {
        (**self).confirm(question)
    }
}

/// `--yes` wins over `--non-interactive`; a non-interactive run never touches stdin.
pub fn for_config(config: &ResolvedConfig, mode: OutputMode) -> Box<dyn Confirm> {
    if config.assume_yes {
        Box::new(FixedAnswer(true))
    } else if !config.interactive {
        Box::new(FixedAnswer(false))
    } else {
        Box::new(LineConfirm::stdin(mode))
    }
}

/// Only `y` or `Y` counts once the line ending is dropped; an empty line or EOF means no.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Y\r\n"));
        assert!(is_affirmative("y"));
        assert!(!is_affirmative(" y"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
    }

    #[test]
    fn line_confirm_asks_on_its_output_only() {
        let written = SharedBuf::default();
        let confirm = LineConfirm::new(
            Box::new(Cursor::new(b"n\ny\n".to_vec())),
            Box::new(written.clone()),
        );

        assert!(!confirm.confirm(CONTINUE_QUESTION).unwrap());
        assert!(confirm.confirm(CONTINUE_QUESTION).unwrap());
        assert!(!confirm.confirm(CONTINUE_QUESTION).unwrap());

        let text = String::from_utf8(written.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, CONTINUE_QUESTION.repeat(3));
    }
}
