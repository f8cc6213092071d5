use std::io::{self, Write};

use serde::Serialize;

use crate::app::{FetchResult, ProgressEvent, ProgressSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Prints every status line to stdout as it happens.
pub struct ConsoleOutput;

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        println!("{}", event.message);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclinedResult {
    pub declined: bool,
}

/// Keeps stdout for the final JSON document; status lines go to stderr.
pub struct JsonOutput;

impl JsonOutput {
    pub fn print_fetch(result: &FetchResult) -> io::Result<()> {
        Self::print_json(result)
    }

    pub fn print_declined() -> io::Result<()> {
        Self::print_json(&DeclinedResult { declined: true })
    }

    pub fn render<T: Serialize>(value: &T) -> io::Result<String> {
        serde_json::to_string_pretty(value).map_err(io::Error::other)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = Self::render(value)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, event: ProgressEvent) {
        eprintln!("{}", event.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declined_renders_pretty() {
        let json = JsonOutput::render(&DeclinedResult { declined: true }).unwrap();
        assert_eq!(json, "{\n  \"declined\": true\n}");
    }
}
