use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Reads measurements from stdin, echoing prompts to stdout.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a measurement was entered",
            )
            .into());
        }

        Ok(line)
    }
}
