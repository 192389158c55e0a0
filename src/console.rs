// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-based prompting over any reader/writer pair.
//!
//! Every retry is a loop. End of input is reported as
//! [`io::ErrorKind::UnexpectedEof`] so a closed stdin never spins forever.

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

pub fn stdio() -> Console<StdinLock<'static>, Stdout> {
    let stdin: Stdin = io::stdin();
    Console::new(stdin.lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next line without its terminator.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Asks until `parse` accepts the answer, printing each rejection.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<T>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(&line) {
                Ok(v) => return Ok(v),
                Err(e) => self.warn(e)?,
            }
        }
    }

    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "❌ {}", msg)
    }

    /// yes/y → true, no/n → false, anything else asks again.
    pub fn confirm_continue(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.output, "\n{}", "-".repeat(40))?;
            writeln!(self.output, "Do you want to continue? (yes/no)")?;
            let choice = self.ask("Enter your choice: ")?.trim().to_lowercase();
            match choice.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 'yes' or 'no'.")?,
            }
        }
    }
}
