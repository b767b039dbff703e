// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented command shell over a [`FileSystem`].

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;
use diagnostics::log_debug;
use memfs::FileSystem;

use crate::help::HELP_TEXT;

pub const PROMPT: &str = "Enter command (or 'exit' to quit): ";
pub const EXIT_MESSAGE: &str = "Exiting";

/// Errors reported for a single command line. None of them end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid method {0} - run 'help' for guidance")]
    InvalidMethod(String),

    #[error("Invalid input length (saw={saw}, expected={expected}). Run 'help' for guidance")]
    InvalidLength { saw: usize, expected: Arity },

    #[error("Invalid boolean parameter {0}: must be among {{true, false, T, F, 0, 1}}")]
    InvalidBool(String),

    #[error(transparent)]
    Fs(#[from] memfs::Error),
}

/// Number of arguments a command accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::OneOf(counts) => counts.contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::OneOf(counts) => {
                let parts: Vec<String> = counts.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
            Arity::AtLeast(min) => write!(f, "{min} or more"),
        }
    }
}

/// Accepted argument count per command
#[must_use]
pub fn arity(method: &str) -> Option<Arity> {
    let arity = match method {
        "pwd" | "help" | "exit" => Arity::OneOf(&[0]),
        "mkdir" | "cd" | "mkfile" | "readfile" => Arity::OneOf(&[1]),
        "ls" => Arity::OneOf(&[0, 1]),
        "rm" => Arity::OneOf(&[1, 2]),
        "writefile" => Arity::AtLeast(1),
        "mvfile" | "find" | "link" | "symlink" => Arity::OneOf(&[2]),
        _ => return None,
    };
    Some(arity)
}

/// Parse a boolean argument. Accepts the usual spellings of true and false.
pub fn parse_bool(value: &str) -> Result<bool, CommandError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CommandError::InvalidBool(value.to_string())),
    }
}

/// Outcome of one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Help,
    Exit,
}

pub struct Shell {
    fs: FileSystem,
    prompt: bool,
}

impl Shell {
    #[must_use]
    pub fn new(fs: FileSystem) -> Self {
        Self { fs, prompt: true }
    }

    /// Suppress the prompt, for scripted input
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.prompt = !quiet;
        self
    }

    #[must_use]
    pub fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    /// Reads commands until `exit` or end of input, printing each result
    /// or error on its own line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.execute(&line) {
                Ok(Reply::Output(text)) => writeln!(out, "{text}")?,
                Ok(Reply::Help) => writeln!(out, "{HELP_TEXT}")?,
                Ok(Reply::Exit) => {
                    writeln!(out, "{EXIT_MESSAGE}")?;
                    break;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Runs a single command line against the filesystem
    pub fn execute(&mut self, line: &str) -> Result<Reply, CommandError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Reply::Output(String::new()));
        };
        let method = first.to_lowercase();
        let args: Vec<&str> = words.collect();

        let expected = arity(&method).ok_or_else(|| CommandError::InvalidMethod(method.clone()))?;
        if !expected.accepts(args.len()) {
            return Err(CommandError::InvalidLength {
                saw: args.len(),
                expected,
            });
        }

        log_debug!("dispatch {method}", method: method.as_str());

        let fs = &mut self.fs;
        let output = match (method.as_str(), args.as_slice()) {
            ("help", []) => return Ok(Reply::Help),
            ("exit", []) => return Ok(Reply::Exit),
            ("pwd", []) => fs.pwd(),
            ("mkdir", [path]) => fs.mkdir(path)?,
            ("cd", [path]) => fs.cd(path)?,
            ("ls", []) => fs.ls(None)?,
            ("ls", [path]) => fs.ls(Some(*path))?,
            ("rm", [path]) => fs.rm(path, false)?,
            ("rm", [path, recursive]) => {
                let recursive = parse_bool(recursive)?;
                fs.rm(path, recursive)?
            }
            ("mkfile", [name]) => fs.mkfile(name)?,
            ("writefile", [name, text @ ..]) => fs.write_file(name, [text.join(" ")])?,
            ("readfile", [name]) => fs.read_file(name)?,
            ("mvfile", [name, target]) => fs.mv_file(name, target)?,
            ("find", [name, recursive]) => {
                let recursive = parse_bool(recursive)?;
                fs.find(name, recursive).join(",")
            }
            ("link", [target, name]) => fs.create_hardlink(target, name)?,
            ("symlink", [target, name]) => fs.create_symlink(target, name)?,
            _ => return Err(CommandError::InvalidMethod(method.clone())),
        };
        Ok(Reply::Output(output))
    }
}
