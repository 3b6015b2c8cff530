//! Child process helpers
//!
//! Platform tools are run with piped output; each line is handed to the
//! caller as it arrives and also kept for the deployment log.

use std::io::{self, BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::domain::entities::LogLine;

/// Exit status and captured output of a finished command
#[derive(Debug, Clone)]
pub struct CapturedRun {
    pub success: bool,
    pub code: Option<i32>,
    pub log: Vec<LogLine>,
}

impl CapturedRun {
    /// `exit code N`, or `a signal` when the process was killed
    pub fn describe_exit(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "a signal".to_string(),
        }
    }

    /// Captured stdout lines joined with newlines
    pub fn stdout(&self) -> String {
        self.log
            .iter()
            .filter(|l| l.stream == "stdout")
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Last stderr line, falling back to the last line of any stream
    pub fn last_error_line(&self) -> Option<&str> {
        self.log
            .iter()
            .rev()
            .find(|l| l.stream == "stderr" && !l.text.trim().is_empty())
            .or_else(|| self.log.iter().rev().find(|l| !l.text.trim().is_empty()))
            .map(|l| l.text.trim())
    }
}

/// Run `cmd` to completion, streaming stdout and stderr lines to `on_line`.
///
/// Stdin is closed so tools that prompt fail instead of hanging.
pub fn run_streaming(
    cmd: &mut Command,
    on_line: &mut dyn FnMut(&LogLine),
) -> io::Result<CapturedRun> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let (tx, rx) = mpsc::channel();
    let mut readers = Vec::with_capacity(2);
    if let Some(out) = child.stdout.take() {
        readers.push(forward(out, |text| LogLine::stdout(text), tx.clone()));
    }
    if let Some(err) = child.stderr.take() {
        readers.push(forward(err, |text| LogLine::stderr(text), tx.clone()));
    }
    drop(tx);

    let mut log = Vec::new();
    for line in rx {
        on_line(&line);
        log.push(line);
    }
    for reader in readers {
        let _ = reader.join();
    }

    let status = child.wait()?;
    Ok(CapturedRun {
        success: status.success(),
        code: status.code(),
        log,
    })
}

/// Run `cmd` to completion, keeping its output without streaming
pub fn run_captured(cmd: &mut Command) -> io::Result<CapturedRun> {
    run_streaming(cmd, &mut |_| {})
}

fn forward<R: Read + Send + 'static>(
    reader: R,
    make: fn(String) -> LogLine,
    tx: Sender<LogLine>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for line in BufReader::new(reader).lines().map_while(Result::ok) {
            if tx.send(make(line)).is_err() {
                break;
            }
        }
    })
}
