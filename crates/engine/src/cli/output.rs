use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::analyze::Analysis;
use crate::cli::Report;

/// Writes results either as human readable lines or as JSON lines.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    /// Report an error which aborts the run.
    ///
    /// Normal output leaves this to the error returned from `main`, so only
    /// JSON output writes anything.
    pub fn failure(&mut self, error: &anyhow::Error) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => self.message(MessageKind::Error, format_args!("{error:#}")),
            OutputKind::Normal => Ok(()),
        }
    }

    pub fn answer(&mut self, analysis: &Analysis) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: analysis,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "part numbers: {}", analysis.part_numbers)?;
                writeln!(self.out, "gear ratios: {}", analysis.gear_ratios)?;
            }
        }

        Ok(())
    }

    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Report,
                    data: report,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{report}")?;
            }
        }

        Ok(())
    }

    /// Access the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message { output: m, kind },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Report,
    Answer,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
struct Message<T>
where
    T: fmt::Display,
{
    kind: MessageKind,
    #[serde(serialize_with = "crate::analyze::display")]
    output: T,
}
