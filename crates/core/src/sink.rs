//! Output adapters for finished reports.
//!
//! Formatting never touches I/O; these writers take a report string and put
//! it somewhere. Each writer only uses the destination it was built with.

use crate::Result;
use std::fs::{self, File};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

/// A destination for a formatted report.
pub trait ReportSink {
    /// Emit the report.
    fn write_report(&mut self, report: &str) -> Result<()>;
}

/// Writes reports to a stream, each followed by a newline.
#[derive(Debug)]
pub struct ConsoleWriter<W: Write = Stdout> {
    out: W,
}

impl ConsoleWriter<Stdout> {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleWriter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleWriter<W> {
    /// Write to an arbitrary stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleWriter<W> {
    fn write_report(&mut self, report: &str) -> Result<()> {
        writeln!(self.out, "{}", report)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a report to a file, replacing any previous contents.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a writer for the given output path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileWriter {
    fn write_report(&mut self, report: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.path)?;
        file.write_all(report.as_bytes())?;
        log::debug!("Wrote {} bytes to {}", report.len(), self.path.display());

        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn write_report(&mut self, report: &str) -> Result<()> {
        (**self).write_report(report)
    }
}

/// Fans one report out to several sinks, in order.
pub struct Tee<'a> {
    sinks: Vec<&'a mut dyn ReportSink>,
}

impl<'a> Tee<'a> {
    /// Create an empty fan-out.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink.
    pub fn with(mut self, sink: &'a mut dyn ReportSink) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Default for Tee<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for Tee<'_> {
    fn write_report(&mut self, report: &str) -> Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.write_report(report)?;
        }
        Ok(())
    }
}
