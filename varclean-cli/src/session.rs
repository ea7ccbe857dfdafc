use std::io::{BufRead, Write};
use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use varclean_core::{DeleteReport, Mode, ScanResult, delete_outdated, format_size, scan_directory};

/// Flags that shorten the interactive flow
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Mode given up front instead of prompting
    pub mode: Option<String>,
    /// Delete without asking
    pub assume_yes: bool,
    /// Skip the final "Press Enter" pause
    pub no_wait: bool,
    /// Print each outdated path in the report
    pub list_files: bool,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Unrecognised mode, nothing scanned
    Aborted,
    /// VIEW mode report, or UPDATE with nothing to delete
    Reported(ScanResult),
    /// UPDATE mode, user declined
    Cancelled(ScanResult),
    /// UPDATE mode, deletion attempted
    Cleaned {
        scan: ScanResult,
        report: DeleteReport,
    },
}

/// The interactive report/delete flow over any reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn run(&mut self, dir: &Path) -> Result<SessionOutcome> {
        let answer = match self.options.mode.clone() {
            Some(mode) => mode,
            None => self
                .prompt("Choose mode (VIEW/UPDATE): ")?
                .unwrap_or_default(),
        };
        let mode: Mode = match answer.parse() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(self.output, "Invalid mode. Exiting.")?;
                return Ok(SessionOutcome::Aborted);
            }
        };

        let scan = scan_directory(dir)
            .wrap_err_with(|| format!("Failed to scan {}", dir.display()))?;
        self.print_report(&scan)?;

        let outcome = if mode == Mode::Update && !scan.is_empty() {
            if self.confirm_delete()? {
                let report = delete_outdated(&scan.outdated);
                self.print_delete_report(&report)?;
                SessionOutcome::Cleaned { scan, report }
            } else {
                writeln!(self.output, "Deletion cancelled.")?;
                SessionOutcome::Cancelled(scan)
            }
        } else {
            SessionOutcome::Reported(scan)
        };

        if !self.options.no_wait {
            self.prompt("Press Enter to exit...")?;
        }

        Ok(outcome)
    }

    fn print_report(&mut self, scan: &ScanResult) -> Result<()> {
        writeln!(self.output, "Outdated files: {}", scan.count())?;
        if self.options.list_files {
            for file in &scan.outdated {
                writeln!(
                    self.output,
                    "  {} ({})",
                    file.path.display(),
                    format_size(file.size_bytes)
                )?;
            }
        }
        writeln!(self.output, "Disk space used: {}", format_size(scan.total_bytes))?;
        Ok(())
    }

    fn confirm_delete(&mut self) -> Result<bool> {
        if self.options.assume_yes {
            return Ok(true);
        }
        let answer = self.prompt("OK to delete? [y/N]: ")?.unwrap_or_default();
        Ok(answer.starts_with(['y', 'Y']))
    }

    fn print_delete_report(&mut self, report: &DeleteReport) -> Result<()> {
        for failure in &report.failures {
            writeln!(
                self.output,
                "Failed to delete {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }
        writeln!(self.output, "Deleted {} files.", report.deleted_count())?;
        Ok(())
    }

    /// Print `text` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
