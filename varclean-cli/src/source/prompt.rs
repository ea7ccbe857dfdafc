use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

use color_eyre::Result;

use super::DirectorySource;

/// Plain text prompt: `Enter directory path [<initial>]: `
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptSource<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> DirectorySource for PromptSource<R, W> {
    fn pick(&mut self, initial: &Path) -> Result<Option<PathBuf>> {
        write!(self.output, "Enter directory path [{}]: ", initial.display())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(initial.to_path_buf()))
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}
