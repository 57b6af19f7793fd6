use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use super::{InputSource, OutputSink};

/// Console bound to the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdConsole {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.stdin.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail move parsing like any typo.
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl OutputSink for StdConsole {
    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        write!(self.stdout, "{}", text)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.stdout, "{}", text)?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        // Erase the display and home the cursor.
        write!(self.stdout, "\x1b[2J\x1b[H")?;
        self.stdout.flush()?;
        Ok(())
    }
}
