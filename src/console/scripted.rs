use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use super::{InputSource, OutputSink};

/// Console that replays a fixed script of input lines and records every
/// write. Reading past the end of the script behaves like end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    partial: String,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            partial: String::new(),
            clears: 0,
        }
    }

    /// Times the screen was cleared. The transcript itself is kept.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Completed output lines, in order. A pending prompt written with
    /// `write` is joined to the line that follows it.
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// Whole transcript as one string.
    pub fn transcript(&self) -> String {
        let mut all = self.output.join("\n");
        if !self.partial.is_empty() {
            if !all.is_empty() {
                all.push('\n');
            }
            all.push_str(&self.partial);
        }
        all
    }
}

impl InputSource for ScriptedConsole {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let line = self.input.pop_front();
        // An answered prompt ends its line, as echoed input would on a terminal.
        if line.is_some() && !self.partial.is_empty() {
            let prompt = std::mem::take(&mut self.partial);
            self.output.push(prompt);
        }
        Ok(line)
    }
}

impl OutputSink for ScriptedConsole {
    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.partial.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        let mut line = std::mem::take(&mut self.partial);
        line.push_str(text);
        self.output.extend(line.split('\n').map(ToString::to_string));
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
