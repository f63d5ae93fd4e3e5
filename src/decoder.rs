use crate::{errors::PipeError, util::hex_decode};
use std::io::{self, BufRead, Write};

const DIAGNOSTIC_PREFIX: &str = "error:";

/// Outcome of a single read/decode/write iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Decoded(usize),
    Skipped,
    EndOfStream,
}

/// Counters collected over one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub decoded: usize,
    pub skipped: usize,
    pub bytes: usize,
}

/// Removes one trailing `\n`, then one trailing `\r`.
pub fn strip_line_separator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Reads hex lines from `input` and writes the decoded bytes to `output`,
/// flushing after every line. Odd-length lines are reported on `diagnostics`
/// and skipped.
pub struct LineDecoder<R, W, D> {
    input: R,
    output: W,
    diagnostics: D,
    line: Vec<u8>,
    summary: Summary,
}

impl<R: BufRead, W: Write, D: Write> LineDecoder<R, W, D> {
    pub fn new(input: R, output: W, diagnostics: D) -> Self {
        Self {
            input,
            output,
            diagnostics,
            line: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn run(mut self) -> Result<Summary, PipeError> {
        loop {
            match self.step()? {
                Step::Decoded(bytes) => {
                    self.summary.decoded += 1;
                    self.summary.bytes += bytes;
                }
                Step::Skipped => self.summary.skipped += 1,
                Step::EndOfStream => return Ok(self.summary),
            }
        }
    }

    pub fn step(&mut self) -> Result<Step, PipeError> {
        self.line.clear();
        let read = self.input.read_until(b'\n', &mut self.line)?;
        if read == 0 {
            log::trace!("End of stream after {} lines", self.summary.lines);
            return Ok(Step::EndOfStream);
        }

        self.summary.lines += 1;
        let line_no = self.summary.lines;
        let hex = strip_line_separator(&self.line);
        log::trace!("Read line {line_no} ({} bytes)", hex.len());

        if hex.len() % 2 != 0 {
            let len = hex.len();
            log::warn!("Skipping line {line_no}, odd length {len}");

            // Best effort, a failing diagnostics sink must not stop the filter
            if let Err(why) = self.report_odd_length(line_no, len) {
                log::warn!("Could not write diagnostic for line {line_no}, {why}");
            }
            return Ok(Step::Skipped);
        }

        let bytes = hex_decode(hex).map_err(|source| PipeError::Decode { line: line_no, source })?;
        self.output.write_all(&bytes)?;
        self.output.flush()?;
        log::debug!("Decoded line {line_no} into {} bytes", bytes.len());

        Ok(Step::Decoded(bytes.len()))
    }

    fn report_odd_length(&mut self, line_no: usize, len: usize) -> io::Result<()> {
        writeln!(self.diagnostics, "{DIAGNOSTIC_PREFIX} line {line_no}: odd length {len}, skipping")?;
        self.diagnostics.flush()
    }
}
