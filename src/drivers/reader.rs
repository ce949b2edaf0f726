use std::borrow::Cow;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use log::trace;
use serde_json::Value;
use crate::drivers::{Sample, SampleSource, TelemetryError};
/// Longest line kept in memory; anything longer is dropped up to its newline.
const MAX_LINE_LEN: usize = 64 * 1024;
/// Turns a byte stream of newline-delimited JSON into samples.
///
/// Each [`SampleSource::next_sample`] call reads lines until one decodes
/// into a record, the underlying read times out, or the stream ends.
/// Bytes of a line cut short by a timeout are kept and completed on the next
/// call, so a slow sender never loses records.
pub struct LineReader<R: Read> {
    inner: BufReader<R>,
    pending: Vec<u8>,
    discarding: bool,
    skipped: u64,
}
impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            pending: Vec::with_capacity(256),
            discarding: false,
            skipped: 0,
        }
    }
    /// `Ok(None)` on timeout.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, TelemetryError> {
        loop {
            let limit = (MAX_LINE_LEN + 1 - self.pending.len()) as u64;
            match (&mut self.inner).take(limit).read_until(b'\n', &mut self.pending) {
                Ok(0) if self.pending.is_empty() => return Err(TelemetryError::SourceExhausted),
                Ok(_) => {
                    let terminated = self.pending.last() == Some(&b'\n');
                    if !terminated && self.pending.len() > MAX_LINE_LEN {
                        if !self.discarding {
                            self.skipped += 1;
                            trace!("dropping line longer than {MAX_LINE_LEN} bytes");
                        }
                        self.discarding = true;
                        self.pending.clear();
                        continue;
                    }
                    // Either a full line, or the tail of the stream without a terminator.
                    let line = std::mem::take(&mut self.pending);
                    if std::mem::take(&mut self.discarding) {
                        continue;
                    }
                    return Ok(Some(line));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                    return Ok(None)
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
/// Lossy text decoding; undecodable bytes are dropped rather than kept as
/// replacement characters so line noise in front of a record is harmless.
fn decode_text(raw: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(raw) {
        Cow::Owned(text) => Cow::Owned(text.replace(char::REPLACEMENT_CHARACTER, "")),
        borrowed => borrowed,
    }
}
impl<R: Read> SampleSource for LineReader<R> {
    fn next_sample(&mut self) -> Result<Option<Sample>, TelemetryError> {
        loop {
            let Some(raw) = self.read_line()? else {
                return Ok(None);
            };
            let text = decode_text(&raw);
            let line = text.trim();
            if line.is_empty() {
                self.skipped += 1;
                continue;
            }
            let record: Value = match serde_json::from_str(line) {
                Ok(record) => record,
                Err(err) => {
                    self.skipped += 1;
                    trace!("skipping undecodable line ({err}): {line}");
                    continue;
                }
            };
            return Sample::from_record(&record).map(Some);
        }
    }
    fn skipped_lines(&self) -> u64 {
        self.skipped
    }
}
