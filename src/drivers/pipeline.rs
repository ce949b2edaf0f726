use log::{info, warn};
use crate::drivers::error::TelemetryError;
use crate::drivers::source::SampleSource;
use crate::drivers::{TelemetryBuffer, TelemetryFrame};
/// What a single tick did to the buffers.
#[derive(Debug)]
pub enum TickOutcome {
    /// One sample was appended to every buffer.
    Updated,
    /// Nothing arrived within the read timeout.
    Idle,
    /// A decoded record failed validation; buffers untouched.
    Rejected(TelemetryError),
    /// The source has ended (or failed); no further pulls are made.
    Exhausted,
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub ticks: u64,
    pub samples: u64,
    pub rejected: u64,
    pub skipped_lines: u64,
}
/// Owns the source and the ring buffers; the GUI calls [`tick`](Self::tick)
/// on a fixed cadence and draws [`latest_frame`](Self::latest_frame).
pub struct TelemetryPipeline<S: SampleSource> {
    source: S,
    buffer: TelemetryBuffer,
    frame_index: u64,
    exhausted: bool,
    stats: PipelineStats,
}
impl<S: SampleSource> TelemetryPipeline<S> {
    pub fn new(source: S, history_len: usize) -> Result<Self, TelemetryError> {
        Ok(Self {
            source,
            buffer: TelemetryBuffer::with_capacity(history_len)?,
            frame_index: 0,
            exhausted: false,
            stats: PipelineStats::default(),
        })
    }
    /// Pulls at most one sample. The frame index advances on every tick,
    /// whether or not data arrived.
    pub fn tick(&mut self) -> TickOutcome {
        let frame = self.frame_index;
        self.frame_index += 1;
        self.stats.ticks += 1;
        if self.exhausted {
            return TickOutcome::Exhausted;
        }
        let outcome = match self.source.next_sample() {
            Ok(Some(sample)) => {
                self.buffer.push(frame, &sample);
                self.stats.samples += 1;
                TickOutcome::Updated
            }
            Ok(None) => TickOutcome::Idle,
            Err(err) if err.is_recoverable() => {
                self.stats.rejected += 1;
                warn!("rejected telemetry record: {err}");
                TickOutcome::Rejected(err)
            }
            Err(TelemetryError::SourceExhausted) => {
                info!("telemetry source exhausted after {} samples", self.stats.samples);
                self.exhausted = true;
                TickOutcome::Exhausted
            }
            Err(err) => {
                warn!("telemetry source failed, freezing display: {err}");
                self.exhausted = true;
                TickOutcome::Exhausted
            }
        };
        self.stats.skipped_lines = self.source.skipped_lines();
        outcome
    }
    pub fn latest_frame(&self) -> TelemetryFrame {
        self.buffer.snapshot()
    }
    pub fn buffer(&self) -> &TelemetryBuffer {
        &self.buffer
    }
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
    /// Drops the buffered history; the frame index keeps counting.
    pub fn reset_view(&mut self) {
        self.buffer.clear();
    }
}
