// src/drivers/mod.rs
pub mod buffer;
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod reader;
pub mod serial;
pub mod simulator;
pub mod source;
pub use buffer::{Channel, TelemetryBuffer, TelemetryFrame};
pub use error::TelemetryError;
pub use pipeline::{TelemetryPipeline, TickOutcome};
pub use plot::PANELS;
pub use reader::LineReader;
pub use serial::{available_port_names, open_port, SerialSettings};
pub use simulator::SimulatedPort;
pub use source::{Sample, SampleSource};
