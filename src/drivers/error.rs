use thiserror::Error;
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("buffer capacity must be greater than zero")]
    InvalidCapacity,
    #[error("record is missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` has the wrong type: expected {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{field}` needs at least {expected} values, got {actual}")]
    FieldArity {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("telemetry source exhausted")]
    SourceExhausted,
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
impl TelemetryError {
    /// Schema violations only reject the offending record; everything else
    /// ends the stream.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TelemetryError::MissingField(_)
                | TelemetryError::FieldType { .. }
                | TelemetryError::FieldArity { .. }
        )
    }
}
