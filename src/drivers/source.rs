#[cfg(test)]
use std::collections::VecDeque;
use serde::Serialize;
use serde_json::Value;
use crate::drivers::TelemetryError;
/// One decoded telemetry record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub accel: [f64; 3],
    pub gyro: [f64; 3],
    pub orientation: [f64; 2], // roll, pitch
    pub motion_detected: bool,
}
impl Sample {
    pub fn roll(&self) -> f64 {
        self.orientation[0]
    }
    pub fn pitch(&self) -> f64 {
        self.orientation[1]
    }
    /// Validates a decoded JSON object and extracts the fields the scope plots.
    ///
    /// Arrays may carry trailing values (e.g. a yaw angle after roll and
    /// pitch); those are ignored. Unknown keys are ignored too.
    pub fn from_record(record: &Value) -> Result<Self, TelemetryError> {
        let object = record.as_object().ok_or(TelemetryError::FieldType {
            field: "<record>",
            expected: "object",
        })?;
        let field = |name: &'static str| {
            object
                .get(name)
                .ok_or(TelemetryError::MissingField(name))
        };
        Ok(Self {
            accel: numbers::<3>(field("accel")?, "accel")?,
            gyro: numbers::<3>(field("gyro")?, "gyro")?,
            orientation: numbers::<2>(field("orientation")?, "orientation")?,
            motion_detected: flag(field("motion_detected")?, "motion_detected")?,
        })
    }
}
fn numbers<const N: usize>(value: &Value, field: &'static str) -> Result<[f64; N], TelemetryError> {
    let items = value.as_array().ok_or(TelemetryError::FieldType {
        field,
        expected: "array of numbers",
    })?;
    if items.len() < N {
        return Err(TelemetryError::FieldArity {
            field,
            expected: N,
            actual: items.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64().ok_or(TelemetryError::FieldType {
            field,
            expected: "array of numbers",
        })?;
    }
    Ok(out)
}
fn flag(value: &Value, field: &'static str) -> Result<bool, TelemetryError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        Value::Number(n) => Ok(n.as_f64().map_or(false, |v| v != 0.0)),
        _ => Err(TelemetryError::FieldType {
            field,
            expected: "boolean, number or null",
        }),
    }
}
/// Something that can be polled for the next sample once per tick.
///
/// `Ok(None)` means nothing arrived this time; `Err(SourceExhausted)` means
/// nothing ever will.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<Sample>, TelemetryError>;
    /// Lines dropped before they became records (empty or not JSON).
    fn skipped_lines(&self) -> u64 {
        0
    }
}
/// Scripted source for deterministic pipeline tests. `None` entries play
/// back as idle polls; once drained the source reports exhaustion.
#[cfg(test)]
pub struct ManualSource {
    queue: VecDeque<Option<Sample>>,
}
#[cfg(test)]
impl ManualSource {
    pub fn new(polls: impl IntoIterator<Item = Option<Sample>>) -> Self {
        Self {
            queue: polls.into_iter().collect(),
        }
    }
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self::new(samples.into_iter().map(Some))
    }
}
#[cfg(test)]
impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<Sample>, TelemetryError> {
        self.queue.pop_front().ok_or(TelemetryError::SourceExhausted)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[test]
    fn extracts_known_record() {
        let record = json!({
            "accel": [0.1, -0.2, 0.9],
            "gyro": [1.0, 2.0, 3.0],
            "orientation": [10.0, -5.0],
            "motion_detected": true
        });
        let sample = Sample::from_record(&record).unwrap();
        assert_eq!(sample.accel, [0.1, -0.2, 0.9]);
        assert_eq!(sample.gyro, [1.0, 2.0, 3.0]);
        assert_eq!(sample.roll(), 10.0);
        assert_eq!(sample.pitch(), -5.0);
        assert!(sample.motion_detected);
    }
    #[test]
    fn tolerates_trailing_values_and_unknown_keys() {
        let record = json!({
            "accel": [0, 0, 1, 99],
            "gyro": [0, 0, 0],
            "orientation": [1.5, 2.5, 180.0],
            "motion_detected": 0,
            "temperature": 21.3
        });
        let sample = Sample::from_record(&record).unwrap();
        assert_eq!(sample.accel, [0.0, 0.0, 1.0]);
        assert_eq!(sample.orientation, [1.5, 2.5]);
        assert!(!sample.motion_detected);
    }
    #[test]
    fn numeric_motion_flag_is_truthy() {
        let record = json!({
            "accel": [0, 0, 1],
            "gyro": [0, 0, 0],
            "orientation": [0, 0],
            "motion_detected": 1
        });
        assert!(Sample::from_record(&record).unwrap().motion_detected);
    }
    #[test]
    fn null_motion_flag_reads_as_still() {
        let record = json!({
            "accel": [0, 0, 1],
            "gyro": [0, 0, 0],
            "orientation": [0, 0],
            "motion_detected": null
        });
        assert!(!Sample::from_record(&record).unwrap().motion_detected);
    }
    #[test]
    fn rejects_missing_field() {
        let record = json!({ "accel": [0, 0, 1], "gyro": [0, 0, 0], "orientation": [0, 0] });
        let err = Sample::from_record(&record).unwrap_err();
        assert!(matches!(err, TelemetryError::MissingField("motion_detected")));
        assert!(err.is_recoverable());
    }
    #[test]
    fn rejects_short_array() {
        let record = json!({
            "accel": [0, 0],
            "gyro": [0, 0, 0],
            "orientation": [0, 0],
            "motion_detected": false
        });
        let err = Sample::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::FieldArity {
                field: "accel",
                expected: 3,
                actual: 2
            }
        ));
    }
    #[test]
    fn rejects_wrong_types() {
        let record = json!({
            "accel": [0, "x", 1],
            "gyro": [0, 0, 0],
            "orientation": [0, 0],
            "motion_detected": false
        });
        assert!(matches!(
            Sample::from_record(&record),
            Err(TelemetryError::FieldType { field: "accel", .. })
        ));
        let not_object = json!([1, 2, 3]);
        assert!(matches!(
            Sample::from_record(&not_object),
            Err(TelemetryError::FieldType { field: "<record>", .. })
        ));
        let bad_flag = json!({
            "accel": [0, 0, 1],
            "gyro": [0, 0, 0],
            "orientation": [0, 0],
            "motion_detected": "yes"
        });
        assert!(matches!(
            Sample::from_record(&bad_flag),
            Err(TelemetryError::FieldType { field: "motion_detected", .. })
        ));
    }
    #[test]
    fn manual_source_plays_back_then_exhausts() {
        let sample = Sample {
            accel: [0.0; 3],
            gyro: [0.0; 3],
            orientation: [0.0; 2],
            motion_detected: false,
        };
        let mut source = ManualSource::new(vec![Some(sample), None]);
        assert_eq!(source.next_sample().unwrap(), Some(sample));
        assert_eq!(source.next_sample().unwrap(), None);
        assert!(matches!(
            source.next_sample(),
            Err(TelemetryError::SourceExhausted)
        ));
    }
}
