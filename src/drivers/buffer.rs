use std::collections::VecDeque;
use crate::drivers::{Sample, TelemetryError};
/// The nine plotted scalar series derived from each sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
    Roll,
    Pitch,
    Motion,
}
impl Channel {
    pub const ALL: [Channel; 9] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::GyroX,
        Channel::GyroY,
        Channel::GyroZ,
        Channel::Roll,
        Channel::Pitch,
        Channel::Motion,
    ];
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn label(self) -> &'static str {
        match self {
            Channel::AccelX => "Accel X",
            Channel::AccelY => "Accel Y",
            Channel::AccelZ => "Accel Z",
            Channel::GyroX => "Gyro X",
            Channel::GyroY => "Gyro Y",
            Channel::GyroZ => "Gyro Z",
            Channel::Roll => "Roll",
            Channel::Pitch => "Pitch",
            Channel::Motion => "Motion Detected",
        }
    }
    pub fn value(self, sample: &Sample) -> f64 {
        match self {
            Channel::AccelX => sample.accel[0],
            Channel::AccelY => sample.accel[1],
            Channel::AccelZ => sample.accel[2],
            Channel::GyroX => sample.gyro[0],
            Channel::GyroY => sample.gyro[1],
            Channel::GyroZ => sample.gyro[2],
            Channel::Roll => sample.roll(),
            Channel::Pitch => sample.pitch(),
            Channel::Motion => {
                if sample.motion_detected {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
/// Fixed-capacity FIFO of scalars; a push at capacity evicts the oldest.
#[derive(Clone, Debug)]
pub struct ChannelBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}
impl ChannelBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    #[cfg(test)]
    pub fn first(&self) -> Option<f64> {
        self.values.front().copied()
    }
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
/// Copy of the buffered history handed to the chart for one redraw.
#[derive(Clone, Debug, Default)]
pub struct TelemetryFrame {
    pub time: Vec<f64>,
    pub series: Vec<Vec<f64>>, // channel -> values, aligned with `time`
}
impl TelemetryFrame {
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
    pub fn channel(&self, channel: Channel) -> &[f64] {
        self.series
            .get(channel.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
    /// `[x, y]` pairs ready for a plot line.
    pub fn points(&self, channel: Channel) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.channel(channel))
            .map(|(&t, &v)| [t, v])
            .collect()
    }
}
/// The time index plus one buffer per [`Channel`], kept in lockstep.
pub struct TelemetryBuffer {
    time: ChannelBuffer,
    per_channel: Vec<ChannelBuffer>, // indexed by Channel::index
    capacity: usize,
}
impl TelemetryBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self, TelemetryError> {
        if capacity == 0 {
            return Err(TelemetryError::InvalidCapacity);
        }
        let per_channel = Channel::ALL
            .iter()
            .map(|_| ChannelBuffer::new(capacity))
            .collect();
        Ok(Self {
            time: ChannelBuffer::new(capacity),
            per_channel,
            capacity,
        })
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.time.len()
    }
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
    /// Appends exactly one value to every buffer.
    pub fn push(&mut self, frame_index: u64, sample: &Sample) {
        self.time.push(frame_index as f64);
        for channel in Channel::ALL {
            self.per_channel[channel.index()].push(channel.value(sample));
        }
    }
    #[cfg(test)]
    pub fn time(&self) -> &ChannelBuffer {
        &self.time
    }
    pub fn channel(&self, channel: Channel) -> &ChannelBuffer {
        &self.per_channel[channel.index()]
    }
    pub fn clear(&mut self) {
        self.time.clear();
        for buffer in &mut self.per_channel {
            buffer.clear();
        }
    }
    pub fn snapshot(&self) -> TelemetryFrame {
        TelemetryFrame {
            time: self.time.iter().collect(),
            series: self
                .per_channel
                .iter()
                .map(|buffer| buffer.iter().collect())
                .collect(),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn sample(seed: f64, motion: bool) -> Sample {
        Sample {
            accel: [seed, seed + 0.1, seed + 0.2],
            gyro: [seed * 10.0, seed * 20.0, seed * 30.0],
            orientation: [seed + 1.0, seed - 1.0],
            motion_detected: motion,
        }
    }
    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            TelemetryBuffer::with_capacity(0),
            Err(TelemetryError::InvalidCapacity)
        ));
    }
    #[test]
    fn channel_buffer_evicts_oldest_first() {
        let mut buffer = ChannelBuffer::new(3);
        for v in 0..5 {
            buffer.push(v as f64);
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(buffer.first(), Some(2.0));
        assert_eq!(buffer.latest(), Some(4.0));
    }
    #[test]
    fn push_appends_one_value_per_buffer() {
        let mut buffer = TelemetryBuffer::with_capacity(100).unwrap();
        buffer.push(7, &sample(0.5, true));
        assert_eq!(buffer.time().len(), 1);
        assert_eq!(buffer.time().latest(), Some(7.0));
        for channel in Channel::ALL {
            assert_eq!(buffer.channel(channel).len(), 1, "{channel:?}");
        }
        assert_eq!(buffer.channel(Channel::AccelY).latest(), Some(0.6));
        assert_eq!(buffer.channel(Channel::Pitch).latest(), Some(-0.5));
        assert_eq!(buffer.channel(Channel::Motion).latest(), Some(1.0));
    }
    #[test]
    fn buffers_stay_aligned_past_capacity() {
        let mut buffer = TelemetryBuffer::with_capacity(4).unwrap();
        for i in 0..10u64 {
            buffer.push(i, &sample(i as f64, i % 2 == 0));
        }
        let frame = buffer.snapshot();
        assert_eq!(frame.time, vec![6.0, 7.0, 8.0, 9.0]);
        for channel in Channel::ALL {
            assert_eq!(frame.channel(channel).len(), 4);
        }
        assert_eq!(frame.channel(Channel::AccelX), &[6.0, 7.0, 8.0, 9.0]);
        assert_eq!(frame.channel(Channel::Motion), &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(frame.points(Channel::Roll)[0], [6.0, 7.0]);
    }
    #[test]
    fn clear_empties_every_buffer() {
        let mut buffer = TelemetryBuffer::with_capacity(4).unwrap();
        buffer.push(0, &sample(1.0, false));
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.snapshot().is_empty());
        for channel in Channel::ALL {
            assert!(buffer.channel(channel).is_empty());
        }
    }
}
