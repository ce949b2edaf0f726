use crate::drivers::{Channel, TelemetryFrame};
/// Relative padding added around the data when fitting axes.
const FIT_MARGIN: f64 = 0.05;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}
/// Static layout of one chart panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelLayout {
    pub id: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
    pub x_label: Option<&'static str>,
    pub initial: AxisBounds,
    pub channels: &'static [Channel],
}
const INITIAL_X: (f64, f64) = (0.0, 100.0);
/// The four stacked panels, top to bottom.
pub const PANELS: [PanelLayout; 4] = [
    PanelLayout {
        id: "accel_plot",
        title: "Accelerometer (g)",
        y_label: "g",
        x_label: None,
        initial: AxisBounds {
            x: INITIAL_X,
            y: (-2.0, 2.0),
        },
        channels: &[Channel::AccelX, Channel::AccelY, Channel::AccelZ],
    },
    PanelLayout {
        id: "gyro_plot",
        title: "Gyroscope (°/s)",
        y_label: "°/s",
        x_label: None,
        initial: AxisBounds {
            x: INITIAL_X,
            y: (-250.0, 250.0),
        },
        channels: &[Channel::GyroX, Channel::GyroY, Channel::GyroZ],
    },
    PanelLayout {
        id: "orientation_plot",
        title: "Orientation (degrees)",
        y_label: "Degrees",
        x_label: None,
        initial: AxisBounds {
            x: INITIAL_X,
            y: (-180.0, 180.0),
        },
        channels: &[Channel::Roll, Channel::Pitch],
    },
    PanelLayout {
        id: "motion_plot",
        title: "Motion Detection",
        y_label: "Motion",
        x_label: Some("Samples"),
        initial: AxisBounds {
            x: INITIAL_X,
            y: (-0.1, 1.1),
        },
        channels: &[Channel::Motion],
    },
];
impl PanelLayout {
    /// Axis bounds for this tick: the initial ranges until data exists, then
    /// a fit around the visible data.
    pub fn bounds(&self, frame: &TelemetryFrame) -> AxisBounds {
        if frame.is_empty() {
            return self.initial;
        }
        let y_values = self
            .channels
            .iter()
            .flat_map(|&channel| frame.channel(channel).iter().copied());
        match (span(frame.time.iter().copied()), span(y_values)) {
            (Some(x), Some(y)) => AxisBounds {
                x: pad(x),
                y: pad(y),
            },
            _ => self.initial,
        }
    }
}
fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    let width = hi - lo;
    if width <= f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let margin = width * FIT_MARGIN;
    (lo - margin, hi + margin)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{Sample, TelemetryBuffer};
    fn frame_of(samples: &[Sample]) -> TelemetryFrame {
        let mut buffer = TelemetryBuffer::with_capacity(100).unwrap();
        for (i, s) in samples.iter().enumerate() {
            buffer.push(i as u64, s);
        }
        buffer.snapshot()
    }
    fn still(z: f64, roll: f64) -> Sample {
        Sample {
            accel: [0.0, 0.0, z],
            gyro: [0.0; 3],
            orientation: [roll, 0.0],
            motion_detected: false,
        }
    }
    #[test]
    fn every_channel_is_plotted_exactly_once() {
        let mut seen: Vec<Channel> = PANELS.iter().flat_map(|p| p.channels.iter().copied()).collect();
        seen.dedup();
        assert_eq!(seen, Channel::ALL.to_vec());
    }
    #[test]
    fn empty_frame_uses_initial_ranges() {
        let frame = TelemetryFrame::default();
        assert_eq!(PANELS[0].bounds(&frame).y, (-2.0, 2.0));
        assert_eq!(PANELS[1].bounds(&frame).y, (-250.0, 250.0));
        assert_eq!(PANELS[2].bounds(&frame).y, (-180.0, 180.0));
        assert_eq!(PANELS[3].bounds(&frame).y, (-0.1, 1.1));
        assert_eq!(PANELS[3].bounds(&frame).x, (0.0, 100.0));
    }
    #[test]
    fn bounds_fit_visible_data_with_margin() {
        let frame = frame_of(&[still(1.0, -10.0), still(1.0, 30.0)]);
        let orientation = PANELS[2].bounds(&frame);
        // Roll spans -10..30 and pitch is 0, so the span is 40 and the margin 2.
        assert_eq!(orientation.y, (-12.0, 32.0));
        assert_eq!(orientation.x, (-0.05, 1.05));
    }
    #[test]
    fn flat_series_gets_a_visible_span() {
        let frame = frame_of(&[still(0.0, 0.0)]);
        let motion = PANELS[3].bounds(&frame);
        assert_eq!(motion.y, (-0.5, 0.5));
        assert_eq!(motion.x, (-0.5, 0.5));
    }
}
