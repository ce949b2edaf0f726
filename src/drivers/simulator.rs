use std::io::{self, Read};
use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::drivers::Sample;
/// Angular rate magnitude (°/s) above which the simulated device reports motion.
const MOTION_THRESHOLD_DPS: f64 = 30.0;
/// Every `SHAKE_PERIOD_S` the device is shaken for `SHAKE_DURATION_S`.
const SHAKE_PERIOD_S: f64 = 10.0;
const SHAKE_DURATION_S: f64 = 1.5;
/// Byte source that emits newline-delimited JSON telemetry like a real IMU
/// board: a slowly rocking device with gravity on Z and periodic shakes.
///
/// Time advances by `dt` per line, so playback speed follows the reader.
pub struct SimulatedPort {
    rng: StdRng,
    t: f64,
    dt: f64,
    line: Vec<u8>,
    cursor: usize,
}
impl SimulatedPort {
    pub fn new(dt: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), dt)
    }
    #[cfg(test)]
    pub fn seeded(seed: u64, dt: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), dt)
    }
    fn with_rng(rng: StdRng, dt: f64) -> Self {
        Self {
            rng,
            t: 0.0,
            dt,
            line: Vec::with_capacity(160),
            cursor: 0,
        }
    }
    fn step(&mut self) -> Sample {
        let t = self.t;
        self.t += self.dt;
        let roll = 25.0 * (0.6 * t).sin();
        let pitch = 15.0 * (0.4 * t + 1.0).sin();
        let mut gyro = [
            25.0 * 0.6 * (0.6 * t).cos(),
            15.0 * 0.4 * (0.4 * t + 1.0).cos(),
            self.rng.gen_range(-2.0..2.0),
        ];
        if t % SHAKE_PERIOD_S < SHAKE_DURATION_S {
            for axis in &mut gyro {
                *axis += self.rng.gen_range(-80.0..80.0);
            }
        }
        let (r, p) = (roll.to_radians(), pitch.to_radians());
        let mut accel = [-p.sin(), r.sin() * p.cos(), r.cos() * p.cos()];
        for axis in &mut accel {
            *axis += self.rng.gen_range(-0.02..0.02);
        }
        let rate = gyro.iter().map(|g| g * g).sum::<f64>().sqrt();
        Sample {
            accel,
            gyro,
            orientation: [roll, pitch],
            motion_detected: rate > MOTION_THRESHOLD_DPS,
        }
    }
    fn refill(&mut self) -> io::Result<()> {
        let sample = self.step();
        self.line.clear();
        serde_json::to_writer(&mut self.line, &sample)?;
        self.line.push(b'\n');
        self.cursor = 0;
        Ok(())
    }
}
impl Read for SimulatedPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.cursor >= self.line.len() {
            self.refill()?;
        }
        let n = (self.line.len() - self.cursor).min(buf.len());
        buf[..n].copy_from_slice(&self.line[self.cursor..self.cursor + n]);
        self.cursor += n;
        Ok(n)
    }
}
