// src/config.rs
use std::time::Duration;
use log::warn;
use crate::drivers::SerialSettings;
use crate::types::SourceMode;
/// Default device; edit here or override with `IMU_SCOPE_PORT`.
pub const SERIAL_PORT: &str = if cfg!(windows) { "COM21" } else { "/dev/ttyACM0" };
pub const BAUD_RATE: u32 = 115_200;
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Samples kept per channel.
pub const HISTORY_LEN: usize = 100;
/// Render loop cadence.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
/// Port name that selects the built-in simulator instead of a device.
pub const SIMULATED_PORT: &str = "sim";
pub const PORT_ENV: &str = "IMU_SCOPE_PORT";
pub const BAUD_ENV: &str = "IMU_SCOPE_BAUD";
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 1200.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 720.0];
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeConfig {
    pub source: SourceMode,
    pub history_len: usize,
    pub tick_interval: Duration,
}
impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            source: SourceMode::Serial(SerialSettings {
                port_name: SERIAL_PORT.to_owned(),
                baud_rate: BAUD_RATE,
                read_timeout: READ_TIMEOUT,
            }),
            history_len: HISTORY_LEN,
            tick_interval: TICK_INTERVAL,
        }
    }
}
impl ScopeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Applies the port/baud overrides on top of the compiled-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port_name = lookup(PORT_ENV)
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| SERIAL_PORT.to_owned());
        let baud_rate = match lookup(BAUD_ENV) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(baud) if baud > 0 => baud,
                _ => {
                    warn!("ignoring invalid {BAUD_ENV}={raw:?}, using {BAUD_RATE}");
                    BAUD_RATE
                }
            },
            None => BAUD_RATE,
        };
        let source = if port_name.eq_ignore_ascii_case(SIMULATED_PORT) {
            SourceMode::Simulation
        } else {
            SourceMode::Serial(SerialSettings {
                port_name,
                baud_rate,
                read_timeout: READ_TIMEOUT,
            })
        };
        Self {
            source,
            ..Self::default()
        }
    }
}
