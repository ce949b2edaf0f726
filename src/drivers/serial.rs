use std::time::Duration;
use log::info;
use serialport::{DataBits, Parity, SerialPort, StopBits};
use crate::drivers::TelemetryError;
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerialSettings {
    pub port_name: String,
    pub baud_rate: u32,
    pub read_timeout: Duration,
}
/// Opens the port 8N1 with the configured read timeout. The returned handle
/// is the only owner of the device.
pub fn open_port(settings: &SerialSettings) -> Result<Box<dyn SerialPort>, TelemetryError> {
    let port = serialport::new(&settings.port_name, settings.baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(settings.read_timeout)
        .open()?;
    info!(
        "opened {} at {} baud (timeout {:?})",
        settings.port_name, settings.baud_rate, settings.read_timeout
    );
    Ok(port)
}
/// Names of the serial ports currently present, for diagnostics.
pub fn available_port_names() -> Vec<String> {
    serialport::available_ports()
        .map(|ports| ports.into_iter().map(|p| p.port_name).collect())
        .unwrap_or_default()
}
