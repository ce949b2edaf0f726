// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod drivers;
mod gui;
mod types;
use std::io::Read;
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use log::{error, info};
use config::ScopeConfig;
use drivers::{available_port_names, open_port, LineReader, SimulatedPort, TelemetryPipeline};
use types::SourceMode;
// 打开数据源：串口或内置模拟器
fn open_source(config: &ScopeConfig) -> Result<Box<dyn Read>> {
    match &config.source {
        SourceMode::Simulation => {
            info!("using simulated telemetry source");
            let dt = config.tick_interval.as_secs_f64();
            Ok(Box::new(SimulatedPort::new(dt)))
        }
        SourceMode::Serial(settings) => {
            let port = open_port(settings).with_context(|| {
                let ports = available_port_names();
                let available = if ports.is_empty() {
                    "none".to_owned()
                } else {
                    ports.join(", ")
                };
                format!(
                    "failed to open serial port {} (available: {available})",
                    settings.port_name
                )
            })?;
            Ok(Box::new(port))
        }
    }
}
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    let config = ScopeConfig::from_env();
    let source = open_source(&config).map_err(|err| {
        error!("{err:#}");
        err
    })?;
    let pipeline = TelemetryPipeline::new(LineReader::new(source), config.history_len)?;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(config::WINDOW_SIZE)
        .with_min_inner_size(config::WINDOW_MIN_SIZE)
        .with_title("IMU Scope");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let source_mode = config.source.clone();
    let tick_interval = config.tick_interval;
    eframe::run_native(
        "IMU Scope",
        options,
        Box::new(move |_cc| Box::new(gui::ImuScopeApp::new(pipeline, source_mode, tick_interval))),
    )
    .map_err(|err| anyhow!("window error: {err}"))
}
