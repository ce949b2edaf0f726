// src/gui.rs
use std::io::Read;
use std::time::{Duration, Instant};
use eframe::egui;
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints};
use crate::drivers::{Channel, LineReader, TelemetryFrame, TelemetryPipeline, TickOutcome, PANELS};
use crate::types::{SourceMode, StreamState};
pub type ScopePipeline = TelemetryPipeline<LineReader<Box<dyn Read>>>;
// tab10 配色：蓝 / 橙 / 绿
const LINE_COLORS: [Color32; 3] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
];
const MAX_LOG_LINES: usize = 8;
pub struct ImuScopeApp {
    // 数据流
    pipeline: ScopePipeline,
    source: SourceMode,
    tick_interval: Duration,
    last_tick: Option<Instant>,
    // 界面状态
    paused: bool,
    announced_exhausted: bool,
    log_messages: Vec<String>,
}
impl ImuScopeApp {
    pub fn new(pipeline: ScopePipeline, source: SourceMode, tick_interval: Duration) -> Self {
        let mut app = Self {
            pipeline,
            tick_interval,
            last_tick: None,
            paused: false,
            announced_exhausted: false,
            log_messages: Vec::new(),
            source,
        };
        app.log(&format!("Listening on {}", app.source));
        app
    }
    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > MAX_LOG_LINES {
            self.log_messages.remove(0);
        }
    }
    fn state(&self) -> StreamState {
        if self.pipeline.is_exhausted() {
            StreamState::Frozen
        } else if self.paused {
            StreamState::Paused
        } else {
            StreamState::Streaming
        }
    }
    /// Runs at most one tick per interval (the first one immediately);
    /// returns how long until the next one.
    fn drive_pipeline(&mut self) -> Duration {
        if self.paused {
            return self.tick_interval;
        }
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.tick_interval {
                return self.tick_interval - elapsed;
            }
        }
        self.last_tick = Some(Instant::now());
        match self.pipeline.tick() {
            TickOutcome::Updated | TickOutcome::Idle => {}
            TickOutcome::Rejected(err) => self.log(&format!("Rejected record: {err}")),
            TickOutcome::Exhausted => {
                if !self.announced_exhausted {
                    self.announced_exhausted = true;
                    self.log("Source closed, display frozen.");
                }
            }
        }
        self.tick_interval
    }
    fn show_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("status").min_width(220.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("IMU Scope");
            ui.label(self.source.to_string());
            ui.separator();
            let state = self.state();
            let state_col = match state {
                StreamState::Streaming => Color32::GREEN,
                StreamState::Paused => Color32::YELLOW,
                StreamState::Frozen => Color32::RED,
            };
            ui.label(egui::RichText::new(state.label()).strong().color(state_col));
            let stats = self.pipeline.stats();
            let buffer = self.pipeline.buffer();
            egui::Grid::new("stats").num_columns(2).show(ui, |ui| {
                ui.label("Ticks");
                ui.monospace(stats.ticks.to_string());
                ui.end_row();
                ui.label("Samples");
                ui.monospace(stats.samples.to_string());
                ui.end_row();
                ui.label("Rejected");
                ui.monospace(stats.rejected.to_string());
                ui.end_row();
                ui.label("Skipped lines");
                ui.monospace(stats.skipped_lines.to_string());
                ui.end_row();
                ui.label("History");
                ui.monospace(format!("{}/{}", buffer.len(), buffer.capacity()));
                ui.end_row();
            });
            ui.add_space(6.0);
            if buffer.is_empty() {
                ui.label(egui::RichText::new("Waiting for data...").italics());
            } else {
                // 最新一帧的数值
                egui::Grid::new("latest").num_columns(2).show(ui, |ui| {
                    for channel in Channel::ALL {
                        ui.label(channel.label());
                        let value = buffer.channel(channel).latest().unwrap_or_default();
                        ui.monospace(format!("{value:>9.3}"));
                        ui.end_row();
                    }
                });
            }
            ui.add_space(10.0);
            if state != StreamState::Frozen {
                let pause_txt = if self.paused { "▶ RESUME" } else { "⏸ PAUSE" };
                if ui.button(pause_txt).clicked() {
                    self.paused = !self.paused;
                    let msg = if self.paused { "Paused." } else { "Resumed." };
                    self.log(msg);
                }
            }
            if ui.button("🔄 RESET VIEW").clicked() {
                self.pipeline.reset_view();
                self.log("View reset.");
            }
            ui.add_space(10.0);
            ui.separator();
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
        });
    }
    fn show_panels(&self, ui: &mut egui::Ui, frame: &TelemetryFrame) {
        // 四个面板平分高度，标题行预留空间
        let plot_height = (ui.available_height() / PANELS.len() as f32 - 28.0).max(80.0);
        for panel in &PANELS {
            ui.strong(panel.title);
            let bounds = panel.bounds(frame);
            let mut plot = Plot::new(panel.id)
                .height(plot_height)
                .y_axis_label(panel.y_label);
            if let Some(x_label) = panel.x_label {
                plot = plot.x_axis_label(x_label);
            }
            plot
                .legend(Legend::default().position(Corner::RightTop))
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [bounds.x.0, bounds.y.0],
                        [bounds.x.1, bounds.y.1],
                    ));
                    for (i, &channel) in panel.channels.iter().enumerate() {
                        let color = LINE_COLORS[i % LINE_COLORS.len()];
                        plot_ui.line(
                            Line::new(PlotPoints::new(frame.points(channel)))
                                .name(channel.label())
                                .color(color),
                        );
                    }
                });
        }
    }
}
impl eframe::App for ImuScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 固定节拍拉取一条记录
        let until_next = self.drive_pipeline();
        // 2. UI 绘制
        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(10, 10, 15);
        ctx.set_visuals(visuals);
        self.show_side_panel(ctx);
        let frame = self.pipeline.latest_frame();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_panels(ui, &frame);
        });
        if self.state() == StreamState::Streaming {
            ctx.request_repaint_after(until_next);
        }
    }
}
