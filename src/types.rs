// src/types.rs
use std::fmt;
use crate::drivers::SerialSettings;
// 数据来源
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceMode {
    Simulation,
    Serial(SerialSettings),
}
impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Simulation => write!(f, "Simulator"),
            SourceMode::Serial(s) => write!(f, "{} @ {} baud", s.port_name, s.baud_rate),
        }
    }
}
// 界面显示的流状态
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    Streaming,
    Paused,
    Frozen,
}
impl StreamState {
    pub fn label(self) -> &'static str {
        match self {
            StreamState::Streaming => "STREAMING",
            StreamState::Paused => "PAUSED",
            StreamState::Frozen => "SOURCE CLOSED",
        }
    }
}
