use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    /// Final rotation of the last completed spin, radians.
    #[serde(default)]
    pub rotation: f64,
    /// Newest first.
    #[serde(default)]
    pub history: Vec<WinnerRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WinnerRecord {
    pub name: String,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub segment_count: usize,
}

#[derive(Serialize)]
pub struct NamesReport {
    pub source: String,
    pub count: usize,
    pub names: Vec<String>,
}

#[derive(Serialize)]
pub struct DedupeReport {
    pub removed: usize,
    pub remaining: usize,
}

#[derive(Serialize)]
pub struct SectorLayout {
    pub index: usize,
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub bisector: f64,
    pub under_pointer: bool,
}

#[derive(Serialize)]
pub struct WheelReport {
    pub rotation: f64,
    pub segment_count: usize,
    pub winner_index: Option<usize>,
    pub sectors: Vec<SectorLayout>,
}

#[derive(Serialize)]
pub struct MessageReport {
    pub name: String,
    pub message: String,
}
