//! Wheel layout and terminal rendering.
//!
//! Sector `i` spans `[i * step + rotation, (i + 1) * step + rotation)` in
//! canvas angles (0 at 3 o'clock, clockwise). Any renderer that keeps that
//! convention picks the same winner as the engine.

use crate::domain::constants::{
    EMPTY_WHEEL_COLOR, LABEL_KEEP_CHARS, LABEL_MAX_CHARS, WHEEL_COLORS,
};
use crate::domain::models::{SectorLayout, WheelReport};
use crate::engine::{winner_index, Frame, SpinOutcome};
use std::f64::consts::TAU;
use std::io::Write;

pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let head: String = name.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

pub fn sector_color(index: usize) -> &'static str {
    WHEEL_COLORS[index % WHEEL_COLORS.len()]
}

pub fn layout(names: &[String], rotation: f64) -> WheelReport {
    if names.is_empty() {
        return WheelReport {
            rotation,
            segment_count: 0,
            winner_index: None,
            sectors: vec![SectorLayout {
                index: 0,
                label: String::new(),
                color: EMPTY_WHEEL_COLOR.to_string(),
                start_angle: rotation,
                end_angle: rotation + TAU,
                bisector: rotation + TAU / 2.0,
                under_pointer: false,
            }],
        };
    }

    let step = TAU / names.len() as f64;
    let pointed = winner_index(rotation, names.len());
    let sectors = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let start = i as f64 * step + rotation;
            SectorLayout {
                index: i,
                label: truncate_label(name),
                color: sector_color(i).to_string(),
                start_angle: start,
                end_angle: start + step,
                bisector: start + step / 2.0,
                under_pointer: pointed == Some(i),
            }
        })
        .collect();

    WheelReport {
        rotation,
        segment_count: names.len(),
        winner_index: pointed,
        sectors,
    }
}

/// Renders frames as a single rewritten status line.
pub struct TextRenderer<'a, W: Write> {
    out: W,
    names: &'a [String],
}

impl<'a, W: Write> TextRenderer<'a, W> {
    pub fn new(out: W, names: &'a [String]) -> Self {
        Self { out, names }
    }

    pub fn status_line(names: &[String], rotation: f64) -> String {
        let label = winner_index(rotation, names.len())
            .and_then(|i| names.get(i))
            .map(|n| truncate_label(n))
            .unwrap_or_default();
        format!(
            "▼ {:<11} {:>7.1}°",
            label,
            crate::engine::normalize(rotation).to_degrees()
        )
    }

    pub fn draw(&mut self, frame: &Frame) -> std::io::Result<()> {
        match frame {
            Frame::Spinning { rotation, .. } | Frame::Idle { rotation } => {
                write!(self.out, "\r{}", Self::status_line(self.names, *rotation))?;
            }
            Frame::Finished(SpinOutcome { rotation, .. }) => {
                writeln!(self.out, "\r{}", Self::status_line(self.names, *rotation))?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
