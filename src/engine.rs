//! Spinner engine: rotation state, spin command and winner mapping.
//!
//! Angles follow the canvas convention: 0 rad points at 3 o'clock and
//! angles grow clockwise on screen. Sector `i` starts at
//! `i * step + rotation`. The pointer sits at the top of the wheel,
//! canonical angle `1.5π`.

use rand::Rng;
use std::f64::consts::{PI, TAU};
use std::time::{Duration, Instant};

pub const SPIN_DURATION: Duration = Duration::from_millis(5000);
pub const MIN_SEGMENTS: usize = 2;
pub const POINTER_ANGLE: f64 = 1.5 * PI;

const MIN_TURNS: f64 = 5.0;
const MAX_TURNS: f64 = 10.0;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SpinError {
    #[error("enter at least two names to start a draw (got {0})")]
    TooFewSegments(usize),
    #[error("a spin is already in progress")]
    AlreadySpinning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub label: String,
    pub index: usize,
    pub rotation: f64,
    pub segment_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Idle { rotation: f64 },
    Spinning { rotation: f64, progress: f64 },
    Finished(SpinOutcome),
}

#[derive(Debug, Clone)]
struct SpinRun {
    segments: Vec<String>,
    from: f64,
    target: f64,
    started_at: Instant,
    last_rotation: f64,
}

#[derive(Debug, Default)]
pub struct SpinEngine {
    rotation: f64,
    run: Option<SpinRun>,
}

impl SpinEngine {
    pub fn new(rotation: f64) -> Self {
        Self {
            rotation,
            run: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Commits a target rotation and begins a run at `now`.
    ///
    /// The labels are copied so later edits to the caller's list cannot
    /// change the segment count mid-run.
    pub fn start_spin<R: Rng>(
        &mut self,
        segments: &[String],
        rng: &mut R,
        now: Instant,
    ) -> Result<f64, SpinError> {
        if segments.len() < MIN_SEGMENTS {
            return Err(SpinError::TooFewSegments(segments.len()));
        }
        if self.run.is_some() {
            return Err(SpinError::AlreadySpinning);
        }
        let turns = rng.random_range(MIN_TURNS..MAX_TURNS);
        let offset = rng.random_range(0.0..TAU);
        let target = self.rotation + turns * TAU + offset;
        log::debug!(
            "spin committed: from={:.4} target={:.4} segments={}",
            self.rotation,
            target,
            segments.len()
        );
        self.run = Some(SpinRun {
            segments: segments.to_vec(),
            from: self.rotation,
            target,
            started_at: now,
            last_rotation: self.rotation,
        });
        Ok(target)
    }

    /// Samples the run at `now`. Progress comes from elapsed wall-clock
    /// time, so skipped frames only skip samples.
    pub fn advance(&mut self, now: Instant) -> Frame {
        let Some(run) = self.run.as_mut() else {
            return Frame::Idle {
                rotation: self.rotation,
            };
        };
        let elapsed = now.saturating_duration_since(run.started_at);
        let progress = progress_at(elapsed);
        if progress < 1.0 {
            let rotation = run.from + (run.target - run.from) * ease_out_cubic(progress);
            run.last_rotation = rotation;
            return Frame::Spinning { rotation, progress };
        }

        let Some(run) = self.run.take() else {
            return Frame::Idle {
                rotation: self.rotation,
            };
        };
        self.rotation = run.target;
        let segment_count = run.segments.len();
        // segment_count >= 2 was checked in start_spin.
        let index = winner_index(run.target, segment_count).unwrap_or(0);
        let label = run.segments.into_iter().nth(index).unwrap_or_default();
        Frame::Finished(SpinOutcome {
            label,
            index,
            rotation: run.target,
            segment_count,
        })
    }

    /// Drops the active run without a winner. The wheel stays where it was
    /// last drawn.
    pub fn cancel(&mut self) -> bool {
        match self.run.take() {
            Some(run) => {
                self.rotation = run.last_rotation;
                true
            }
            None => false,
        }
    }
}

pub fn progress_at(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() / SPIN_DURATION.as_secs_f64()).clamp(0.0, 1.0)
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Canonical residue of `angle` in `[0, 2π)`.
pub fn normalize(angle: f64) -> f64 {
    let n = ((angle % TAU) + TAU) % TAU;
    if n >= TAU {
        0.0
    } else {
        n
    }
}

/// Index of the segment under the pointer for a wheel at `rotation`.
pub fn winner_index(rotation: f64, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let n = segment_count as i64;
    let step = TAU / segment_count as f64;
    let raw = (((POINTER_ANGLE - normalize(rotation)) % TAU) / step).floor() as i64;
    Some((((raw % n) + n) % n) as usize)
}
