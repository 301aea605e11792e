//! Frame loop that drives one engine run on the calling thread.

use crate::engine::{Frame, SpinEngine, SpinOutcome, SPIN_DURATION};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared stop flag for a run. Setting it cancels the pending frame; the
/// run then ends without a winner.
#[derive(Clone, Default, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, PartialEq)]
pub enum RunResult {
    Finished(SpinOutcome),
    Cancelled { rotation: f64 },
}

pub struct Animator {
    frame_interval: Duration,
    animate: bool,
}

impl Animator {
    pub fn new(frame_interval: Duration, animate: bool) -> Self {
        Self {
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            animate,
        }
    }

    /// Starts a spin and samples it once per frame until it lands or the
    /// token is cancelled. Without animation the run jumps straight to its
    /// final frame.
    pub fn spin<R: Rng>(
        &self,
        engine: &mut SpinEngine,
        segments: &[String],
        rng: &mut R,
        cancel: &CancelToken,
        mut on_frame: impl FnMut(&Frame) -> std::io::Result<()>,
    ) -> anyhow::Result<RunResult> {
        let started = Instant::now();
        engine.start_spin(segments, rng, started)?;

        if !self.animate {
            let frame = engine.advance(started + SPIN_DURATION);
            on_frame(&frame)?;
            return Ok(finish(frame, engine));
        }

        loop {
            if cancel.is_cancelled() {
                engine.cancel();
                log::debug!("spin cancelled at rotation {:.4}", engine.rotation());
                return Ok(RunResult::Cancelled {
                    rotation: engine.rotation(),
                });
            }
            let frame = engine.advance(Instant::now());
            if let Err(e) = on_frame(&frame) {
                engine.cancel();
                return Err(e.into());
            }
            if !matches!(frame, Frame::Spinning { .. }) {
                return Ok(finish(frame, engine));
            }
            std::thread::sleep(self.frame_interval);
        }
    }
}

fn finish(frame: Frame, engine: &SpinEngine) -> RunResult {
    match frame {
        Frame::Finished(out) => RunResult::Finished(out),
        _ => RunResult::Cancelled {
            rotation: engine.rotation(),
        },
    }
}
