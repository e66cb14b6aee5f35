use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::grid::Grid;

/// Cooperative cancellation for a running search. Clones share the same flag, so the input
/// handler can keep one and trip it while the render callback holds the other.
///
/// The flag is only looked at between frames, at the render callback boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
    /// Clears the flag so the token can be reused for the next run.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }
    /// The value a render callback should return for this frame.
    pub fn control(&self) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
    /// Wraps a plain drawing routine into a render callback that draws the frame and then
    /// reports whether the run should go on.
    pub fn guard<'a, D>(&'a self, mut draw: D) -> impl FnMut(&Grid) -> ControlFlow<()> + 'a
    where
        D: FnMut(&Grid) + 'a,
    {
        move |grid: &Grid| {
            draw(grid);
            self.control()
        }
    }
}
