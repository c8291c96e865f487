use tracing::debug;

use crate::domain::series::Point;

/// Which slider handle a drag gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

/// Committed range bounds reported to the window slicer. `None` means the
/// full series is selected ("no filter"); otherwise the ISO dates at the
/// committed start and end indices.
pub type RangeReport = Option<(String, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    DraggingStart,
    DraggingEnd,
}

/// Drag-to-zoom range selector over a fixed-length point sequence.
///
/// Pointer moves are coalesced to at most one applied update per animation
/// frame: [`pointer_moved`](Self::pointer_moved) records only the latest
/// position and [`tick`](Self::tick) applies it. The committed range always
/// spans at least one element; updates that would collapse it are rejected
/// and the previous valid range is retained.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    dates: Vec<String>,
    start: usize,
    end: usize,
    state: DragState,
    /// Latest pointer position within the current frame, as a 0..=1
    /// fraction of the track width. Stale moves are overwritten, not queued.
    pending: Option<f64>,
}

impl RangeSlider {
    /// Builds a slider over the series, initially spanning the full range.
    ///
    /// Returns `None` for series with fewer than two points: there is no
    /// interactive surface and no drags are accepted.
    pub fn new(series: &[Point]) -> Option<Self> {
        if series.len() < 2 {
            return None;
        }
        Some(Self {
            dates: series.iter().map(|p| p.t.clone()).collect(),
            start: 0,
            end: series.len() - 1,
            state: DragState::Idle,
            pending: None,
        })
    }

    /// Pointer-down on a handle starts a drag.
    pub fn begin_drag(&mut self, handle: Handle) {
        self.state = match handle {
            Handle::Start => DragState::DraggingStart,
            Handle::End => DragState::DraggingEnd,
        };
    }

    /// Records the pointer's horizontal position over the track. Only the
    /// most recent position before the next [`tick`](Self::tick) is honored.
    pub fn pointer_moved(&mut self, x_px: f64, track_width: f64) {
        if self.state == DragState::Idle || track_width <= 0.0 {
            return;
        }
        self.pending = Some((x_px / track_width).clamp(0.0, 1.0));
    }

    /// Animation-frame tick: applies the latest recorded pointer position,
    /// if any. Returns the committed report when the range changed, `None`
    /// when there was nothing to apply or the update was rejected.
    pub fn tick(&mut self) -> Option<RangeReport> {
        let frac = self.pending.take()?;
        let ix = self.index_from_fraction(frac);
        let (candidate_start, candidate_end) = match self.state {
            DragState::Idle => return None,
            DragState::DraggingStart => (ix, self.end),
            DragState::DraggingEnd => (self.start, ix),
        };

        let a = candidate_start.min(candidate_end);
        let b = candidate_start.max(candidate_end);
        if b - a < 1 {
            // Collapsed range rejected; previous valid range retained.
            return None;
        }
        if (a, b) == (self.start, self.end) {
            return None;
        }

        self.start = a;
        self.end = b;
        debug!(start = a, end = b, "range committed");
        Some(self.report())
    }

    /// Pointer-up ends the drag regardless of pointer position.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
        self.pending = None;
    }

    /// Returns the range to the full series and reports "no filter".
    pub fn reset(&mut self) -> RangeReport {
        self.start = 0;
        self.end = self.dates.len() - 1;
        self.state = DragState::Idle;
        self.pending = None;
        None
    }

    /// A full-range selection reports no filter; anything narrower reports
    /// the ISO dates at the committed indices.
    pub fn report(&self) -> RangeReport {
        if self.start == 0 && self.end == self.dates.len() - 1 {
            None
        } else {
            Some((self.dates[self.start].clone(), self.dates[self.end].clone()))
        }
    }

    /// The committed `(start, end)` index pair.
    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Linear interpolation across the track, rounded to the nearest index
    /// and clamped to the series.
    fn index_from_fraction(&self, frac: f64) -> usize {
        let scaled = frac * (self.dates.len() - 1) as f64;
        (scaled.round() as usize).min(self.dates.len() - 1)
    }
}
