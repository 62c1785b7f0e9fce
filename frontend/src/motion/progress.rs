/// Clamps into [0, 1]. NaN counts as "not started".
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// A scroll-distance interval over which one transition plays out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub start: f64,
    pub length: f64,
}

impl Phase {
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    /// Divisor used for progress; never below one pixel.
    pub fn span(&self) -> f64 {
        if self.length.is_nan() {
            1.0
        } else {
            self.length.max(1.0)
        }
    }

    pub fn progress(&self, offset: f64) -> f64 {
        clamp01((offset - self.start) / self.span())
    }
}

/// Re-expresses a parent progress `p` inside `[lo, hi]` as a local 0..1.
pub fn remap(p: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return if p >= hi { 1.0 } else { 0.0 };
    }
    clamp01((p - lo) / (hi - lo))
}

/// Collapses bursts of scroll events into one pass per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    /// Id of the requested frame, kept so teardown can cancel it.
    handle: Option<i32>,
}

impl FrameGate {
    /// True when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn scheduled(&mut self, handle: i32) {
        if self.pending {
            self.handle = Some(handle);
        }
    }

    pub fn begin_frame(&mut self) {
        self.pending = false;
        self.handle = None;
    }

    /// Forgets any pending frame, returning its id if one was scheduled.
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending = false;
        self.handle.take()
    }
}
