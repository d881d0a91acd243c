//! Bounded counter state.
//!
//! A pure, synchronous value transformer: an integer constrained to an
//! optional inclusive `[min, max]` range, mutated only through clamped
//! increment/decrement and reset. Hosts read `value()` plus the derived
//! `can_increment()`/`can_decrement()` flags to render controls, so an
//! out-of-range click is never an error — the control is simply disabled.

/// Integer counter clamped to optional inclusive bounds.
///
/// Bounds are fixed at construction. Mutators never fail: stepping past a
/// bound pins the value exactly at that bound, and repeated calls at the
/// bound are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i64,
    initial: i64,
    step: i64,
    min: Option<i64>,
    max: Option<i64>,
}

impl BoundedCounter {
    /// Create an unbounded counter starting at `initial`.
    ///
    /// `step` is the magnitude applied per increment/decrement and must be
    /// positive; it is clamped up to 1 if not.
    pub fn new(initial: i64, step: i64) -> Self {
        Self::with_bounds(initial, step, None, None)
    }

    /// Create a counter with optional inclusive bounds.
    ///
    /// `initial` is not validated against the bounds: `reset()` restores it
    /// verbatim, so an out-of-range `initial` will resurface on reset. The
    /// caller is responsible for passing an in-range starting value.
    pub fn with_bounds(initial: i64, step: i64, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            value: initial,
            initial,
            step: step.max(1),
            min,
            max,
        }
    }

    /// Current count.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Step one increment forward, clamped to `max`.
    pub fn increment(&mut self) {
        self.value = self.clamp(self.value.saturating_add(self.step));
    }

    /// Step one increment backward, clamped to `min`.
    pub fn decrement(&mut self) {
        self.value = self.clamp(self.value.saturating_sub(self.step));
    }

    /// Restore the construction-time initial value.
    ///
    /// Deliberately does not re-clamp: if the counter was built with an
    /// out-of-range initial value, reset reproduces it.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }

    /// Whether an increment would move the value.
    pub fn can_increment(&self) -> bool {
        self.max.map_or(true, |max| self.value < max)
    }

    /// Whether a decrement would move the value.
    pub fn can_decrement(&self) -> bool {
        self.min.map_or(true, |min| self.value > min)
    }

    fn clamp(&self, candidate: i64) -> i64 {
        let mut clamped = candidate;
        if let Some(max) = self.max {
            clamped = clamped.min(max);
        }
        if let Some(min) = self.min {
            clamped = clamped.max(min);
        }
        clamped
    }
}
