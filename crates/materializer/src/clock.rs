use std::time::Instant;

/// Abstraction over where per-tick elapsed time comes from.
pub trait DeltaSource: Send {
    /// Resets the source to its initial state.
    fn reset(&mut self);
    /// Returns the elapsed time in seconds since the previous call.
    fn delta(&mut self) -> f32;
}

/// Delta source backed by the system monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemDeltaSource {
    last: Instant,
}

impl SystemDeltaSource {
    /// Creates a system delta source anchored at `Instant::now()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemDeltaSource {
    fn default() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl DeltaSource for SystemDeltaSource {
    fn reset(&mut self) {
        self.last = Instant::now();
    }

    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Delta source that always reports the same step; useful for deterministic
/// playback and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDeltaSource {
    dt: f32,
}

impl FixedDeltaSource {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl DeltaSource for FixedDeltaSource {
    fn reset(&mut self) {}

    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Convenient alias for owning delta sources behind trait objects.
pub type BoxedDeltaSource = Box<dyn DeltaSource + Send>;
