/// Parameter name the original dissolve shader listens on.
pub const MATERIALIZATION_AMOUNT: &str = "_MaterializationAmount";

/// Receives the scalar parameter writes produced by a driver.
///
/// In a real host this is a material or uniform buffer; in tests it is a
/// [`RecordingSink`].
pub trait ScalarSink {
    fn set_scalar(&mut self, name: &str, value: f32);
}

impl<S: ScalarSink + ?Sized> ScalarSink for &mut S {
    fn set_scalar(&mut self, name: &str, value: f32) {
        (**self).set_scalar(name, value);
    }
}

/// Sink that keeps every write in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    writes: Vec<(String, f32)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes in arrival order as `(parameter, value)` pairs.
    pub fn writes(&self) -> &[(String, f32)] {
        &self.writes
    }

    /// Just the written values, in arrival order.
    pub fn values(&self) -> Vec<f32> {
        self.writes.iter().map(|(_, value)| *value).collect()
    }

    pub fn last_value(&self) -> Option<f32> {
        self.writes.last().map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl ScalarSink for RecordingSink {
    fn set_scalar(&mut self, name: &str, value: f32) {
        self.writes.push((name.to_string(), value));
    }
}
