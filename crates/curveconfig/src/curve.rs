use crate::{ConfigError, Interpolation, Key};

impl Interpolation {
    fn sample(self, u: f32) -> f32 {
        let clamped = u.clamp(0.0, 1.0);
        match self {
            Interpolation::Linear => clamped,
            Interpolation::Smoothstep => clamped * clamped * (3.0 - 2.0 * clamped),
            Interpolation::EaseInOut => {
                if clamped < 0.5 {
                    2.0 * clamped * clamped
                } else {
                    -1.0 + (4.0 - 2.0 * clamped) * clamped
                }
            }
            Interpolation::Hold => 0.0,
        }
    }
}

fn lerp(a: f32, b: f32, u: f32) -> f32 {
    a + (b - a) * u
}

/// An ordered set of control points with an interpolation policy.
///
/// Sampling clamps to the boundary keys outside the authored time range, so
/// `evaluate` is total over finite inputs. Construction enforces the same
/// rules `CurveConfig::validate` applies to authored curves: at least one
/// key, finite components, strictly increasing times.
#[derive(Debug, Clone)]
pub struct KeyframeCurve {
    keys: Vec<Key>,
    interpolation: Interpolation,
}

impl KeyframeCurve {
    pub fn new(keys: Vec<Key>, interpolation: Interpolation) -> Result<Self, ConfigError> {
        if keys.is_empty() {
            return Err(ConfigError::Invalid(
                "curve must contain at least one key".into(),
            ));
        }
        for key in &keys {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(ConfigError::Invalid(
                    "curve contains a non-finite key".into(),
                ));
            }
        }
        for pair in keys.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(ConfigError::Invalid(format!(
                    "curve key times must be strictly increasing ({} then {})",
                    pair[0].time, pair[1].time
                )));
            }
        }
        Ok(Self {
            keys,
            interpolation,
        })
    }

    /// Shorthand for a linear curve over `(time, value)` pairs.
    pub fn linear(points: &[(f32, f32)]) -> Result<Self, ConfigError> {
        let keys = points
            .iter()
            .map(|&(time, value)| Key::new(time, value))
            .collect();
        Self::new(keys, Interpolation::Linear)
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }
        // t is strictly inside the key range here, so a containing
        // segment always exists and its span is non-zero.
        for pair in self.keys.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            if t < right.time {
                let u = (t - left.time) / (right.time - left.time);
                return lerp(left.value, right.value, self.interpolation.sample(u));
            }
        }
        last.value
    }

    /// Time of the last key; the curve's playable domain is `[0, end_time]`.
    pub fn end_time(&self) -> f32 {
        self.keys[self.keys.len() - 1].time
    }

    /// Value of the last key.
    pub fn end_value(&self) -> f32 {
        self.keys[self.keys.len() - 1].value
    }

    /// Value at curve time zero.
    pub fn start_value(&self) -> f32 {
        self.evaluate(0.0)
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_curve_interpolates_between_keys() {
        let curve = KeyframeCurve::linear(&[(0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert!((curve.evaluate(0.0) - 0.0).abs() < 1e-6);
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn evaluation_clamps_outside_key_range() {
        let curve = KeyframeCurve::linear(&[(0.5, 0.2), (1.0, 0.8)]).unwrap();
        assert_eq!(curve.evaluate(-1.0), 0.2);
        assert_eq!(curve.evaluate(0.0), 0.2);
        assert_eq!(curve.evaluate(2.0), 0.8);
    }

    #[test]
    fn smoothstep_matches_expected_values() {
        let keys = vec![Key::new(0.0, 0.0), Key::new(1.0, 1.0)];
        let curve = KeyframeCurve::new(keys, Interpolation::Smoothstep).unwrap();
        assert!((curve.evaluate(0.0) - 0.0).abs() < 1e-6);
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!(curve.evaluate(0.25) < 0.25, "smoothstep eases in");
    }

    #[test]
    fn ease_in_out_accelerates_then_decelerates() {
        let keys = vec![Key::new(0.0, 0.0), Key::new(1.0, 1.0)];
        let curve = KeyframeCurve::new(keys, Interpolation::EaseInOut).unwrap();
        let first = curve.evaluate(0.25);
        let mid = curve.evaluate(0.5);
        let last = curve.evaluate(0.75);
        assert!(first < mid);
        assert!(last > mid);
    }

    #[test]
    fn hold_keeps_left_value_until_next_key() {
        let keys = vec![Key::new(0.0, 0.2), Key::new(1.0, 0.9)];
        let curve = KeyframeCurve::new(keys, Interpolation::Hold).unwrap();
        assert_eq!(curve.evaluate(0.1), 0.2);
        assert_eq!(curve.evaluate(0.99), 0.2);
        assert_eq!(curve.evaluate(1.0), 0.9);
    }

    #[test]
    fn single_key_curve_is_constant() {
        let curve = KeyframeCurve::linear(&[(0.0, 0.7)]).unwrap();
        assert_eq!(curve.evaluate(0.0), 0.7);
        assert_eq!(curve.evaluate(5.0), 0.7);
        assert_eq!(curve.end_time(), 0.0);
        assert_eq!(curve.end_value(), 0.7);
    }

    #[test]
    fn multi_segment_curve_samples_each_segment() {
        let curve = KeyframeCurve::linear(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)]).unwrap();
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((curve.evaluate(1.5) - 0.75).abs() < 1e-6);
        assert_eq!(curve.end_value(), 0.5);
    }

    #[test]
    fn rejects_empty_and_non_monotonic_keys() {
        assert!(KeyframeCurve::linear(&[]).is_err());
        assert!(KeyframeCurve::linear(&[(1.0, 0.0), (0.5, 1.0)]).is_err());
        assert!(KeyframeCurve::linear(&[(0.0, 0.0), (0.0, 1.0)]).is_err());
    }
}
