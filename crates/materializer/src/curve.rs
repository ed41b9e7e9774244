use curveconfig::KeyframeCurve;

/// Sampling interface the driver needs from an authored curve.
///
/// The playable domain is `[0, end_time()]`; how values between control
/// points are interpolated is entirely the curve's business.
pub trait Curve {
    /// Samples the curve at time `t`.
    fn evaluate(&self, t: f32) -> f32;
    /// Time of the last control point.
    fn end_time(&self) -> f32;
    /// Value of the last control point.
    fn end_value(&self) -> f32;
}

impl Curve for KeyframeCurve {
    fn evaluate(&self, t: f32) -> f32 {
        KeyframeCurve::evaluate(self, t)
    }

    fn end_time(&self) -> f32 {
        KeyframeCurve::end_time(self)
    }

    fn end_value(&self) -> f32 {
        KeyframeCurve::end_value(self)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn evaluate(&self, t: f32) -> f32 {
        (**self).evaluate(t)
    }

    fn end_time(&self) -> f32 {
        (**self).end_time()
    }

    fn end_value(&self) -> f32 {
        (**self).end_value()
    }
}
