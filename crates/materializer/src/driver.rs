use curveconfig::StartMode;

use crate::curve::Curve;
use crate::sink::{ScalarSink, MATERIALIZATION_AMOUNT};

/// Which way an active playback task walks the curve's time domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Materialize,
    Unmaterialize,
}

/// One sink write produced by a tick.
///
/// `finished` marks the boundary write a task emits exactly once after its
/// loop guard fails; the driver is idle again after emitting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteEvent {
    pub value: f32,
    pub finished: bool,
}

/// Walks an effect-amount scalar across a curve's time domain, one sink
/// write per tick.
///
/// The driver holds a single logical task at a time. `start_*` cancels any
/// active task and rewinds to the relevant end of the domain; `continue_*`
/// only launches when idle and resumes from the current amount; [`stop`]
/// parks the task wherever it is. Whether a `continue_*` call matches the
/// direction of an already-running task is deliberately not checked: any
/// active task makes it a no-op.
///
/// `speed` is curve-time advanced per real-time second and is taken as
/// configured; a non-positive speed makes the forward task spin forever.
/// Curve authoring (`curveconfig`) rejects such speeds, programmatic
/// callers own the precondition.
///
/// [`stop`]: Materializer::stop
pub struct Materializer<C: Curve> {
    curve: C,
    speed: f32,
    parameter: String,
    amount: f32,
    active: Option<Direction>,
}

impl<C: Curve> Materializer<C> {
    pub fn new(curve: C, speed: f32) -> Self {
        Self {
            curve,
            speed,
            parameter: MATERIALIZATION_AMOUNT.to_string(),
            amount: 0.0,
            active: None,
        }
    }

    /// Replaces the default `_MaterializationAmount` parameter name.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    /// Runs the configured on-load behaviour.
    pub fn apply_start_mode(&mut self, mode: StartMode) {
        match mode {
            StartMode::None => {}
            StartMode::Materialize => self.start_materialize(),
            StartMode::Unmaterialize => self.start_unmaterialize(),
        }
    }

    /// Starts constructing from the beginning of the curve, cancelling any
    /// active task.
    pub fn start_materialize(&mut self) {
        self.stop();
        self.amount = 0.0;
        self.active = Some(Direction::Materialize);
        tracing::debug!(parameter = %self.parameter, "materialization started");
    }

    /// Resumes constructing from the current amount; no-op while any task
    /// is active.
    pub fn continue_materialize(&mut self) {
        if self.active.is_none() {
            self.active = Some(Direction::Materialize);
            tracing::debug!(amount = self.amount, "materialization resumed");
        }
    }

    /// Starts deconstructing from the end of the curve, cancelling any
    /// active task.
    pub fn start_unmaterialize(&mut self) {
        self.stop();
        self.amount = self.curve.end_time();
        self.active = Some(Direction::Unmaterialize);
        tracing::debug!(parameter = %self.parameter, "unmaterialization started");
    }

    /// Resumes deconstructing from the current amount; no-op while any task
    /// is active.
    pub fn continue_unmaterialize(&mut self) {
        if self.active.is_none() {
            self.active = Some(Direction::Unmaterialize);
            tracing::debug!(amount = self.amount, "unmaterialization resumed");
        }
    }

    /// Cancels the active task, keeping the current amount. Safe to call
    /// when idle.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!(amount = self.amount, "playback stopped");
        }
    }

    /// Performs one tick of the active task.
    ///
    /// While the loop guard holds, emits `evaluate(amount)` and then steps
    /// the amount by `speed * dt`. The tick after the guard fails emits the
    /// boundary value (`end_value()` forward, `evaluate(0)` backward) and
    /// parks the driver. Returns `None` when idle.
    pub fn advance(&mut self, dt: f32) -> Option<WriteEvent> {
        let direction = self.active?;
        let event = match direction {
            Direction::Materialize => {
                if self.amount <= self.curve.end_time() {
                    let value = self.curve.evaluate(self.amount);
                    self.amount += self.speed * dt;
                    WriteEvent {
                        value,
                        finished: false,
                    }
                } else {
                    self.active = None;
                    WriteEvent {
                        value: self.curve.end_value(),
                        finished: true,
                    }
                }
            }
            Direction::Unmaterialize => {
                if self.amount >= 0.0 {
                    let value = self.curve.evaluate(self.amount);
                    self.amount -= self.speed * dt;
                    WriteEvent {
                        value,
                        finished: false,
                    }
                } else {
                    self.active = None;
                    WriteEvent {
                        value: self.curve.evaluate(0.0),
                        finished: true,
                    }
                }
            }
        };
        if event.finished {
            tracing::debug!(value = event.value, ?direction, "playback finished");
        }
        Some(event)
    }

    /// Performs one tick and writes the result into `sink` under this
    /// driver's parameter name. Returns whether a task is still running.
    pub fn tick<S: ScalarSink>(&mut self, dt: f32, sink: &mut S) -> bool {
        match self.advance(dt) {
            Some(event) => {
                sink.set_scalar(&self.parameter, event.value);
                !event.finished
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.active
    }

    /// Current position along the curve's time domain. Not clamped; the
    /// loop guards are the only bounds.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }
}
