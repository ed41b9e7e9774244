//! Drives a "materialization amount" shader parameter along an authored
//! curve, one write per tick.
//!
//! The driver is a steppable task object rather than a frame-loop callback:
//! callers pump it with [`Materializer::advance`] (or [`Materializer::tick`]
//! to write straight into a [`ScalarSink`]) using deltas from a
//! [`DeltaSource`]. At most one playback task is active per driver; starting
//! a new one cancels the previous, stopping keeps the current amount so a
//! later `continue_*` resumes in place.

mod clock;
mod curve;
mod driver;
mod sink;

pub use clock::{BoxedDeltaSource, DeltaSource, FixedDeltaSource, SystemDeltaSource};
pub use curve::Curve;
pub use driver::{Direction, Materializer, WriteEvent};
pub use sink::{RecordingSink, ScalarSink, MATERIALIZATION_AMOUNT};
