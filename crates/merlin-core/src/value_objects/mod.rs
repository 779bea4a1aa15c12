//! Value objects - small types that carry domain invariants

mod sequence;

pub use sequence::{IdSequence, MonotonicClock};
