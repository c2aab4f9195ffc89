//! Sky Barrage - a single-screen vertical shooter.
//!
//! The library is the simulation engine; the binary is a terminal shell that
//! feeds it pointer input and draws the result.
//!
//! - `entities`: pure data records
//! - `spawn` / `weapons`: entity constructors and fire patterns
//! - `collision`: overlap primitives
//! - `compute`: the per-frame step function and lifecycle transitions
//! - `scheduler`: host-facing frame driver

pub mod collision;
pub mod compute;
pub mod consts;
pub mod entities;
pub mod scheduler;
pub mod spawn;
pub mod weapons;

/// `max(lo, min(hi, v))`: when the range is inverted the lower bound wins.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}
