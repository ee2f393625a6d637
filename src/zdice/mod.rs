//! Zero-based dice: a die with `n` faces rolls `0..n`.

mod zdie;

pub use zdie::{roll_many, ZDie};
