//! One-based dice: a die with `n` faces rolls `1..=n`.

mod die;

pub use die::{roll_many, Die};
