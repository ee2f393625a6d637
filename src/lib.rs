//! Polyhedral dice as small value types.
//!
//! [`Die`] numbers its faces from one, [`ZDie`] from zero. Both roll
//! against an injected [`Roller`], so callers decide where randomness
//! comes from.

pub mod config;
pub mod dice;
pub mod error;
pub mod roller;
pub mod zdice;

pub use dice::Die;
pub use error::{DiceError, Result};
pub use roller::{Roller, SeededRoller, ThreadRngRoller};
pub use zdice::ZDie;

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
