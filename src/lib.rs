#![doc(test(attr(deny(warnings))))]

//! Onboard Core collects a person's identity and banking details through a
//! guided multi-step wizard, keeps the finalized records in an in-memory
//! registry, and exposes an inline table editor with dirty-field tracking.

pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod registry;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Onboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
