//! # Tracing Setup
//!
//! Every actor logs through `tracing` with an `entity_type` field, so module paths add
//! nothing and are hidden (`with_target(false)`).
//!
//! ```text
//! INFO Actor started entity_type="Cart"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Action ok entity_type="Cart" id=user_3
//! ```
//!
//! Levels come from `RUST_LOG`; `info` when it is unset. `RUST_LOG=debug` adds the full
//! request payloads (`Create params=...`, `Action action=Checkout {..}`).

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
