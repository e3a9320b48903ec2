//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact format, no module
//! targets (actors log an `entity_type` field instead), filter taken from
//! `RUST_LOG` and otherwise from the configured default.
//!
//! ```bash
//! RUST_LOG=info roadmap-forge demo     # lifecycle events only
//! RUST_LOG=debug roadmap-forge demo    # full payloads on every request
//! ```
//!
//! With `info` the demo shows the request flow across both actors:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Actor started entity_type="StoredRoadmap"
//! INFO sign_in{id=UserId("auth0|ada") email="ada@example.com"}: Created entity_type="User" id=auth0|ada size=1
//! INFO generate{topic=JavaScript level=beginner}: Created entity_type="StoredRoadmap" id=roadmap_1 size=1
//! INFO generate{topic=JavaScript level=beginner}: Action ok entity_type="StoredRoadmap" id=roadmap_1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset or unparsable. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
