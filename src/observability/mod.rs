//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config::loader and collaborators produce:
//!     → structured tracing events (load, repair, fallback warnings)
//!
//! Consumers:
//!     → server console via the fmt layer installed by logging::init
//!     → filter driven by RUST_LOG, or EnableDebug when unset
//! ```
//!
//! # Design Decisions
//! - tracing for structured events; warnings carry the repaired field name
//! - init is idempotent so a plugin hot reload cannot panic the host

pub mod logging;
