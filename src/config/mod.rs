//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config/config.json (JSON, // comments tolerated)
//!     → codec.rs (strip comments, tolerant decode)
//!     → ConfigRecord::validate() (range repair, Version/Link pinning)
//!     → codec.rs (encode, declaration order)
//!     → weaver.rs (banners + comments from the FIELDS table)
//!     → written back to disk, fully re-annotated
//!     → shared via Arc to the logging collaborators
//!
//! On hot reload:
//!     loader.rs runs the same cycle
//!     → atomic swap of Arc<ConfigRecord>
//!     → readers keep their snapshot until they fetch again
//! ```
//!
//! # Design Decisions
//! - Field metadata lives in one static table (FIELDS), looked up by name
//! - The record is immutable once published; changes require a full reload
//! - Decoding never fails a load: malformed input degrades to defaults
//! - Document comments are write-only; only the values round-trip

pub mod codec;
pub mod loader;
pub mod schema;
pub mod weaver;

pub use codec::{decode, encode, DocLine, Document};
pub use loader::{get, is_loaded, load};
pub use loader::{ConfigError, ConfigResult, ConfigStore};
pub use schema::{ChatScope, ConfigRecord, Diagnostic, LogMode};
pub use schema::{FieldKind, FieldSpec, RangeRule, FIELDS};
pub use weaver::annotate;
