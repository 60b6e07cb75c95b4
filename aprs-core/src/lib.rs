//! aprs-core: Pure decode library for KISS / AX.25 / APRS position traffic.
//!
//! No async, no I/O — just the three-stage decode pipeline (deframe,
//! link decode, payload parse) plus the station history it feeds. The
//! `aprs-receiver` binary wires these to a TCP transport.

pub mod ax25;
pub mod config;
pub mod history;
pub mod kiss;
pub mod position;
pub mod types;

// Re-export commonly used types at crate root
pub use ax25::Ax25Frame;
pub use history::{StationEvent, StationHistory};
pub use kiss::{Deframer, RawByteFrame};
pub use position::decode_report;
pub use types::*;
