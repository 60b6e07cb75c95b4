//! Shared types and error enums for aprs-core.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors produced while decoding a link-layer (AX.25) frame.
///
/// None of these are fatal to the stream: the caller logs and drops the
/// frame. Malformed frames are routine on RF links.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("frame size {0} outside allowed range")]
    FrameSizeOutOfRange(usize),
    #[error("address count {0} outside allowed range")]
    InvalidAddressCount(usize),
    #[error("not a UI/no-layer-3 frame (control {control:#04x}, pid {pid:#04x})")]
    NotAnInformationFrame { control: u8, pid: u8 },
    #[error("frame field is not valid ASCII")]
    EncodingError,
}

/// Errors produced while parsing an APRS information field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("reserved '!!' prefix")]
    ReservedPrefix,
    #[error("information type {0:?} is not a position report")]
    UnsupportedType(char),
    #[error("malformed position field")]
    InvalidPosition,
    #[error("malformed timestamp field")]
    InvalidTimestamp,
}

// ---------------------------------------------------------------------------
// Callsigns and paths
// ---------------------------------------------------------------------------

/// A station callsign with optional SSID.
///
/// Rendered as `BASE-N`; SSID 0 renders without the suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callsign {
    pub base: String,
    pub ssid: u8,
}

impl Callsign {
    pub fn new(base: impl Into<String>, ssid: u8) -> Self {
        Callsign {
            base: base.into(),
            ssid,
        }
    }

    /// Parse a `BASE` or `BASE-N` string. Used by tests and config, not
    /// by the wire decoder (which builds callsigns from address blocks).
    pub fn parse(s: &str) -> Option<Self> {
        match s.split_once('-') {
            Some((base, ssid)) => {
                let ssid: u8 = ssid.parse().ok()?;
                if base.is_empty() || ssid > 15 {
                    return None;
                }
                Some(Callsign::new(base, ssid))
            }
            None => {
                if s.is_empty() {
                    return None;
                }
                Some(Callsign::new(s, 0))
            }
        }
    }
}

impl std::fmt::Display for Callsign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ssid != 0 {
            write!(f, "{}-{}", self.base, self.ssid)
        } else {
            write!(f, "{}", self.base)
        }
    }
}

impl Serialize for Callsign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One digipeater entry in the relay path.
///
/// `repeated` is the H-bit: set once the station has actually relayed
/// the frame. Rendered with the conventional trailing `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub callsign: Callsign,
    pub repeated: bool,
}

impl std::fmt::Display for PathEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.repeated {
            write!(f, "{}*", self.callsign)
        } else {
            write!(f, "{}", self.callsign)
        }
    }
}

impl Serialize for PathEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Report fields
// ---------------------------------------------------------------------------

/// Symbol table identifier plus symbol code, selecting a map glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub table: char,
    pub code: char,
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.table, self.code)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Mic-E message type, assembled from the three message bits in the
/// destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MicEStatus {
    OffDuty,
    EnRoute,
    InService,
    Returning,
    Committed,
    Special,
    Priority,
    Emergency,
}

impl std::fmt::Display for MicEStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MicEStatus::OffDuty => "Off Duty",
            MicEStatus::EnRoute => "En Route",
            MicEStatus::InService => "In Service",
            MicEStatus::Returning => "Returning",
            MicEStatus::Committed => "Committed",
            MicEStatus::Special => "Special",
            MicEStatus::Priority => "Priority",
            MicEStatus::Emergency => "Emergency",
        };
        write!(f, "{s}")
    }
}

/// Whether a Mic-E report carries a current or a delayed GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FixRecency {
    Current,
    Old,
}

/// One normalized position report, the pipeline's final output.
///
/// `timestamp` is either decoded from the payload (`@`/`/` reports) or
/// the wall-clock receive time for the formats that carry none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    pub station: Callsign,
    pub destination: Callsign,
    pub path: Vec<PathEntry>,
    pub timestamp: DateTime<Utc>,
    /// Signed decimal degrees, north positive.
    pub latitude: f64,
    /// Signed decimal degrees, east positive.
    pub longitude: f64,
    pub symbol: Option<Symbol>,
    /// Mic-E ground speed, miles per hour.
    pub speed: Option<u16>,
    /// Course in degrees, 0-359.
    pub course: Option<u16>,
    pub status: Option<MicEStatus>,
    pub fix: Option<FixRecency>,
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callsign_display() {
        assert_eq!(Callsign::new("KG5YOV", 9).to_string(), "KG5YOV-9");
        assert_eq!(Callsign::new("TEST", 0).to_string(), "TEST");
    }

    #[test]
    fn test_callsign_parse() {
        assert_eq!(Callsign::parse("KG5YOV-9"), Some(Callsign::new("KG5YOV", 9)));
        assert_eq!(Callsign::parse("TEST"), Some(Callsign::new("TEST", 0)));
        assert_eq!(Callsign::parse("W1AW-16"), None); // SSID > 15
        assert_eq!(Callsign::parse(""), None);
        assert_eq!(Callsign::parse("-3"), None);
    }

    #[test]
    fn test_path_entry_display() {
        let entry = PathEntry {
            callsign: Callsign::new("WIDE1", 1),
            repeated: true,
        };
        assert_eq!(entry.to_string(), "WIDE1-1*");

        let entry = PathEntry {
            callsign: Callsign::new("WIDE2", 1),
            repeated: false,
        };
        assert_eq!(entry.to_string(), "WIDE2-1");
    }

    #[test]
    fn test_symbol_display() {
        let sym = Symbol {
            table: '/',
            code: '>',
        };
        assert_eq!(sym.to_string(), "/>");
    }

    #[test]
    fn test_mic_e_status_display() {
        assert_eq!(MicEStatus::OffDuty.to_string(), "Off Duty");
        assert_eq!(MicEStatus::Emergency.to_string(), "Emergency");
    }
}
