//! AX.25 unnumbered-information frame decoding.
//!
//! Responsibilities:
//! - Decode 7-byte address blocks (bit-shifted ASCII callsign, SSID,
//!   H-bit, address-extension bit)
//! - Walk the variable-length address field: destination, source, then
//!   up to eight digipeaters
//! - Gate on the UI control field and no-layer-3 PID
//! - Split the payload into information-type character + information field
//!
//! Everything APRS rides in UI frames with a one-byte control field, so
//! the control-field length is fixed at 1 here.

use crate::types::{Callsign, DecodeError, PathEntry};

/// Minimum decodable frame: two address blocks plus control byte.
pub const MIN_FRAME_LEN: usize = 2 * ADDRESS_LEN + 1;
/// Maximum accepted frame size.
pub const MAX_FRAME_LEN: usize = 332;

pub const MIN_ADDRESSES: usize = 2;
pub const MAX_ADDRESSES: usize = 10;

/// Unnumbered Information control field value.
pub const CONTROL_UI: u8 = 0x03;
/// "No layer 3" protocol ID.
pub const PID_NO_LAYER3: u8 = 0xF0;

const ADDRESS_LEN: usize = 7;

// SSID/flags byte layout: H-bit, two reserved bits, 4-bit SSID,
// address-extension bit.
const SSID_H_MASK: u8 = 0x80;
const SSID_MASK: u8 = 0x1E;
const SSID_SHIFT: u8 = 1;
const LAST_ADDRESS_MASK: u8 = 0x01;

/// A decoded AX.25 UI frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ax25Frame {
    pub destination: Callsign,
    pub source: Callsign,
    /// Digipeater path in wire order, zero to eight entries.
    pub path: Vec<PathEntry>,
    /// First character of the payload, selecting the APRS data type.
    pub information_type: char,
    /// Payload text after the type character.
    pub information: String,
}

impl Ax25Frame {
    /// Decode one de-escaped link-layer frame.
    pub fn decode(frame: &[u8]) -> Result<Ax25Frame, DecodeError> {
        if frame.len() < MIN_FRAME_LEN || frame.len() > MAX_FRAME_LEN {
            return Err(DecodeError::FrameSizeOutOfRange(frame.len()));
        }

        // Walk address blocks until one carries the extension bit.
        let mut addresses = Vec::new();
        let mut offset = 0;
        loop {
            if addresses.len() == MAX_ADDRESSES {
                return Err(DecodeError::InvalidAddressCount(addresses.len() + 1));
            }
            if offset + ADDRESS_LEN > frame.len() {
                // Ran off the end without seeing the extension bit.
                return Err(DecodeError::InvalidAddressCount(addresses.len()));
            }

            let block = &frame[offset..offset + ADDRESS_LEN];
            addresses.push(decode_address(block));
            offset += ADDRESS_LEN;

            if block[6] & LAST_ADDRESS_MASK != 0 {
                break;
            }
        }

        if addresses.len() < MIN_ADDRESSES {
            return Err(DecodeError::InvalidAddressCount(addresses.len()));
        }

        // Control + PID + at least the information-type character.
        if frame.len() < offset + 3 {
            return Err(DecodeError::FrameSizeOutOfRange(frame.len()));
        }

        let control = frame[offset];
        let pid = frame[offset + 1];
        if control != CONTROL_UI || pid != PID_NO_LAYER3 {
            return Err(DecodeError::NotAnInformationFrame { control, pid });
        }

        let payload = &frame[offset + 2..];
        let text =
            std::str::from_utf8(payload).map_err(|_| DecodeError::EncodingError)?;
        if !text.is_ascii() {
            return Err(DecodeError::EncodingError);
        }

        let mut chars = text.chars();
        let information_type = chars.next().ok_or(DecodeError::EncodingError)?;
        let information = chars.as_str().to_string();

        let mut addresses = addresses.into_iter();
        let destination = addresses.next().ok_or(DecodeError::InvalidAddressCount(0))?;
        let source = addresses.next().ok_or(DecodeError::InvalidAddressCount(1))?;

        Ok(Ax25Frame {
            destination: destination.callsign,
            source: source.callsign,
            path: addresses.collect(),
            information_type,
            information,
        })
    }
}

/// Decode one 7-byte address block. Callsign bytes are the ASCII
/// characters shifted left by one bit; trailing spaces pad short calls.
fn decode_address(block: &[u8]) -> PathEntry {
    let mut base = String::with_capacity(6);
    for &b in &block[..6] {
        let c = (b >> 1) & 0x7F;
        if c == b' ' {
            break;
        }
        base.push(c as char);
    }

    let flags = block[6];
    let ssid = (flags & SSID_MASK) >> SSID_SHIFT;
    let repeated = flags & SSID_H_MASK != 0;

    PathEntry {
        callsign: Callsign::new(base, ssid),
        repeated,
    }
}

impl std::fmt::Display for Ax25Frame {
    /// TNC2-style monitor format: `SRC>DEST,DIGI1,DIGI2*:payload`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}>{}", self.source, self.destination)?;
        for entry in &self.path {
            write!(f, ",{entry}")?;
        }
        write!(f, ":{}{}", self.information_type, self.information)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
