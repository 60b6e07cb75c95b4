//! KISS link-layer deframing.
//!
//! Splits a TNC byte stream into frames delimited by FEND and reverses
//! the FESC escape substitution. Responsibilities:
//! - Buffer partial frames across arbitrary read-chunk boundaries
//! - Reverse FESC TFEND / FESC TFESC left-to-right, without re-scanning
//! - Drop non-data frames (marker byte != 0x00) and empty frames
//!
//! Malformed escape sequences pass through unmodified; nothing in this
//! module is a stream-fatal condition.

/// Frame delimiter.
pub const FEND: u8 = 0xC0;
/// Escape introducer.
pub const FESC: u8 = 0xDB;
/// Escaped form of FEND.
pub const TFEND: u8 = 0xDC;
/// Escaped form of FESC.
pub const TFESC: u8 = 0xDD;
/// Frame-type marker for a data frame on TNC port 0.
pub const DATA_FRAME: u8 = 0x00;

/// One de-escaped link-layer frame, delimiters and type marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawByteFrame(pub Vec<u8>);

impl RawByteFrame {
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Incremental KISS deframer.
///
/// Feed it byte chunks as they arrive from the transport; completed
/// frames come back as soon as their closing FEND is observed. Only the
/// frame currently being assembled is buffered.
#[derive(Debug, Default)]
pub struct Deframer {
    buf: Vec<u8>,
    escaped: bool,
}

impl Deframer {
    pub fn new() -> Self {
        Deframer::default()
    }

    /// Consume a chunk of transport bytes, returning any frames that
    /// completed within it.
    pub fn push(&mut self, input: &[u8]) -> Vec<RawByteFrame> {
        let mut out = Vec::new();

        for &byte in input {
            if self.escaped {
                self.escaped = false;
                match byte {
                    TFEND => {
                        self.buf.push(FEND);
                        continue;
                    }
                    TFESC => {
                        self.buf.push(FESC);
                        continue;
                    }
                    // Not a defined escape: keep the FESC and let the
                    // byte be handled normally below.
                    _ => self.buf.push(FESC),
                }
            }

            match byte {
                FESC => self.escaped = true,
                FEND => self.flush(&mut out),
                b => self.buf.push(b),
            }
        }

        out
    }

    /// Close out the frame under assembly, if any.
    fn flush(&mut self, out: &mut Vec<RawByteFrame>) {
        if self.buf.is_empty() {
            // Back-to-back delimiters; not an error.
            return;
        }

        let frame = std::mem::take(&mut self.buf);
        self.escaped = false;

        // First byte is the frame-type marker. Anything but a data frame
        // is a TNC control frame and gets dropped here.
        if frame[0] != DATA_FRAME || frame.len() == 1 {
            return;
        }

        out.push(RawByteFrame(frame[1..].to_vec()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
