//! APRS position-report parsing.
//!
//! Dispatches on the information-type character and decodes the four
//! position sub-formats:
//! - `!` / `=` : position without timestamp (uncompressed or compressed)
//! - `@` / `/` : position behind a 7-character timestamp prefix
//! - `` ` `` / `'` : Mic-E, packed into the destination field plus the
//!   leading payload bytes
//!
//! Field boundaries are fixed character offsets, not delimiters. Every
//! decoder is a pure function: wall-clock time comes in as `received_at`.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

use crate::ax25::Ax25Frame;
use crate::types::{FixRecency, MicEStatus, ParseError, PositionReport, Symbol};

// ---------------------------------------------------------------------------
// Mic-E destination lookup tables
// ---------------------------------------------------------------------------

/// Per-character decode of a Mic-E destination byte: latitude digit,
/// message bit, N/S hemisphere, longitude-degree offset, E/W hemisphere.
/// The hemisphere and offset entries only matter at destination
/// positions 3 and 4. `' '` marks the ambiguity range (A-J), which
/// carries no hemisphere information.
#[derive(Debug, Clone, Copy)]
struct DestEntry {
    digit: u8,
    msg_bit: u8,
    ns: char,
    lon_offset: u16,
    ew: char,
}

const fn entry(digit: u8, msg_bit: u8, ns: char, lon_offset: u16, ew: char) -> DestEntry {
    DestEntry {
        digit,
        msg_bit,
        ns,
        lon_offset,
        ew,
    }
}

// K, L, and Z (the "space" positions) are deliberately absent, matching
// the subset of the encoding this decoder accepts.
const DEST_TABLE: &[(char, DestEntry)] = &[
    ('0', entry(0, 0, 'S', 0, 'E')),
    ('1', entry(1, 0, 'S', 0, 'E')),
    ('2', entry(2, 0, 'S', 0, 'E')),
    ('3', entry(3, 0, 'S', 0, 'E')),
    ('4', entry(4, 0, 'S', 0, 'E')),
    ('5', entry(5, 0, 'S', 0, 'E')),
    ('6', entry(6, 0, 'S', 0, 'E')),
    ('7', entry(7, 0, 'S', 0, 'E')),
    ('8', entry(8, 0, 'S', 0, 'E')),
    ('9', entry(9, 0, 'S', 0, 'E')),
    ('A', entry(0, 1, ' ', 0, ' ')),
    ('B', entry(1, 1, ' ', 0, ' ')),
    ('C', entry(2, 1, ' ', 0, ' ')),
    ('D', entry(3, 1, ' ', 0, ' ')),
    ('E', entry(4, 1, ' ', 0, ' ')),
    ('F', entry(5, 1, ' ', 0, ' ')),
    ('G', entry(6, 1, ' ', 0, ' ')),
    ('H', entry(7, 1, ' ', 0, ' ')),
    ('I', entry(8, 1, ' ', 0, ' ')),
    ('J', entry(9, 1, ' ', 0, ' ')),
    ('P', entry(0, 1, 'N', 100, 'W')),
    ('Q', entry(1, 1, 'N', 100, 'W')),
    ('R', entry(2, 1, 'N', 100, 'W')),
    ('S', entry(3, 1, 'N', 100, 'W')),
    ('T', entry(4, 1, 'N', 100, 'W')),
    ('U', entry(5, 1, 'N', 100, 'W')),
    ('V', entry(6, 1, 'N', 100, 'W')),
    ('W', entry(7, 1, 'N', 100, 'W')),
    ('X', entry(8, 1, 'N', 100, 'W')),
    ('Y', entry(9, 1, 'N', 100, 'W')),
];

fn dest_entry(c: char) -> Option<&'static DestEntry> {
    DEST_TABLE
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, e)| e)
}

/// Message type selected by the three message bits of destination
/// characters 0-2.
const MESSAGE_TYPES: &[(u8, MicEStatus)] = &[
    (0b111, MicEStatus::OffDuty),
    (0b110, MicEStatus::EnRoute),
    (0b101, MicEStatus::InService),
    (0b100, MicEStatus::Returning),
    (0b011, MicEStatus::Committed),
    (0b010, MicEStatus::Special),
    (0b001, MicEStatus::Priority),
    (0b000, MicEStatus::Emergency),
];

fn message_type(bits: u8) -> Option<MicEStatus> {
    MESSAGE_TYPES
        .iter()
        .find(|(b, _)| *b == bits)
        .map(|(_, status)| *status)
}

// ---------------------------------------------------------------------------
// Top-level dispatch
// ---------------------------------------------------------------------------

/// Decoded position body shared by the non-Mic-E sub-formats.
struct PositionBody {
    latitude: f64,
    longitude: f64,
    symbol: Symbol,
    comment: Option<String>,
}

/// Parse one AX.25 UI frame payload into a normalized position report.
///
/// `received_at` supplies the capture timestamp for formats that carry
/// none, and the year/month for the ones that carry a partial one.
pub fn decode_report(
    frame: &Ax25Frame,
    received_at: DateTime<Utc>,
) -> Result<PositionReport, ParseError> {
    if !frame.information.is_ascii() {
        return Err(ParseError::InvalidPosition);
    }

    match frame.information_type {
        '!' | '=' => {
            let body = parse_untimed_body(&frame.information)?;
            Ok(assemble(frame, received_at, body, None, None, None, None))
        }
        '@' | '/' => {
            let (timestamp, body) = parse_timestamped(&frame.information, received_at)?;
            Ok(assemble(frame, timestamp, body, None, None, None, None))
        }
        '`' | '\'' => parse_mic_e(frame, received_at),
        other => Err(ParseError::UnsupportedType(other)),
    }
}

fn assemble(
    frame: &Ax25Frame,
    timestamp: DateTime<Utc>,
    body: PositionBody,
    speed: Option<u16>,
    course: Option<u16>,
    status: Option<MicEStatus>,
    fix: Option<FixRecency>,
) -> PositionReport {
    PositionReport {
        station: frame.source.clone(),
        destination: frame.destination.clone(),
        path: frame.path.clone(),
        timestamp,
        latitude: body.latitude,
        longitude: body.longitude,
        symbol: Some(body.symbol),
        speed,
        course,
        status,
        fix,
        comment: body.comment,
    }
}

// ---------------------------------------------------------------------------
// Untimed and timestamped bodies
// ---------------------------------------------------------------------------

fn parse_untimed_body(info: &str) -> Result<PositionBody, ParseError> {
    // A second '!' marks the payload as a different (unsupported)
    // report family.
    if info.as_bytes().get(1) == Some(&b'!') {
        return Err(ParseError::ReservedPrefix);
    }

    if info.starts_with('/') {
        parse_compressed(info)
    } else {
        parse_uncompressed(info)
    }
}

/// Timestamp prefix: three 2-digit groups and a format byte, then a
/// regular uncompressed body.
fn parse_timestamped(
    info: &str,
    received_at: DateTime<Utc>,
) -> Result<(DateTime<Utc>, PositionBody), ParseError> {
    if info.len() < 7 {
        return Err(ParseError::InvalidTimestamp);
    }

    let first = two_digit_group(&info[0..2])?;
    let second = two_digit_group(&info[2..4])?;
    let third = two_digit_group(&info[4..6])?;

    // The wire carries no year or month; those come from the clock.
    let timestamp = match info.as_bytes()[6] {
        // day/hour/minute, UTC
        b'z' => Utc
            .with_ymd_and_hms(received_at.year(), received_at.month(), first, second, third, 0)
            .single(),
        // day/hour/minute, station-local time
        b'/' => {
            let now_local = received_at.with_timezone(&Local);
            Local
                .with_ymd_and_hms(now_local.year(), now_local.month(), first, second, third, 0)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
        // hour/minute/second, UTC, current day
        b'h' => Utc
            .with_ymd_and_hms(
                received_at.year(),
                received_at.month(),
                received_at.day(),
                first,
                second,
                third,
            )
            .single(),
        _ => return Err(ParseError::InvalidTimestamp),
    }
    .ok_or(ParseError::InvalidTimestamp)?;

    let body = parse_uncompressed(&info[7..])?;
    Ok((timestamp, body))
}

fn two_digit_group(s: &str) -> Result<u32, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidTimestamp);
    }
    s.parse().map_err(|_| ParseError::InvalidTimestamp)
}

// ---------------------------------------------------------------------------
// Uncompressed body
// ---------------------------------------------------------------------------

/// Fixed-offset body: `DDMM.mmN/DDDMM.mmW$comment` where `/` and `$`
/// are the symbol table and code.
fn parse_uncompressed(info: &str) -> Result<PositionBody, ParseError> {
    let bytes = info.as_bytes();
    if bytes.len() < 19 {
        return Err(ParseError::InvalidPosition);
    }

    let lat_degrees = parse_digits(&info[0..2])?;
    let lat_minutes = parse_minutes(&info[2..7])?;
    let lat_hemisphere = bytes[7];
    let symbol_table = bytes[8] as char;

    let lon_degrees = parse_digits(&info[9..12])?;
    let lon_minutes = parse_minutes(&info[12..17])?;
    let lon_hemisphere = bytes[17];
    let symbol_code = bytes[18] as char;

    let mut latitude = lat_degrees as f64 + lat_minutes / 60.0;
    if lat_hemisphere == b'S' {
        latitude = -latitude;
    }
    let mut longitude = lon_degrees as f64 + lon_minutes / 60.0;
    if lon_hemisphere == b'W' {
        longitude = -longitude;
    }

    check_range(latitude, longitude)?;

    let comment = (bytes.len() > 19).then(|| info[19..].to_string());

    Ok(PositionBody {
        latitude,
        longitude,
        symbol: Symbol {
            table: symbol_table,
            code: symbol_code,
        },
        comment,
    })
}

fn parse_digits(s: &str) -> Result<u32, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPosition);
    }
    s.parse().map_err(|_| ParseError::InvalidPosition)
}

/// `MM.mm` / `MMM.mm` minutes field.
fn parse_minutes(s: &str) -> Result<f64, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(ParseError::InvalidPosition);
    }
    s.parse().map_err(|_| ParseError::InvalidPosition)
}

// ---------------------------------------------------------------------------
// Compressed body
// ---------------------------------------------------------------------------

/// Base-91 compressed body: symbol table, 4 latitude bytes, 4 longitude
/// bytes, symbol code, 3 ignored extension bytes, comment.
fn parse_compressed(info: &str) -> Result<PositionBody, ParseError> {
    let bytes = info.as_bytes();
    if bytes.len() < 10 {
        return Err(ParseError::InvalidPosition);
    }

    let symbol_table = bytes[0] as char;
    let lat_value = base91(&bytes[1..5])?;
    let lon_value = base91(&bytes[5..9])?;
    let symbol_code = bytes[9] as char;

    // Two decimal places is the inherent resolution of the encoding.
    let latitude = round2(90.0 - lat_value as f64 / 380926.0);
    let longitude = round2(-180.0 + lon_value as f64 / 190463.0);

    check_range(latitude, longitude)?;

    let comment = (bytes.len() > 13).then(|| info[13..].to_string());

    Ok(PositionBody {
        latitude,
        longitude,
        symbol: Symbol {
            table: symbol_table,
            code: symbol_code,
        },
        comment,
    })
}

/// Big-endian base-91 over printable ASCII, digit value = byte - 33.
fn base91(bytes: &[u8]) -> Result<u32, ParseError> {
    let mut value: u32 = 0;
    for &b in bytes {
        if !(33..124).contains(&b) {
            return Err(ParseError::InvalidPosition);
        }
        value = value * 91 + (b - 33) as u32;
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Mic-E body
// ---------------------------------------------------------------------------

/// Mic-E packs latitude, message type, and longitude keys into the
/// destination field; longitude, speed, course, and symbol ride in the
/// first eight payload bytes.
fn parse_mic_e(
    frame: &Ax25Frame,
    received_at: DateTime<Utc>,
) -> Result<PositionReport, ParseError> {
    let info = frame.information.as_bytes();
    if info.len() < 8 {
        return Err(ParseError::InvalidPosition);
    }

    let dest: Vec<char> = frame.destination.base.chars().collect();
    if dest.len() != 6 {
        return Err(ParseError::InvalidPosition);
    }

    let mut digits = [0u8; 6];
    let mut msg_bits = 0u8;
    for (i, &c) in dest.iter().enumerate() {
        let e = dest_entry(c).ok_or(ParseError::InvalidPosition)?;
        digits[i] = e.digit;
        if i < 3 {
            msg_bits = (msg_bits << 1) | e.msg_bit;
        }
    }

    // Destination char 3 carries both hemispheres; char 4 the +100
    // longitude-degree offset.
    let key3 = dest_entry(dest[3]).ok_or(ParseError::InvalidPosition)?;
    let key4 = dest_entry(dest[4]).ok_or(ParseError::InvalidPosition)?;

    let lat_degrees = (digits[0] * 10 + digits[1]) as f64;
    let lat_minutes =
        (digits[2] as u32 * 10 + digits[3] as u32) as f64 + (digits[4] as u32 * 10 + digits[5] as u32) as f64 / 100.0;
    let mut latitude = lat_degrees + lat_minutes / 60.0;
    if key3.ns == 'S' {
        latitude = -latitude;
    }

    let mut lon_degrees = info[0] as i32 - 28;
    if key4.lon_offset > 0 {
        lon_degrees += key4.lon_offset as i32;
    }
    let mut lon_minutes = info[1] as i32 - 28;
    if lon_minutes >= 60 {
        lon_minutes -= 60;
    }
    let lon_hundredths = (info[2] as i32 - 28) as f64 / 100.0;

    let mut longitude = lon_degrees as f64 + (lon_minutes as f64 + lon_hundredths) / 60.0;
    if key3.ew == 'W' {
        longitude = -longitude;
    }

    let latitude = round4(latitude);
    let longitude = round4(longitude);
    check_range(latitude, longitude)?;

    // Speed tens wrap at 80; its ones digit hides in the course byte.
    let mut speed_tens = info[3] as i32 - 28;
    if speed_tens >= 80 {
        speed_tens -= 80;
    }
    let dc = info[4] as i32 - 28;
    let speed = speed_tens * 10 + dc / 10;

    let course = (dc % 10 - 4) * 100 + (info[5] as i32 - 28);

    let symbol = Symbol {
        table: info[6] as char,
        code: info[7] as char,
    };

    let fix = match frame.information_type {
        '`' => Some(FixRecency::Current),
        '\'' => Some(FixRecency::Old),
        _ => None,
    };

    let comment = (info.len() > 8).then(|| frame.information[8..].to_string());

    Ok(PositionReport {
        station: frame.source.clone(),
        destination: frame.destination.clone(),
        path: frame.path.clone(),
        timestamp: received_at,
        latitude,
        longitude,
        symbol: Some(symbol),
        speed: u16::try_from(speed).ok(),
        course: (0..=359).contains(&course).then_some(course as u16),
        status: message_type(msg_bits),
        fix,
        comment,
    })
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

fn check_range(latitude: f64, longitude: f64) -> Result<(), ParseError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(ParseError::InvalidPosition);
    }
    Ok(())
}

/// Round to 2 decimal places.
fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

/// Round to 4 decimal places.
fn round4(val: f64) -> f64 {
    (val * 10000.0).round() / 10000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Callsign;
    use chrono::Timelike;

    fn frame(dest: &str, source: &str, information_type: char, information: &str) -> Ax25Frame {
        Ax25Frame {
            destination: Callsign::parse(dest).unwrap(),
            source: Callsign::parse(source).unwrap(),
            path: Vec::new(),
            information_type,
            information: information.to_string(),
        }
    }

    fn received_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
    }

    // -- Uncompressed --

    #[test]
    fn test_uncompressed_position() {
        let f = frame("TEST", "KG5YOV-9", '!', "4903.50N/07201.75W-This is a test.");
        let report = decode_report(&f, received_at()).unwrap();

        assert_eq!(report.station.to_string(), "KG5YOV-9");
        assert_eq!(report.destination.to_string(), "TEST");
        assert!((report.latitude - 49.05833333333333).abs() < 1e-9);
        assert!((report.longitude + 72.02916666666667).abs() < 1e-9);
        assert_eq!(report.symbol.unwrap().to_string(), "/-");
        assert_eq!(report.comment.as_deref(), Some("This is a test."));
        // No payload timestamp: capture time applies.
        assert_eq!(report.timestamp, received_at());
        assert_eq!(report.speed, None);
        assert_eq!(report.course, None);
    }

    #[test]
    fn test_uncompressed_south_west() {
        let f = frame("TEST", "KG5YOV-9", '=', "3356.00S/15112.00E#");
        let report = decode_report(&f, received_at()).unwrap();
        assert!(report.latitude < 0.0);
        assert!(report.longitude > 0.0);
        assert_eq!(report.comment, None);
    }

    #[test]
    fn test_uncompressed_non_numeric_rejected() {
        let f = frame("TEST", "KG5YOV-9", '!', "4x03.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_uncompressed_truncated_rejected() {
        let f = frame("TEST", "KG5YOV-9", '!', "4903.50N/072");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let f = frame("TEST", "KG5YOV-9", '!', "9903.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_reserved_prefix_rejected() {
        let f = frame("TEST", "KG5YOV-9", '!', "4!03.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::ReservedPrefix)
        );
    }

    // -- Timestamped --

    #[test]
    fn test_timestamp_zulu() {
        let f = frame(
            "TEST",
            "KG5YOV-9",
            '@',
            "092345z4903.50N/07201.75WkThis is a test.",
        );
        let report = decode_report(&f, received_at()).unwrap();

        assert_eq!(report.timestamp.day(), 9);
        assert_eq!(report.timestamp.hour(), 23);
        assert_eq!(report.timestamp.minute(), 45);
        assert_eq!(report.symbol.unwrap().to_string(), "/k");
        assert_eq!(report.comment.as_deref(), Some("This is a test."));
    }

    #[test]
    fn test_timestamp_local() {
        let f = frame(
            "TEST",
            "KG5YOV-9",
            '/',
            "092345/4903.50N/07201.75W-This is a test.",
        );
        let report = decode_report(&f, received_at()).unwrap();

        // Stored in UTC; components check out in the local zone.
        let local = report.timestamp.with_timezone(&Local);
        assert_eq!(local.day(), 9);
        assert_eq!(local.hour(), 23);
        assert_eq!(local.minute(), 45);
    }

    #[test]
    fn test_timestamp_hms() {
        let f = frame(
            "TEST",
            "KG5YOV-9",
            '@',
            "234517h4903.50N/07201.75W-This is a test.",
        );
        let report = decode_report(&f, received_at()).unwrap();

        assert_eq!(report.timestamp.day(), received_at().day());
        assert_eq!(report.timestamp.hour(), 23);
        assert_eq!(report.timestamp.minute(), 45);
        assert_eq!(report.timestamp.second(), 17);
    }

    #[test]
    fn test_timestamp_bad_format_byte() {
        let f = frame("TEST", "KG5YOV-9", '@', "092345x4903.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidTimestamp)
        );
    }

    #[test]
    fn test_timestamp_non_numeric_group() {
        let f = frame("TEST", "KG5YOV-9", '@', "09z345z4903.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidTimestamp)
        );
    }

    #[test]
    fn test_timestamp_invalid_day() {
        let f = frame("TEST", "KG5YOV-9", '@', "402345z4903.50N/07201.75W-abc");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidTimestamp)
        );
    }

    // -- Compressed --

    #[test]
    fn test_compressed_position() {
        let f = frame("TEST", "KG5YOV-9", '!', "/?VJo5Qz1$csTThis is a test.");
        let report = decode_report(&f, received_at()).unwrap();

        assert_eq!(report.latitude, 29.49);
        assert_eq!(report.longitude, -98.74);
        assert_eq!(report.symbol.unwrap().to_string(), "/$");
        assert_eq!(report.comment.as_deref(), Some("This is a test."));
    }

    #[test]
    fn test_compressed_truncated_rejected() {
        let f = frame("TEST", "KG5YOV-9", '!', "/?VJo5");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_compressed_bad_base91_byte() {
        let f = frame("TEST", "KG5YOV-9", '!', "/\x20VJo5Qz1$csT");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    // -- Mic-E --

    #[test]
    fn test_mic_e() {
        let f = frame("2Y3S4V", "KG5YOV-9", '`', "~9'mJD/>'SAHams.org|3");
        let report = decode_report(&f, received_at()).unwrap();

        assert_eq!(report.latitude, 29.5577);
        assert_eq!(report.longitude, -98.4852);
        assert_eq!(report.speed, Some(14));
        assert_eq!(report.course, Some(240));
        assert_eq!(report.symbol.unwrap().to_string(), "/>");
        assert_eq!(report.status, Some(MicEStatus::Special));
        assert_eq!(report.fix, Some(FixRecency::Current));
        assert_eq!(report.comment.as_deref(), Some("'SAHams.org|3"));
    }

    #[test]
    fn test_mic_e_old_fix() {
        let f = frame("2Y3S4V", "KG5YOV-9", '\'', "~9'mJD/>");
        let report = decode_report(&f, received_at()).unwrap();
        assert_eq!(report.fix, Some(FixRecency::Old));
        assert_eq!(report.comment, None);
    }

    #[test]
    fn test_mic_e_table_miss_rejected() {
        // 'Z' has no table entry.
        let f = frame("2Y3Z4V", "KG5YOV-9", '`', "~9'mJD/>");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_mic_e_short_destination_rejected() {
        let f = frame("2Y3S", "KG5YOV-9", '`', "~9'mJD/>");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    #[test]
    fn test_mic_e_short_payload_rejected() {
        let f = frame("2Y3S4V", "KG5YOV-9", '`', "~9'mJD");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::InvalidPosition)
        );
    }

    // -- Dispatch --

    #[test]
    fn test_unsupported_type_rejected() {
        let f = frame("TEST", "KG5YOV-9", '>', "status text");
        assert_eq!(
            decode_report(&f, received_at()),
            Err(ParseError::UnsupportedType('>'))
        );
    }

    #[test]
    fn test_message_type_table() {
        assert_eq!(message_type(0b111), Some(MicEStatus::OffDuty));
        assert_eq!(message_type(0b000), Some(MicEStatus::Emergency));
        assert_eq!(message_type(0b010), Some(MicEStatus::Special));
    }

    #[test]
    fn test_base91() {
        // "?VJo" from the compressed test vector.
        assert_eq!(base91(b"?VJo").unwrap(), 23049832);
        assert!(base91(b"\x20???").is_err());
    }
}
