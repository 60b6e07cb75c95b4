//! Per-station accumulation of position reports.
//!
//! Pure state machine, no locking and no notification bus: callers own
//! the instance, feed it reports in arrival order, and get back a
//! `StationEvent` describing what changed. Consecutive identical
//! reports from the same station (digipeated copies of one beacon) are
//! suppressed.

use std::collections::HashMap;

use crate::types::{Callsign, PositionReport};

/// Change produced by delivering one report.
#[derive(Debug, Clone, PartialEq)]
pub enum StationEvent {
    /// First report ever heard from this station.
    NewStation { station: Callsign },
    /// Another report appended to a known station's track.
    ReportAdded { station: Callsign, count: usize },
}

/// Keyed store of every report heard, newest last per station.
#[derive(Debug, Default)]
pub struct StationHistory {
    stations: HashMap<Callsign, Vec<PositionReport>>,

    // Counters
    pub total_reports: u64,
    pub duplicates: u64,
}

impl StationHistory {
    pub fn new() -> Self {
        StationHistory::default()
    }

    /// Ingest one report. Returns `None` when the report duplicates the
    /// station's most recent one.
    pub fn receive(&mut self, report: PositionReport) -> Option<StationEvent> {
        let station = report.station.clone();
        let track = self.stations.entry(station.clone()).or_default();

        if track.last() == Some(&report) {
            self.duplicates += 1;
            return None;
        }

        let is_new = track.is_empty();
        track.push(report);
        let count = track.len();
        self.total_reports += 1;

        if is_new {
            Some(StationEvent::NewStation { station })
        } else {
            Some(StationEvent::ReportAdded { station, count })
        }
    }

    /// All reports heard from a station, oldest first.
    pub fn reports(&self, station: &Callsign) -> Option<&[PositionReport]> {
        self.stations.get(station).map(Vec::as_slice)
    }

    /// Most recent report from a station.
    pub fn latest(&self, station: &Callsign) -> Option<&PositionReport> {
        self.stations.get(station).and_then(|track| track.last())
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Callsign> {
        self.stations.keys()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
