//! TCP ingest pipeline.
//!
//! Two tasks joined by a bounded channel: the reader owns the socket
//! and the KISS deframer, the decoder owns the AX.25/APRS parse and
//! the station history. The channel bound gives backpressure — when
//! the decoder falls behind the reader stalls rather than dropping
//! frames, so delivery order matches arrival order.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use aprs_core::{decode_report, Ax25Frame, Deframer, RawByteFrame, StationEvent, StationHistory};

/// Depth of the reader → decoder handoff queue.
const FRAME_QUEUE_DEPTH: usize = 64;

const READ_BUF_SIZE: usize = 4096;
const STATS_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Default)]
struct Counters {
    frames: u64,
    link_rejects: u64,
    payload_rejects: u64,
    reports: u64,
}

/// Connect to a KISS TNC and run the pipeline until EOF or ctrl-c.
pub async fn listen(host: &str, port: u16) -> std::io::Result<()> {
    let stream = TcpStream::connect((host, port)).await?;
    info!(host, port, "connected to TNC");

    let (tx, rx) = mpsc::channel(FRAME_QUEUE_DEPTH);
    let decoder = tokio::spawn(decode_frames(rx));

    let result = read_frames(stream, tx).await;

    // Reader is done (EOF, socket error, or interrupt). Its sender is
    // dropped, so the decoder drains whatever is still queued and
    // returns the accumulated history.
    match decoder.await {
        Ok(history) => info!(
            stations = history.station_count(),
            reports = history.total_reports,
            duplicates = history.duplicates,
            "session complete"
        ),
        Err(e) => warn!("decoder task failed: {e}"),
    }

    result
}

/// Reader task: pull bytes off the transport, deframe, and hand each
/// complete frame to the decoder. `send().await` blocks when the queue
/// is full; frames are never dropped here.
async fn read_frames<R>(mut stream: R, tx: mpsc::Sender<RawByteFrame>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut deframer = Deframer::new();
    let mut buf = vec![0u8; READ_BUF_SIZE];

    loop {
        let n = tokio::select! {
            res = stream.read(&mut buf) => res?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt, closing transport");
                return Ok(());
            }
        };
        if n == 0 {
            info!("TNC closed the connection");
            return Ok(());
        }

        for frame in deframer.push(&buf[..n]) {
            if tx.send(frame).await.is_err() {
                // Decoder went away; nothing left to deliver to.
                return Ok(());
            }
        }
    }
}

/// Decoder task: drains the frame queue in order, feeding the station
/// history and logging periodic stats.
async fn decode_frames(mut rx: mpsc::Receiver<RawByteFrame>) -> StationHistory {
    let mut history = StationHistory::new();
    let mut counters = Counters::default();
    let mut stats = tokio::time::interval(Duration::from_secs(STATS_INTERVAL_SECS));
    stats.tick().await; // first tick fires immediately

    loop {
        tokio::select! {
            frame = rx.recv() => {
                let Some(frame) = frame else { break };
                handle_frame(&frame, &mut history, &mut counters);
            }
            _ = stats.tick() => {
                info!(
                    frames = counters.frames,
                    reports = counters.reports,
                    link_rejects = counters.link_rejects,
                    payload_rejects = counters.payload_rejects,
                    stations = history.station_count(),
                    "pipeline stats"
                );
            }
        }
    }

    history
}

/// Run one deframed frame through link decode and payload parse.
/// Rejects are counted and logged at debug, never fatal — the channel
/// carries plenty of traffic this pipeline doesn't handle.
fn handle_frame(frame: &RawByteFrame, history: &mut StationHistory, counters: &mut Counters) {
    counters.frames += 1;

    let link = match Ax25Frame::decode(frame.bytes()) {
        Ok(f) => f,
        Err(e) => {
            counters.link_rejects += 1;
            debug!(error = %e, "link frame rejected");
            return;
        }
    };
    debug!(frame = %link, "heard");

    match decode_report(&link, Utc::now()) {
        Ok(report) => {
            counters.reports += 1;
            match history.receive(report.clone()) {
                Some(StationEvent::NewStation { station }) => info!(
                    %station,
                    lat = report.latitude,
                    lon = report.longitude,
                    "new station"
                ),
                Some(StationEvent::ReportAdded { station, count }) => info!(
                    %station,
                    lat = report.latitude,
                    lon = report.longitude,
                    count,
                    "position update"
                ),
                None => debug!(station = %report.station, "duplicate report suppressed"),
            }
        }
        Err(e) => {
            counters.payload_rejects += 1;
            debug!(error = %e, "payload rejected");
        }
    }
}

/// Offline mode: run a KISS capture file through the same decode path
/// and print each report, as monitor text or newline-delimited JSON.
pub fn decode_file(path: &Path, json: bool) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;

    let mut deframer = Deframer::new();
    let mut history = StationHistory::new();
    let mut counters = Counters::default();
    let received_at = Utc::now();

    // A trailing partial frame with no closing delimiter is incomplete
    // and stays in the deframer, same as on a live connection.
    for frame in &deframer.push(&bytes) {
        counters.frames += 1;
        let link = match Ax25Frame::decode(frame.bytes()) {
            Ok(f) => f,
            Err(_) => {
                counters.link_rejects += 1;
                continue;
            }
        };
        match decode_report(&link, received_at) {
            Ok(report) => {
                counters.reports += 1;
                if json {
                    let line = serde_json::to_string(&report).map_err(std::io::Error::other)?;
                    println!("{line}");
                } else {
                    println!("{link}");
                    println!("  {report:?}");
                }
                history.receive(report);
            }
            Err(_) => counters.payload_rejects += 1,
        }
    }

    eprintln!(
        "{} frames, {} reports, {} stations ({} link rejects, {} payload rejects)",
        counters.frames,
        counters.reports,
        history.station_count(),
        counters.link_rejects,
        counters.payload_rejects
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
