pub mod errors;
pub use errors::{DashtrackError, DashtrackResult, DemuxError, TrackError};

pub mod packets;
pub use packets::PacketFramer;

pub mod nmea;
pub use nmea::{GeoFix, SentenceExtractor};

pub mod track;
pub use track::{Synchronizer, TrackLog, Trackpoint};

pub mod demux;

use log::info;
use std::path::Path;

/// Run the decode/synchronize/dedupe pass over a framed subtitle stream.
///
/// `pts` holds one presentation timestamp per packet, index-aligned with the
/// packets in `raw`. Packets without telemetry, void fixes, and redundant
/// fixes all advance the cursor without producing a point.
pub fn extract_track(raw: &[u8], pts: &[f64], speed_factor: f64) -> TrackLog {
    let extractor = SentenceExtractor::new();
    let mut synchronizer = Synchronizer::new(pts, speed_factor);

    for payload in PacketFramer::new(raw) {
        let fix = extractor
            .extract(payload)
            .and_then(|body| nmea::decode_rmc(&body));
        synchronizer.push(fix);
    }

    let log = synchronizer.finish();
    info!("Extracted {} trackpoints", log.points.len());
    log
}

/// Demux the first subtitle stream of `path` and extract its track log.
pub fn extract_track_from_file(path: &Path, speed_factor: f64) -> DashtrackResult<TrackLog> {
    let pts = demux::probe_subtitle_pts(path)?;
    if pts.is_empty() {
        info!("No subtitle packets found in {}", path.display());
        return Ok(TrackLog {
            points: Vec::new(),
            first_fix_pts: None,
        });
    }

    let raw = demux::dump_subtitle_stream(path)?;
    Ok(extract_track(&raw, &pts, speed_factor))
}
