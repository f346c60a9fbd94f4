use super::types::Trackpoint;
use crate::errors::{DashtrackResult, TrackError};
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render a GPX 1.1 document with one track containing one segment.
///
/// Each point's timestamp combines its calendar date with a clock derived
/// from the video-relative second. The clock does not roll the date over, so
/// hours keep counting past 23 on tracks longer than a day of video time.
pub fn render_gpx(name: &str, points: &[Trackpoint]) -> String {
    let mut gpx = String::new();
    gpx.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    gpx.push_str("<gpx version=\"1.1\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n");
    gpx.push_str("  <trk>\n");
    let _ = writeln!(gpx, "    <name>{}</name>", name);
    gpx.push_str("    <trkseg>\n");

    for point in points {
        let hours = point.sec / 3600;
        let minutes = (point.sec % 3600) / 60;
        let seconds = point.sec % 60;

        let _ = writeln!(
            gpx,
            "      <trkpt lat=\"{:.7}\" lon=\"{:.7}\"><time>{}T{:02}:{:02}:{:02}Z</time><speed>{:.1}</speed><course>{:.1}</course></trkpt>",
            point.lat, point.lon, point.date, hours, minutes, seconds, point.speed, point.course,
        );
    }

    gpx.push_str("    </trkseg>\n");
    gpx.push_str("  </trk>\n");
    gpx.push_str("</gpx>\n");
    gpx
}

/// Render the track and write it to `path` in one shot, so a failed write
/// never leaves a partial document behind.
pub fn write_gpx(path: &Path, name: &str, points: &[Trackpoint]) -> DashtrackResult<()> {
    let document = render_gpx(name, points);
    fs::write(path, &document).map_err(|e| {
        TrackError::new(format!("failed to write {}: {}", path.display(), e))
    })?;
    info!("Wrote {} trackpoints to {}", points.len(), path.display());
    Ok(())
}

/// Format the GPS offset line printed on stdout: one decimal place, or the
/// literal "0" when no fix was ever accepted.
pub fn format_gps_offset(offset: Option<f64>) -> String {
    match offset {
        Some(value) => format!("{:.1}", value),
        None => "0".to_string(),
    }
}
