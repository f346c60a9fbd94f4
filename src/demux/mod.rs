//! Thin wrappers around ffprobe/ffmpeg that supply the two pipeline inputs:
//! the per-packet presentation timestamps and the raw framed subtitle stream.
//! Any failure here is fatal for the run; there is nothing to align a track
//! against without them.

use crate::errors::{DashtrackError, DashtrackResult, DemuxError};
use log::info;
use std::path::Path;
use std::process::Command;


/// Presentation timestamps of every packet in the first subtitle stream, in
/// packet order.
pub fn probe_subtitle_pts(path: &Path) -> DashtrackResult<Vec<f64>> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "s:0",
            "-show_entries",
            "packet=pts_time",
            "-of",
            "csv=p=0",
        ])
        .arg(path)
        .output()
        .map_err(|e| DemuxError::new(format!("failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        return Err(DashtrackError::Demux(DemuxError::new(format!(
            "ffprobe exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ))));
    }

    let pts = parse_pts_lines(&String::from_utf8_lossy(&output.stdout))?;
    info!("Probed {} subtitle packet timestamps", pts.len());
    Ok(pts)
}

/// Dump the raw subtitle stream (length-prefixed packets) to memory.
pub fn dump_subtitle_stream(path: &Path) -> DashtrackResult<Vec<u8>> {
    let output = Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args(["-map", "0:s:0", "-c", "copy", "-f", "rawvideo", "-"])
        .output()
        .map_err(|e| DemuxError::new(format!("failed to run ffmpeg: {}", e)))?;

    if !output.status.success() {
        return Err(DashtrackError::Demux(DemuxError::new(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ))));
    }

    info!("Dumped {} bytes of raw subtitle data", output.stdout.len());
    Ok(output.stdout)
}

/// Parse ffprobe's one-value-per-line pts_time output. Blank lines are
/// skipped; a malformed value is fatal since nothing downstream can be
/// aligned against untrustworthy timestamps.
fn parse_pts_lines(text: &str) -> DashtrackResult<Vec<f64>> {
    let mut pts = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: f64 = line
            .parse()
            .map_err(|_| DemuxError::new(format!("bad PTS value {:?} from ffprobe", line)))?;
        pts.push(value);
    }
    Ok(pts)
}
