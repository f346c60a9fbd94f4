use serde::Serialize;

/// A deduplicated GPS point tied to a video-relative second.
///
/// Latitude/longitude render at 7 decimals, speed and course at 1 decimal.
/// `sec` counts whole seconds from video start after the timelapse speed
/// factor is applied.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trackpoint {
    pub lat: f64,
    pub lon: f64,
    /// Speed in km/h
    pub speed: f64,
    /// Course over ground in degrees
    pub course: f64,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Video-relative second offset
    pub sec: i64,
}

/// Result of a full synchronization pass over a subtitle stream.
#[derive(Debug)]
pub struct TrackLog {
    pub points: Vec<Trackpoint>,
    /// Presentation timestamp of the first accepted fix, if any
    pub first_fix_pts: Option<f64>,
}

impl TrackLog {
    /// Video-relative time of the first valid fix after the speed factor is
    /// applied. External tooling uses this to align playback start.
    pub fn gps_offset(&self, speed_factor: f64) -> Option<f64> {
        self.first_fix_pts.map(|pts| pts / speed_factor)
    }
}
