use super::types::{TrackLog, Trackpoint};
use crate::nmea::GeoFix;
use log::debug;

/// Pairs decoded fixes with packet presentation timestamps and filters out
/// redundant ones.
///
/// Dashcams emit RMC sentences faster than the receiver actually updates, so
/// two filters run in sequence: first on the fix's UTC time truncated to
/// whole seconds, then on the rendered lat/lon/speed/course values (which
/// collapses stationary stretches). The packet cursor advances exactly once
/// per packet whatever the outcome, keeping packet index and timestamp index
/// aligned.
pub struct Synchronizer<'a> {
    pts: &'a [f64],
    speed_factor: f64,
    cursor: usize,
    last_nmea_time: String,
    last_key: String,
    first_fix_pts: Option<f64>,
    points: Vec<Trackpoint>,
}

impl<'a> Synchronizer<'a> {
    /// `pts` holds one presentation timestamp per subtitle packet, in packet
    /// order. `speed_factor` scales timestamps for timelapse footage (1.0 =
    /// real time).
    pub fn new(pts: &'a [f64], speed_factor: f64) -> Self {
        Self {
            pts,
            speed_factor,
            cursor: 0,
            last_nmea_time: String::new(),
            last_key: String::new(),
            first_fix_pts: None,
            points: Vec::new(),
        }
    }

    /// Consume one packet's outcome. `fix` is `None` when the packet carried
    /// no telemetry sentence; invalid (void) fixes count the same.
    pub fn push(&mut self, fix: Option<GeoFix>) {
        if let Some(fix) = fix {
            if fix.valid {
                self.accept_fix(fix);
            }
        }
        self.cursor += 1;
    }

    fn accept_fix(&mut self, fix: GeoFix) {
        if self.cursor >= self.pts.len() {
            debug!("fix at packet {} has no timestamp, dropping", self.cursor);
            return;
        }

        // Coarse filter: UTC time truncated to whole seconds
        let time_key = match fix.time.find('.') {
            Some(idx) => &fix.time[..idx],
            None => fix.time.as_str(),
        };
        if time_key == self.last_nmea_time {
            return;
        }
        self.last_nmea_time = time_key.to_string();

        let pts = self.pts[self.cursor];
        if self.first_fix_pts.is_none() {
            self.first_fix_pts = Some(pts);
        }

        let sec = (pts / self.speed_factor).floor() as i64;

        // Fine filter: rendered values at output precision
        let key = format!(
            "{:.7},{:.7},{:.1},{:.1}",
            fix.lat, fix.lon, fix.speed_kmh, fix.course
        );
        if key == self.last_key {
            return;
        }
        self.last_key = key;

        self.points.push(Trackpoint {
            lat: fix.lat,
            lon: fix.lon,
            speed: fix.speed_kmh,
            course: fix.course,
            date: fix.date,
            sec,
        });
    }

    /// Finish the pass and hand over the accumulated track log.
    pub fn finish(self) -> TrackLog {
        debug!(
            "synchronized {} trackpoints from {} packets",
            self.points.len(),
            self.cursor
        );
        TrackLog {
            points: self.points,
            first_fix_pts: self.first_fix_pts,
        }
    }
}
