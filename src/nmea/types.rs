use serde::Serialize;

/// A single RMC fix decoded from one subtitle packet.
///
/// Coordinates are hemisphere-adjusted decimal degrees, speed is km/h. The
/// `time` field keeps the raw `HHMMSS[.sss]` string from the sentence so the
/// synchronizer can dedup on whole seconds.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
    pub speed_kmh: f64,
    pub course: f64,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Raw UTC time of day, `HHMMSS[.sss]`
    pub time: String,
    /// True when the sentence status field was "A" (autonomous fix)
    pub valid: bool,
}
