mod gpx;
mod synchronizer;
mod types;

pub use gpx::{format_gps_offset, render_gpx, write_gpx};
pub use synchronizer::Synchronizer;
pub use types::{TrackLog, Trackpoint};

#[cfg(test)]
pub mod unit_test;
