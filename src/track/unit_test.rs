use crate::nmea::GeoFix;
use crate::track::{format_gps_offset, render_gpx, Synchronizer};

#[cfg(test)]
mod test_helpers {
    use crate::nmea::GeoFix;

    pub fn fix(time: &str, lat: f64, lon: f64, speed_kmh: f64, course: f64) -> GeoFix {
        GeoFix {
            lat,
            lon,
            speed_kmh,
            course,
            date: "1994-03-23".to_string(),
            time: time.to_string(),
            valid: true,
        }
    }
}

#[test]
fn test_same_truncated_nmea_second_collapses() {
    use test_helpers::fix;
    let pts = [0.0, 0.5];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix("123519.00", 48.1, 11.5, 40.0, 84.0)));
    sync.push(Some(fix("123519.99", 48.2, 11.6, 41.0, 85.0)));
    let log = sync.finish();
    assert_eq!(log.points.len(), 1);
    assert_eq!(log.points[0].lat, 48.1);
}

#[test]
fn test_identical_rendered_values_collapse() {
    use test_helpers::fix;
    let pts = [0.0, 1.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix("123519", 48.1, 11.5, 40.0, 84.0)));
    // Different NMEA second, bit-identical rendered output
    sync.push(Some(fix("123520", 48.1, 11.5, 40.0, 84.0)));
    let log = sync.finish();
    assert_eq!(log.points.len(), 1);
}

#[test]
fn test_value_dedup_uses_output_precision() {
    use test_helpers::fix;
    let pts = [0.0, 1.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix("123519", 48.1, 11.5, 40.0, 84.0)));
    // Differs only past the 7th decimal, rendering identically
    sync.push(Some(fix("123520", 48.1 + 1e-9, 11.5, 40.0, 84.0)));
    let log = sync.finish();
    assert_eq!(log.points.len(), 1);
}

#[test]
fn test_cursor_exhaustion_discards_excess_fixes() {
    use test_helpers::fix;
    let pts = [0.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix("123519", 48.1, 11.5, 40.0, 84.0)));
    sync.push(Some(fix("123520", 48.2, 11.6, 41.0, 85.0)));
    sync.push(Some(fix("123521", 48.3, 11.7, 42.0, 86.0)));
    let log = sync.finish();
    assert_eq!(log.points.len(), 1);
    assert_eq!(log.first_fix_pts, Some(0.0));
}

#[test]
fn test_fixless_packets_still_advance_the_cursor() {
    use test_helpers::fix;
    let pts = [0.0, 5.0, 9.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(None);
    let mut void = fix("123519", 48.1, 11.5, 40.0, 84.0);
    void.valid = false;
    sync.push(Some(void));
    sync.push(Some(fix("123520", 48.2, 11.6, 41.0, 85.0)));
    let log = sync.finish();
    assert_eq!(log.points.len(), 1);
    // The accepted fix sits at packet index 2
    assert_eq!(log.points[0].sec, 9);
    assert_eq!(log.first_fix_pts, Some(9.0));
}

#[test]
fn test_sec_is_floored_and_scaled_by_speed_factor() {
    use test_helpers::fix;
    let pts = [12.3];
    let mut sync = Synchronizer::new(&pts, 3.0);
    sync.push(Some(fix("123519", 48.1, 11.5, 40.0, 84.0)));
    let log = sync.finish();
    assert_eq!(log.points[0].sec, 4);
    assert_eq!(format_gps_offset(log.gps_offset(3.0)), "4.1");
}

#[test]
fn test_sec_is_non_decreasing_for_non_decreasing_pts() {
    use test_helpers::fix;
    let pts = [0.2, 0.9, 1.4, 1.4, 2.8];
    let mut sync = Synchronizer::new(&pts, 1.0);
    for (i, _) in pts.iter().enumerate() {
        sync.push(Some(fix(
            &format!("12351{}", i),
            48.0 + i as f64,
            11.0,
            40.0,
            84.0,
        )));
    }
    let log = sync.finish();
    for pair in log.points.windows(2) {
        assert!(pair[0].sec <= pair[1].sec);
    }
}

#[test]
fn test_first_fix_pts_survives_value_dedup() {
    use test_helpers::fix;
    let pts = [3.0, 4.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix("123519", 48.1, 11.5, 40.0, 84.0)));
    sync.push(Some(fix("123520", 48.1, 11.5, 40.0, 84.0)));
    let log = sync.finish();
    // Second fix was discarded by the value filter, first PTS stands
    assert_eq!(log.first_fix_pts, Some(3.0));
}

#[test]
fn test_empty_run_reports_no_offset() {
    let pts = [0.0, 1.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(None);
    sync.push(None);
    let log = sync.finish();
    assert!(log.points.is_empty());
    assert_eq!(log.first_fix_pts, None);
    assert_eq!(format_gps_offset(log.gps_offset(1.0)), "0");
}

#[test]
fn test_render_gpx_document_shape() {
    let fix = GeoFix {
        lat: 48.1173,
        lon: 11.0 + 31.0 / 60.0,
        speed_kmh: 22.4 * 1.852,
        course: 84.4,
        date: "1994-03-23".to_string(),
        time: "123519".to_string(),
        valid: true,
    };
    let pts = [1.0];
    let mut sync = Synchronizer::new(&pts, 1.0);
    sync.push(Some(fix));
    let log = sync.finish();

    let gpx = render_gpx("drive-0042", &log.points);
    assert!(gpx.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(gpx.contains("<gpx version=\"1.1\" xmlns=\"http://www.topografix.com/GPX/1/1\">"));
    assert!(gpx.contains("<name>drive-0042</name>"));
    assert!(gpx.contains(
        "<trkpt lat=\"48.1173000\" lon=\"11.5166667\">\
         <time>1994-03-23T00:00:01Z</time>\
         <speed>41.5</speed><course>84.4</course></trkpt>"
    ));
    assert!(gpx.ends_with("</gpx>\n"));
}

#[test]
fn test_render_gpx_clock_runs_past_midnight() {
    let point = crate::track::Trackpoint {
        lat: 1.0,
        lon: 2.0,
        speed: 0.0,
        course: 0.0,
        date: "2025-01-05".to_string(),
        sec: 90_061, // 25h 1m 1s of video-relative time
    };
    let gpx = render_gpx("timelapse", &[point]);
    // The date never rolls over; the clock just keeps counting
    assert!(gpx.contains("<time>2025-01-05T25:01:01Z</time>"));
}

#[test]
fn test_format_gps_offset() {
    assert_eq!(format_gps_offset(None), "0");
    assert_eq!(format_gps_offset(Some(1.0)), "1.0");
    assert_eq!(format_gps_offset(Some(4.1)), "4.1");
    assert_eq!(format_gps_offset(Some(12.34)), "12.3");
}
