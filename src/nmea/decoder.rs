use super::types::GeoFix;

const KNOTS_TO_KMH: f64 = 1.852;

/// Decode the field body of an RMC sentence into a [`GeoFix`].
///
/// The body is the comma-separated text after the sentence identifier:
/// 0=UTC time `HHMMSS[.sss]`, 1=status, 2=latitude, 3=N/S, 4=longitude,
/// 5=E/W, 6=speed in knots, 7=course, 8=date `DDMMYY`. Returns `None` when
/// fewer than 9 fields are present. Malformed numeric sub-fields decode as
/// zero and a malformed date as the epoch sentinel, so one bad field never
/// drops an otherwise usable fix.
pub fn decode_rmc(body: &str) -> Option<GeoFix> {
    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() < 9 {
        return None;
    }

    let knots: f64 = fields[6].parse().unwrap_or(0.0);

    Some(GeoFix {
        lat: parse_coordinate(fields[2], fields[3]),
        lon: parse_coordinate(fields[4], fields[5]),
        speed_kmh: knots * KNOTS_TO_KMH,
        course: fields[7].parse().unwrap_or(0.0),
        date: parse_date(fields[8]),
        time: fields[0].to_string(),
        valid: fields[1] == "A",
    })
}

/// Convert an NMEA `DDDMM.MMMM` coordinate with its hemisphere letter into
/// signed decimal degrees.
///
/// The two digits immediately before the decimal point are whole minutes;
/// everything before them is whole degrees. A missing decimal point, or one
/// leaving no room for the minute digits, yields 0.
pub fn parse_coordinate(raw: &str, hemisphere: &str) -> f64 {
    if raw.is_empty() || !raw.is_ascii() {
        return 0.0;
    }

    let dot = match raw.find('.') {
        Some(idx) if idx >= 2 => idx,
        _ => return 0.0,
    };

    let degrees: f64 = raw[..dot - 2].parse().unwrap_or(0.0);
    let minutes: f64 = raw[dot - 2..].parse().unwrap_or(0.0);

    let mut result = degrees + minutes / 60.0;
    if hemisphere == "S" || hemisphere == "W" {
        result = -result;
    }
    result
}

/// Convert an NMEA `DDMMYY` date into ISO `YYYY-MM-DD`.
///
/// Two-digit years below 80 land in the 2000s, the rest in the 1900s. Too
/// short a field falls back to the epoch sentinel.
pub fn parse_date(raw: &str) -> String {
    if raw.len() < 6 || !raw.is_ascii() {
        return "1970-01-01".to_string();
    }

    let dd = &raw[0..2];
    let mm = &raw[2..4];
    let yy: i32 = raw[4..6].parse().unwrap_or(0);
    let year = if yy < 80 { 2000 + yy } else { 1900 + yy };

    format!("{}-{}-{}", year, mm, dd)
}
