use std::env;
use std::path::{Path, PathBuf};
use std::process;

use dashtrack::track::{format_gps_offset, write_gpx};
use dashtrack::DashtrackResult;

fn main() {
    let mut speed_factor = 1.0f64;
    let mut file: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-speed" | "--speed" => {
                let value = args.next().unwrap_or_default();
                speed_factor = match value.parse() {
                    Ok(v) if v > 0.0 => v,
                    _ => {
                        eprintln!("invalid speed factor {:?}", value);
                        process::exit(1);
                    }
                };
            }
            _ => file = Some(PathBuf::from(arg)),
        }
    }

    let file = match file {
        Some(file) => file,
        None => {
            eprintln!("usage: dashtrack [-speed N] <file.mp4>");
            eprintln!("  -speed N   timelapse speed factor (e.g. 3 for 3x)");
            process::exit(1);
        }
    };

    if let Err(e) = run(&file, speed_factor) {
        eprintln!("dashtrack: {}", e);
        process::exit(1);
    }
}

fn run(file: &Path, speed_factor: f64) -> DashtrackResult<()> {
    let log = dashtrack::extract_track_from_file(file, speed_factor)?;

    // With zero fixes there is nothing worth writing; the run still succeeds
    // and reports a zero offset.
    if !log.points.is_empty() {
        let gpx_path = file.with_extension("gpx");
        let name = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_gpx(&gpx_path, &name, &log.points)?;
    }

    // Single machine-readable line consumed by downstream tooling
    println!("{}", format_gps_offset(log.gps_offset(speed_factor)));
    Ok(())
}
