use clap::{Parser, Subcommand};
use drik_core::{Observer, Target, apparent_position};
use drik_frames::horizontal_to_unit_vector;
use drik_time::{UtcTime, gst_hours, local_hour_angle_hours, local_sidereal_time_hours};

#[derive(Parser)]
#[command(name = "drik", about = "Apparent-position (azimuth/altitude) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modified Julian Date of a UTC datetime
    Mjd {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// Greenwich Sidereal Time at a UTC datetime
    Gst {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// Local sidereal time and hour angle of a target
    HourAngle {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Right ascension in degrees
        #[arg(long)]
        ra: f64,
    },
    /// Azimuth and altitude of a target
    Position {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Right ascension in degrees
        #[arg(long)]
        ra: f64,
        /// Declination in degrees
        #[arg(long)]
        dec: f64,
        /// Also print the unit direction vector
        #[arg(long)]
        vector: bool,
    },
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(UtcTime::new(year, month, day, hour, minute, second))
}

fn require_utc(s: &str) -> UtcTime {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_mjd(utc: &UtcTime) -> f64 {
    utc.to_mjd().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mjd { date } => {
            let utc = require_utc(&date);
            let mjd = require_mjd(&utc);
            println!("{}: MJD {:.6}", utc, mjd);
        }

        Commands::Gst { date } => {
            let utc = require_utc(&date);
            let mjd = require_mjd(&utc);
            let gst = gst_hours(mjd);
            println!("MJD: {:.6}", mjd);
            println!("GST: {:.6} h", gst);
        }

        Commands::HourAngle { date, lon, ra } => {
            let utc = require_utc(&date);
            let mjd = require_mjd(&utc);
            let gst = gst_hours(mjd);
            let lst = local_sidereal_time_hours(gst, lon);
            let hour_angle = local_hour_angle_hours(gst, lon, ra);
            println!("GST: {:.6} h", gst);
            println!("LST: {:.6} h", lst);
            println!("Hour angle: {:.6} h", hour_angle);
        }

        Commands::Position {
            date,
            lat,
            lon,
            ra,
            dec,
            vector,
        } => {
            let utc = require_utc(&date);
            let observer = Observer::new(lat, lon);
            let target = Target::new(ra, dec);
            match apparent_position(&observer, &target, &utc) {
                Ok(pos) => {
                    println!(
                        "MJD: {:.6}  GST: {:.6} h  H: {:.6} h",
                        pos.mjd, pos.gst_hours, pos.hour_angle_hours
                    );
                    println!(
                        "Azimuth: {:.4} deg  Altitude: {:.4} deg",
                        pos.horizontal.azimuth_deg, pos.horizontal.altitude_deg
                    );
                    if vector {
                        let v = horizontal_to_unit_vector(&pos.horizontal);
                        println!("Direction: [{:.6}, {:.6}, {:.6}]", v[0], v[1], v[2]);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
