//! Sky Snapshot Tool
//!
//! This binary computes an observed-sky snapshot for a given instant,
//! observer location and viewing direction, and prints the projected
//! plane positions of the Sun, the Moon, the planets and a reproducible
//! synthetic star field.
//!
//! Usage:
//!   cargo run --bin skysnap -- --time 2020-04-04T12:00:00Z --lon 6.57 --lat 46.52

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use serde_json::json;

use skyplane::catalog::{self, StarCatalog};
use skyplane::coordinates::{CartesianCoordinates, GeographicCoordinates, HorizontalCoordinates};
use skyplane::{ObservedSky, SkyObject, StereographicProjection};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Snapshot Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes projected sky positions for an instant, observer and viewing direction",
    long_about = None
)]
struct Args {
    /// Observation instant, RFC 3339 (defaults to now)
    #[arg(short, long)]
    time: Option<String>,

    /// Observer longitude in degrees (east positive)
    #[arg(long, default_value_t = 6.57, allow_hyphen_values = true)]
    lon: f64,

    /// Observer latitude in degrees (north positive)
    #[arg(long, default_value_t = 46.52, allow_hyphen_values = true)]
    lat: f64,

    /// Viewing-center azimuth in degrees
    #[arg(long, default_value_t = 180.0)]
    az: f64,

    /// Viewing-center altitude in degrees
    #[arg(long, default_value_t = 45.0, allow_hyphen_values = true)]
    alt: f64,

    /// Number of synthetic stars to generate
    #[arg(long, default_value_t = 50)]
    stars: usize,

    /// Seed for the synthetic star field
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit the snapshot as JSON instead of a table
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Pick the object closest to plane point X,Y (within 0.1)
    #[arg(long, value_names = ["X", "Y"], num_args = 2, allow_hyphen_values = true)]
    pick: Option<Vec<f64>>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_object_row(name: &str, point: &CartesianCoordinates, magnitude: f64) {
    println!("{:<12} {:>10.5} {:>10.5} {:>8.2}", name, point.x, point.y, magnitude);
}

fn display_table(sky: &ObservedSky<'_>) {
    print_section_header("Solar system");
    println!("{:<12} {:>10} {:>10} {:>8}", "Object", "x", "y", "mag");
    print_object_row("Sun", &sky.sun_point(), sky.sun().body().magnitude());
    print_object_row("Moon", &sky.moon_point(), sky.moon().body().magnitude());
    for (body, point) in sky.planets().iter().zip(sky.planet_points()) {
        print_object_row(body.name(), point, body.magnitude());
    }
    println!("Moon phase: {:.1}% illuminated", sky.moon().phase() * 100.0);

    print_section_header(&format!("Stars ({} total)", sky.catalog().len()));
    println!("{:<12} {:>10} {:>10} {:>8}", "Star", "x", "y", "mag");
    for (star, point) in sky.catalog().stars().iter().zip(sky.star_points()) {
        print_object_row(star.name(), point, star.magnitude());
    }
}

fn display_json(sky: &ObservedSky<'_>, when: &DateTime<Utc>) -> Result<()> {
    let point_json = |p: &CartesianCoordinates| json!({ "x": p.x, "y": p.y });

    let planets: Vec<_> = sky
        .planets()
        .iter()
        .zip(sky.planet_points())
        .map(|(body, point)| {
            json!({
                "name": body.name(),
                "point": point_json(point),
                "magnitude": body.magnitude(),
                "angular_size_rad": body.angular_size(),
            })
        })
        .collect();

    let stars: Vec<_> = sky
        .catalog()
        .stars()
        .iter()
        .zip(sky.star_points())
        .map(|(star, point)| {
            json!({
                "name": star.name(),
                "point": point_json(point),
                "magnitude": star.magnitude(),
            })
        })
        .collect();

    let payload = json!({
        "time": when.to_rfc3339(),
        "sun": {
            "point": point_json(&sky.sun_point()),
            "magnitude": sky.sun().body().magnitude(),
        },
        "moon": {
            "point": point_json(&sky.moon_point()),
            "phase": sky.moon().phase(),
        },
        "planets": planets,
        "stars": stars,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

fn display_pick(sky: &ObservedSky<'_>, x: f64, y: f64) {
    let point = CartesianCoordinates::new(x, y);
    match sky.object_closest_to(&point, 0.1) {
        Some(object) => {
            let target = match object {
                SkyObject::Sun => sky.sun_point(),
                SkyObject::Moon => sky.moon_point(),
                SkyObject::Planet(planet) => {
                    let index = skyplane::bodies::Planet::OBSERVABLE
                        .iter()
                        .position(|p| *p == planet)
                        .unwrap_or(0);
                    sky.planet_points()[index]
                }
                SkyObject::Star(index) => sky.star_points()[index],
            };
            println!(
                "\nClosest object to ({}, {}): {} at distance {:.5}",
                x,
                y,
                sky.name_of(&object),
                point.distance_to(&target)
            );
        }
        None => println!("\nNo object within 0.1 of ({}, {})", x, y),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let when = match &args.time {
        Some(text) => DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc),
        None => Utc::now(),
    };
    let observer = GeographicCoordinates::of_deg(args.lon, args.lat)?;
    let center = HorizontalCoordinates::of_deg(args.az, args.alt)?;
    let projection = StereographicProjection::new(center);
    let catalog: StarCatalog = catalog::synthetic_catalog(args.seed, args.stars);

    let sky = ObservedSky::new(&when, &observer, &projection, &catalog)?;

    if args.json {
        display_json(&sky, &when)?;
    } else {
        println!("Sky at {} for observer {}", when, observer);
        println!("Viewing center: {}", center);
        display_table(&sky);
    }

    if let Some(pick) = &args.pick {
        display_pick(&sky, pick[0], pick[1]);
    }

    Ok(())
}
