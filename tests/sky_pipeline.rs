//! End-to-end pipeline test: time scale, orbital models, frame conversions
//! and the stereographic projection chained together the way a renderer
//! consumes them.

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};

use skyplane::catalog::{Star, StarCatalog};
use skyplane::coordinates::{
    CartesianCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
use skyplane::time::{sidereal, Epoch};
use skyplane::{ObservedSky, SkyObject, StereographicProjection};

const EPS: f64 = 1e-9;

fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 4, 4, 12, 0, 0).unwrap()
}

fn observer() -> GeographicCoordinates {
    GeographicCoordinates::of_deg(6.57, 46.52).unwrap()
}

fn projection() -> StereographicProjection {
    StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 45.0).unwrap())
}

fn rigel() -> Star {
    Star::new(
        24436,
        "Rigel",
        EquatorialCoordinates::of(
            5.2423 * std::f64::consts::PI / 12.0,
            -8.2016_f64.to_radians(),
        )
        .unwrap(),
        0.18,
        -0.03,
    )
    .unwrap()
}

fn reference_sky(catalog: &StarCatalog) -> ObservedSky<'_> {
    ObservedSky::new(&reference_instant(), &observer(), &projection(), catalog).unwrap()
}

#[test]
fn test_time_scale_agrees_with_reference() {
    let when = reference_instant();
    assert_relative_eq!(Epoch::J2010.days_until(&when), 3747.5, epsilon = 1e-12);
    assert_relative_eq!(
        sidereal::local(&when, &observer()),
        0.346_194_689_878_898_56,
        epsilon = 1e-6
    );
}

#[test]
fn test_sun_and_moon_projected_positions() {
    let catalog = StarCatalog::new(Vec::new(), Vec::new()).unwrap();
    let sky = reference_sky(&catalog);

    assert_relative_eq!(sky.sun_point().x, 0.050_912_088_777_476_97, epsilon = EPS);
    assert_relative_eq!(sky.sun_point().y, 0.039_110_575_657_266_375, epsilon = EPS);

    assert_relative_eq!(sky.moon_point().x, -1.800_787_028_203_774_6, epsilon = EPS);
    assert_relative_eq!(sky.moon_point().y, 0.746_329_704_838_400_4, epsilon = EPS);
    assert_relative_eq!(sky.moon().phase(), 0.816_737_827_626_326_4, epsilon = EPS);
}

#[test]
fn test_planet_projected_positions() {
    let catalog = StarCatalog::new(Vec::new(), Vec::new()).unwrap();
    let sky = reference_sky(&catalog);

    // Heliocentric order, Earth excluded
    let expected = [
        ("Mercury", 0.253_596_794_700_766_1, -0.070_905_869_619_750_08),
        ("Venus", -0.323_813_946_417_873, 0.224_141_582_608_139_27),
        ("Mars", 0.716_118_052_316_298_2, -0.282_397_784_229_042_05),
        ("Jupiter", 0.839_655_232_702_916_2, -0.331_309_386_837_987_2),
        ("Saturn", 0.756_538_175_069_277_5, -0.287_829_205_150_709),
        ("Uranus", -0.114_226_600_218_392_76, 0.100_686_801_988_032_7),
        ("Neptune", 0.260_720_072_010_757_3, -0.060_626_422_137_041_08),
    ];

    assert_eq!(sky.planets().len(), expected.len());
    for ((body, point), (name, x, y)) in
        sky.planets().iter().zip(sky.planet_points()).zip(expected)
    {
        assert_eq!(body.name(), name);
        assert_relative_eq!(point.x, x, epsilon = EPS);
        assert_relative_eq!(point.y, y, epsilon = EPS);
    }
}

#[test]
fn test_star_projected_position() {
    let catalog = StarCatalog::new(vec![rigel()], Vec::new()).unwrap();
    let sky = reference_sky(&catalog);

    assert_relative_eq!(sky.star_points()[0].x, -0.561_120_574_326_065, epsilon = EPS);
    assert_relative_eq!(
        sky.star_points()[0].y,
        -0.103_532_300_300_863_47,
        epsilon = EPS
    );
}

#[test]
fn test_nearest_object_query() {
    let catalog = StarCatalog::new(vec![rigel()], Vec::new()).unwrap();
    let sky = reference_sky(&catalog);

    let star_point = sky.star_points()[0];
    let probe = CartesianCoordinates::new(star_point.x + 0.001, star_point.y + 0.001);

    // A generous radius finds the star; a tiny one finds nothing
    assert_eq!(sky.object_closest_to(&probe, 1.0), Some(SkyObject::Star(0)));
    assert_eq!(sky.object_closest_to(&probe, 0.0001), None);

    // Asking at the Sun's own position returns the Sun
    let picked = sky.object_closest_to(&sky.sun_point(), 0.5).unwrap();
    assert_eq!(sky.name_of(&picked), "Sun");
}
