//! Tests for coordinates and great-circle distance

use super::*;

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("test coordinate should be valid")
}

#[test]
fn test_valid_coordinate_keeps_components() {
    let c = coord(43.6294, 1.3678);
    assert_eq!(c.latitude(), 43.6294);
    assert_eq!(c.longitude(), 1.3678);
}

#[test]
fn test_range_boundaries_are_inclusive() {
    assert!(Coordinate::new(90.0, 180.0).is_ok());
    assert!(Coordinate::new(-90.0, -180.0).is_ok());
}

#[test]
fn test_invalid_latitude() {
    let result = Coordinate::new(90.5, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude() {
    let result = Coordinate::new(0.0, -180.01);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_nan_is_rejected() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::NAN).is_err());
    assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
}

#[test]
fn test_coord_error_message_names_range() {
    let msg = CoordError::InvalidLatitude(95.0).to_string();
    assert!(msg.contains("95"));
    assert!(msg.contains("-90"));
}

#[test]
fn test_distance_to_self_is_zero() {
    let points = [
        coord(0.0, 0.0),
        coord(51.47, -0.4543),
        coord(-33.9461, 151.1772),
        coord(89.9, 179.9),
    ];
    for p in &points {
        assert!(haversine_km(p, p).abs() < 1e-9, "{} should be 0 km from itself", p);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (coord(51.47, -0.4543), coord(40.6413, -73.7781)),
        (coord(-33.9461, 151.1772), coord(35.5494, 139.7798)),
        (coord(0.0, 179.5), coord(0.0, -179.5)),
    ];
    for (a, b) in &pairs {
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
    }
}

#[test]
fn test_one_degree_of_longitude_at_equator() {
    let d = haversine_km(&coord(0.0, 0.0), &coord(0.0, 1.0));
    assert!((d - 111.1949).abs() < 0.001, "got {}", d);
}

#[test]
fn test_heathrow_to_jfk() {
    // London Heathrow to New York JFK
    let d = haversine_km(&coord(51.47, -0.4543), &coord(40.6413, -73.7781));
    assert!((d - 5540.0).abs() < 1.0, "got {}", d);
}

#[test]
fn test_antipodal_points_are_half_circumference() {
    let d = haversine_km(&coord(90.0, 0.0), &coord(-90.0, 0.0));
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((d - half).abs() < 1e-6, "got {}", d);
}

#[test]
fn test_antimeridian_crossing_is_short() {
    // 1 degree apart across the 180th meridian, not 359 degrees
    let d = haversine_km(&coord(0.0, 179.5), &coord(0.0, -179.5));
    assert!((d - 111.1949).abs() < 0.001, "got {}", d);
}

#[test]
fn test_distance_to_matches_haversine() {
    let a = coord(9.0, 9.0);
    let b = coord(10.0, 10.0);
    assert_eq!(a.distance_to(&b), haversine_km(&a, &b));
}

#[test]
fn test_unit_conversion() {
    let km = 111.1949;
    assert_eq!(DistanceUnit::Kilometers.from_km(km), km);
    assert!((DistanceUnit::NauticalMiles.from_km(km) - 60.04).abs() < 0.01);
    assert!((DistanceUnit::StatuteMiles.from_km(km) - 69.09).abs() < 0.01);
}

#[test]
fn test_unit_parse() {
    assert_eq!("km".parse::<DistanceUnit>(), Ok(DistanceUnit::Kilometers));
    assert_eq!(" NM ".parse::<DistanceUnit>(), Ok(DistanceUnit::NauticalMiles));
    assert_eq!("miles".parse::<DistanceUnit>(), Ok(DistanceUnit::StatuteMiles));
    assert!("furlongs".parse::<DistanceUnit>().is_err());
}

#[test]
fn test_unit_display_roundtrips_through_parse() {
    for unit in DistanceUnit::ALL {
        assert_eq!(unit.to_string().parse::<DistanceUnit>(), Ok(unit));
    }
}

#[test]
fn test_default_unit_is_kilometers() {
    assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
}
