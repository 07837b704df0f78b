//! End-to-end check of the handbook worked example: Atlanta, July 21st.
//!
//! Reference values come from a step-by-step double-precision evaluation of the handbook
//! formulas, with the hour angle taken from the hour and minute of apparent solar time. They
//! pin this model's results; they are not handbook table entries.

use solar_heat_gain::{
    ClimateSite, Evaluation, Illumination, Location, Scenario, Surface, Timestamp, evaluate,
};

const ANGLE_EPSILON: f64 = 1e-4; // degrees
const IRRADIANCE_EPSILON: f64 = 1e-3; // W/m²

fn atlanta() -> Location {
    Location::new(33.64, -84.43, -5.0, true).unwrap()
}

fn evaluate_at(hour: u32, surface: Surface) -> Evaluation {
    let timestamp = Timestamp::new(2022, 7, 21, hour, 0, 0.0).unwrap();
    evaluate(&Scenario::new(atlanta(), timestamp, surface, ClimateSite::ATLANTA)).unwrap()
}

#[test]
fn test_solar_time_at_3pm() {
    let evaluation = evaluate_at(15, Surface::vertical(0.0).unwrap());
    let solar_time = evaluation.solar_time();

    assert_eq!(solar_time.day_of_year(), 202);
    assert!((solar_time.equation_of_time() + 6.353_63).abs() < 1e-4);

    let lst = solar_time.local_standard_time();
    assert_eq!((lst.hour(), lst.minute()), (14, 0));

    let ast = solar_time.apparent_solar_time();
    assert_eq!((ast.month(), ast.day(), ast.hour(), ast.minute()), (7, 21, 13, 15));
    assert!((ast.second() - 55.58).abs() < 0.01);

    // 13:15 solar time; the seconds do not count
    assert_eq!(solar_time.hour_angle(), 18.75);
}

#[test]
fn test_sun_position_and_sky_at_3pm() {
    let evaluation = evaluate_at(15, Surface::vertical(0.0).unwrap());

    let position = evaluation.position();
    assert!((position.declination() - 20.441_513).abs() < ANGLE_EPSILON);
    assert!((position.altitude() - 68.777_961).abs() < ANGLE_EPSILON);
    assert!((position.azimuth().unwrap() - 56.312_776).abs() < ANGLE_EPSILON);

    let sky = evaluation.atmosphere().unwrap();
    assert!((sky.air_mass - 1.072_250).abs() < 1e-5);
    assert!((sky.beam_exponent - 0.724_682).abs() < 1e-5);
    assert!((sky.diffuse_exponent - 0.310_142).abs() < 1e-5);
    assert!((sky.extraterrestrial - 1323.6965).abs() < IRRADIANCE_EPSILON);
    assert!((sky.beam_normal - 737.5642).abs() < IRRADIANCE_EPSILON);
    assert!((sky.diffuse_normal - 214.9219).abs() < IRRADIANCE_EPSILON);
}

#[test]
fn test_south_window_at_3pm() {
    let evaluation = evaluate_at(15, Surface::vertical(0.0).unwrap());

    let Illumination::Illuminated {
        incident,
        heat_gain,
    } = evaluation.illumination()
    else {
        panic!("south window should be sunlit at 3 pm");
    };

    assert!((incident.incidence_angle - 78.417_590).abs() < ANGLE_EPSILON);
    assert!((incident.beam - 148.0861).abs() < IRRADIANCE_EPSILON);
    assert!((incident.diffuse - 139.7760).abs() < IRRADIANCE_EPSILON);
    assert!((incident.reflected - 90.2468).abs() < IRRADIANCE_EPSILON);

    assert!((heat_gain.transmitted - 137.5592).abs() < IRRADIANCE_EPSILON);
    assert!((heat_gain.absorbed - 9.1160).abs() < IRRADIANCE_EPSILON);
}

#[test]
fn test_skylight_at_3pm() {
    let evaluation = evaluate_at(15, Surface::horizontal());
    let incident = evaluation.illumination().incident().unwrap();

    // A horizontal surface sees the sun at its zenith angle and no ground
    assert!((incident.incidence_angle - evaluation.position().zenith_angle()).abs() < 1e-8);
    assert!((incident.incidence_angle - 21.2220).abs() < ANGLE_EPSILON);
    assert!((incident.beam - 687.5460).abs() < IRRADIANCE_EPSILON);
    assert!((incident.diffuse - 264.2146).abs() < IRRADIANCE_EPSILON);
    assert_eq!(incident.reflected, 0.0);

    let heat_gain = evaluation.heat_gain();
    assert!((heat_gain.transmitted - 768.9158).abs() < IRRADIANCE_EPSILON);
    assert!((heat_gain.absorbed - 47.0815).abs() < IRRADIANCE_EPSILON);
}

#[test]
fn test_east_window_in_the_morning() {
    let evaluation = evaluate_at(9, Surface::vertical(-90.0).unwrap());

    let position = evaluation.position();
    assert!((position.altitude() - 26.3743).abs() < ANGLE_EPSILON);
    // Morning sun lies east of south
    assert!((position.azimuth().unwrap() + 97.9497).abs() < ANGLE_EPSILON);

    let incident = evaluation.illumination().incident().unwrap();
    assert!((incident.incidence_angle - 27.4640).abs() < ANGLE_EPSILON);
    assert!((incident.reflected - 35.1374).abs() < IRRADIANCE_EPSILON);

    let heat_gain = evaluation.heat_gain();
    assert!((heat_gain.transmitted - 461.6738).abs() < IRRADIANCE_EPSILON);
    assert!((heat_gain.absorbed - 28.2750).abs() < IRRADIANCE_EPSILON);
}

#[test]
fn test_windows_facing_away_are_shaded() {
    let west_morning = evaluate_at(9, Surface::vertical(90.0).unwrap());
    assert!(west_morning.illumination().is_self_shaded());

    let north_afternoon = evaluate_at(15, Surface::vertical(180.0).unwrap());
    let Illumination::SelfShaded {
        surface_solar_azimuth,
    } = north_afternoon.illumination()
    else {
        panic!("north window should be shaded at 3 pm");
    };
    assert!((surface_solar_azimuth + 123.687_224).abs() < ANGLE_EPSILON);
}

#[test]
fn test_night() {
    let evaluation = evaluate_at(23, Surface::vertical(0.0).unwrap());
    assert!(evaluation.illumination().is_night());
    assert!(evaluation.position().altitude() < 0.0);
    assert_eq!(evaluation.position().azimuth(), None);
    assert!(evaluation.atmosphere().is_none());
}
