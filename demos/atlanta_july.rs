//! Hour-by-hour solar heat gain through the windows of a house in Atlanta on July 21st.
//!
//! Run with `RUST_LOG=solar_heat_gain=trace` to see every intermediate value.

use chrono::{Duration, NaiveDateTime};
use solar_heat_gain::{
    ClimateSite, Illumination, Location, Scenario, Surface, Timestamp, evaluate,
    time::StandardTimeZone,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let atlanta = Location::new(33.64, -84.43, StandardTimeZone::Eastern.utc_offset(), true)?;
    let windows = [
        ("South", Surface::vertical(0.0)?),
        ("East", Surface::vertical(-90.0)?),
        ("West", Surface::vertical(90.0)?),
        ("North", Surface::vertical(180.0)?),
        ("Skylight", Surface::horizontal()),
    ];

    let start = "2022-07-21T05:00:00".parse::<NaiveDateTime>()?;

    println!("Solar heat gain for Atlanta, GA on July 21, 2022 (clock time, EDT)");
    println!("Values are TSHG / ASHG in W/m² of double-strength glass\n");

    print!("{:<6} {:>9} {:>8} {:>8}", "Clock", "AST", "β", "φ");
    for (name, _) in &windows {
        print!(" {name:>15}");
    }
    println!();

    for hour in 0..17 {
        let clock = start + Duration::hours(hour);
        let timestamp = Timestamp::from_date_time_like(&clock)?;

        let mut row = String::new();
        let mut header = None;
        for (_, surface) in &windows {
            let scenario = Scenario::new(atlanta, timestamp, *surface, ClimateSite::ATLANTA);
            let evaluation = evaluate(&scenario)?;

            header.get_or_insert_with(|| {
                let ast = evaluation.solar_time().apparent_solar_time();
                let position = evaluation.position();
                format!(
                    "{:<6} {:>9} {:>7.2}° {:>8}",
                    clock.format("%H:%M"),
                    format!("{:02}:{:02}", ast.hour(), ast.minute()),
                    position.altitude(),
                    position
                        .azimuth()
                        .map_or_else(|| "-".to_string(), |azimuth| format!("{azimuth:.2}°")),
                )
            });

            let cell = match evaluation.illumination() {
                Illumination::Night => "night".to_string(),
                Illumination::SelfShaded { .. } => "shade".to_string(),
                Illumination::Illuminated { heat_gain, .. } => {
                    format!("{:.1} / {:.1}", heat_gain.transmitted, heat_gain.absorbed)
                }
            };
            row.push_str(&format!(" {cell:>15}"));
        }

        println!("{}{row}", header.unwrap_or_default());
    }

    Ok(())
}
