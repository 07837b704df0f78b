//! Daily solar heat gain through a south window on the 21st of each month, Atlanta vs. Istanbul.
//!
//! Uses the numeric API only, so it also runs without the `chrono` feature.

use solar_heat_gain::{ClimateSite, Error, Location, Scenario, Surface, Timestamp, evaluate};

struct Site {
    location: Location,
    climate: ClimateSite,
}

/// Sum of hourly transmitted gain over one day, in Wh/m².
fn daily_transmitted(site: &Site, surface: Surface, month: u32) -> Result<f64, Error> {
    let mut total = 0.0;
    for hour in 0..24 {
        let timestamp = Timestamp::new(2022, month, 21, hour, 30, 0.0)?;
        let scenario = Scenario::new(site.location, timestamp, surface, site.climate);
        let evaluation = evaluate(&scenario)?;
        tracing::debug!(
            site = site.climate.name(),
            month,
            hour,
            transmitted = evaluation.heat_gain().transmitted,
            "hourly gain"
        );
        total += evaluation.heat_gain().transmitted;
    }
    Ok(total)
}

/// Copy of `site` with every optical depth multiplied by `factor`.
fn hazier(site: &ClimateSite, name: &'static str, factor: f64) -> Result<ClimateSite, Error> {
    let mut beam = [0.0; 12];
    let mut diffuse = [0.0; 12];
    for (month, (b, d)) in (1..=12).zip(beam.iter_mut().zip(diffuse.iter_mut())) {
        *b = factor * site.beam_optical_depth(month)?;
        *d = factor * site.diffuse_optical_depth(month)?;
    }
    ClimateSite::new(name, beam, diffuse)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let sites = [
        Site {
            location: Location::new(33.64, -84.43, -5.0, false)?,
            climate: ClimateSite::ATLANTA,
        },
        Site {
            location: Location::new(40.98, 28.82, 3.0, false)?,
            climate: ClimateSite::ISTANBUL,
        },
        // Hypothetical: Atlanta with 30% deeper optical depths
        Site {
            location: Location::new(33.64, -84.43, -5.0, false)?,
            climate: hazier(&ClimateSite::ATLANTA, "Hazy Atlanta", 1.3)?,
        },
    ];
    let south_window = Surface::vertical(0.0)?;

    println!("Daily transmitted solar heat gain, south window, Wh/m² (standard time)\n");
    print!("{:<6}", "Month");
    for site in &sites {
        print!(" {:>14}", site.climate.name());
    }
    println!();

    for month in 1..=12 {
        print!("{month:<6}");
        for site in &sites {
            print!(" {:>14.0}", daily_transmitted(site, south_window, month)?);
        }
        println!();
    }

    tracing::info!(sites = sites.len(), "comparison complete");

    Ok(())
}
