use std::env;
use std::path::PathBuf;
use std::process;

use colored::Colorize;
use pattern_playground::weather::{CurrentConditionsDisplay, StatisticsDisplay};
use pattern_playground::{logging, PlaygroundConfig};

fn main() {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = match PlaygroundConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    };
    logging::init(&config.logging);

    println!("{}", "=== Observer Pattern: Weather Station ===".bold());

    let mut weather = config.weather.build_subject();
    let _current = CurrentConditionsDisplay::register(&mut weather);
    let _statistics = StatisticsDisplay::register(&mut weather);

    let mut failed = false;
    for (i, reading) in config.weather.readings.iter().enumerate() {
        if i > 0 {
            println!("=======");
        }
        match weather.set_measurements(reading.temperature, reading.humidity, reading.pressure) {
            Ok(notifications) => {
                for notification in notifications {
                    println!("{}", notification.rendered);
                }
            }
            Err(err) => {
                eprintln!("{} {}", "rejected:".yellow(), err);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(2);
    }
}
