use std::env;
use std::path::PathBuf;
use std::process;

use colored::Colorize;
use pattern_playground::duck::{mallard_duck, model_duck, Duck, FlyRocketPowered};
use pattern_playground::{logging, PlaygroundConfig};

fn show(duck: &Duck) {
    println!("{}", duck.display().cyan());
    println!("  {}", duck.perform_quack());
    println!("  {}", duck.perform_fly());
}

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

    println!("{}", "=== Strategy Pattern: Ducks ===".bold());

    let mallard = mallard_duck();
    show(&mallard);
    println!("==========");

    let mut model = model_duck();
    show(&model);
    model.set_fly_behavior(Box::new(FlyRocketPowered));
    println!("  after upgrade: {}", model.perform_fly().green());
    println!("  {}", model.swim());
    println!("==========");

    let custom = config.duck.build_duck();
    show(&custom);
}
