//! Randomize one body per object type and print the results
//!
//! Usage: cargo run -p celestial-forge --example randomize_bodies [-- --json] [--config forge.toml]
//!
//! Prints a CSV summary by default, or the full parameter sets as JSON.
//! Set `RUST_LOG=celestial_forge=debug` to trace each synthesis.

use celestial_forge::{ForgeConfig, Headless, Scene, object_types};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => match args.get(i + 1).map(ForgeConfig::load) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
            None => {
                eprintln!("error: --config needs a path");
                std::process::exit(1);
            }
        },
        None => ForgeConfig::default(),
    };

    let mut scene = Scene::new(config, Headless, Headless);

    if json {
        let mut bodies = serde_json::Map::new();
        for (seed, name) in object_types().enumerate() {
            scene.randomize_with_seed(name, seed as u64);
            match serde_json::to_value(scene.snapshot()) {
                Ok(value) => {
                    bodies.insert(name.to_string(), value);
                }
                Err(e) => eprintln!("error: {name}: {e}"),
            }
        }
        match serde_json::to_string_pretty(&bodies) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error: {e}"),
        }
        return;
    }

    println!("type,shape,radius,octaves,amplitude,sharpness,rotation,atmosphere,opacity,color1");
    for (seed, name) in object_types().enumerate() {
        scene.randomize_with_seed(name, seed as u64);
        let params = scene.snapshot();
        let planet = &params.planet;
        println!(
            "{},{},{:.3},{},{:.3},{:.3},{:.4},{},{:.3},{}",
            name,
            planet.shape,
            planet.radius,
            planet.octaves,
            planet.amplitude,
            planet.sharpness,
            planet.rotation_speed,
            params.scene.atmosphere_visible,
            params.atmosphere.opacity,
            planet.colors[0].to_hex(),
        );
    }
}
