//! Loading a JSON document into a tree.
//!
//! Run with: cargo run --example load_json [path/to/file.json]

use conftree::{FileSource, JsonBuilder, JsonOptions, StringSource, TreeBuilder};
use std::error::Error;
use tracing::Level;

const SAMPLE: &str = r#"{
    "service": {"name": "gateway", "port": 8080, "tls": true},
    "upstreams": [
        {"host": "10.0.0.1", "weight": 3},
        {"host": "10.0.0.2", "weight": 1}
    ],
    "comment": null
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let builder = JsonBuilder::new();
    let tree = match std::env::args().nth(1) {
        Some(path) => builder.load(&FileSource::new(path))?,
        None => builder.load(&StringSource::new(SAMPLE))?,
    };

    println!("Loaded: {}", tree);
    println!("Nodes: {}", tree.node_count());

    if let Some(service) = tree.get("service") {
        let port = service.at("port")?.value_as::<u16>()?;
        let tls = service.at("tls")?.value_as::<bool>()?;
        println!("Service listens on {} (tls: {})", port, tls);
    }

    if let Some(upstreams) = tree.get("upstreams") {
        let total: u32 = upstreams
            .iter()
            .map(|u| u.at("weight").and_then(|w| w.value_as::<u32>()))
            .sum::<Result<u32, _>>()?;
        println!("{} upstreams, total weight {}", upstreams.len(), total);
    }

    // Strings keep their quotes by default; raw_strings drops them
    let raw = JsonBuilder::with_options(JsonOptions::new().with_raw_strings(true))
        .build(SAMPLE)?;
    println!(
        "Default name: {}, raw name: {}",
        tree["service"]["name"], raw["service"]["name"]
    );

    Ok(())
}
