//! Building and editing a tree by hand.
//!
//! Run with: cargo run --example build_tree

use conftree::{node, Node};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A fresh node is null and becomes whatever its first write asks for
    let mut config = Node::new();
    config.get_or_insert("name")?.set("gateway");
    config.get_or_insert("port")?.set(8080);

    let mut hosts = config.get_or_insert("hosts")?;
    hosts.push("alpha")?;
    hosts.push("beta")?;
    hosts.insert_at(0, "primary")?;
    drop(hosts);

    println!("Config: {}", config);
    println!("Port as u16: {}", config["port"].value_as::<u16>()?);

    // Iteration works the same for every shape
    for (key, value) in config.entries() {
        println!("  {} ({}) = {}", key, value.shape(), value);
    }

    // Parents are handles resolved against a root
    let beta = &config["hosts"][2];
    if let Some(parent) = beta.parent_in(&config) {
        println!("Parent of {}: {}", beta, parent);
    }

    // Copies are deep and independent
    let mut staging = config.clone();
    staging.get_or_insert("port")?.set(9090);
    staging.at_mut("hosts")?.remove_at(0)?;
    println!("Staging: {}", staging);
    println!("Original unchanged: {}", config == node!({
        "name": "gateway",
        "port": 8080,
        "hosts": ["primary", "alpha", "beta"]
    }));

    // Shape mismatches are errors, not silent conversions
    if let Err(err) = config["name"].value_as::<i32>() {
        println!("Expected error: {}", err);
    }
    if let Err(err) = config.push("oops") {
        println!("Expected error: {}", err);
    }

    Ok(())
}
