use std::env;
use std::path::Path;

use vego_export::{export_catalog, ExportConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the catalog path from command-line arguments
    let args: Vec<String> = env::args().collect();
    let input = args
        .get(1)
        .ok_or("Usage: vego-export <catalog.json> [output.csv]")?;
    let output = args.get(2).map(String::as_str).unwrap_or("food_items.csv");

    let config = ExportConfig::load()?;
    let records = export_catalog(Path::new(input), Path::new(output), &config)?;

    println!("Exported {} products to {}", records.len(), output);
    Ok(())
}
