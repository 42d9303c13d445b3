use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use forge_core::Characteristic;
use forge_rules::calculate_characteristic_arrays;

pub fn run(data_dir: &Path, class_id: &str) -> Result<(), String> {
    let (_, _, catalog) = super::open(data_dir)?;
    let class = catalog
        .class(class_id)
        .ok_or_else(|| format!("unknown class: \"{class_id}\""))?;

    let primaries = &class.primary_characteristics;
    let arrays = calculate_characteristic_arrays(primaries);

    let names: Vec<String> = primaries.iter().map(|c| c.to_string()).collect();
    println!(
        "  {} [{}]",
        class.name.bold(),
        format!("primary: {}", names.join(", ")).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["#".to_string()];
    header.extend(Characteristic::ALL.iter().map(|c| c.abbreviation().to_string()));
    table.set_header(header);

    for (n, array) in arrays.iter().enumerate() {
        let mut row = vec![(n + 1).to_string()];
        row.extend(array.values().iter().map(|v| v.to_string()));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} arrays", arrays.len());

    Ok(())
}
