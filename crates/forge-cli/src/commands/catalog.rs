use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use forge_rules::CatalogKind;

pub fn run(data_dir: &Path, kind: Option<&str>) -> Result<(), String> {
    let (_, _, catalog) = super::open(data_dir)?;

    let Some(kind) = kind else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Kind", "Entries"]);
        for kind in CatalogKind::ALL {
            table.add_row(vec![kind.to_string(), catalog.entries(kind).len().to_string()]);
        }
        println!("{table}");
        return Ok(());
    };

    let kind: CatalogKind = kind.parse().map_err(|e| format!("{e}"))?;
    let entries = catalog.entries(kind);
    if entries.is_empty() {
        println!("  No {kind} entries.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Description"]);
    for entry in &entries {
        table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            super::truncate(&entry.description, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} {kind} entries", entries.len());

    Ok(())
}
