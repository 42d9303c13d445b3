use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path, file: &Path) -> Result<(), String> {
    let json =
        fs::read_to_string(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    let (_, mut library, _) = super::open(data_dir)?;
    let hero = library
        .import_hero(&json)
        .map_err(|e| format!("cannot import {}: {e}", file.display()))?;

    println!("  Imported hero '{}' ({})", hero.display_name(), hero.id);

    Ok(())
}
