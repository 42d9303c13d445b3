use std::path::Path;

use forge_rules::with_name;

pub fn run(data_dir: &Path, name: Option<&str>, setting: Option<&str>) -> Result<(), String> {
    let (config, mut library, catalog) = super::open(data_dir)?;
    let setting = setting.unwrap_or(&config.default_setting);

    let mut hero = library
        .add_hero(&catalog, setting)
        .map_err(|e| e.to_string())?;

    if let Some(name) = name {
        hero = with_name(&hero, name);
        library.save_hero(&hero).map_err(|e| e.to_string())?;
    }

    println!("  Created hero '{}' ({})", hero.display_name(), hero.id);

    Ok(())
}
