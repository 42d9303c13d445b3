use std::path::Path;

pub fn run(data_dir: &Path, query: &str) -> Result<(), String> {
    let (_, mut library, _) = super::open(data_dir)?;
    let hero = library.find(query).map_err(|e| e.to_string())?.clone();

    library.delete_hero(&hero.id).map_err(|e| e.to_string())?;
    println!("  Deleted hero '{}'", hero.display_name());

    Ok(())
}
