use std::path::Path;

use forge_session::{ExportFormat, export_hero, suggested_filename};

pub fn run(data_dir: &Path, query: &str, format: &str, output: Option<&Path>) -> Result<(), String> {
    let format: ExportFormat = format
        .parse()
        .map_err(|_| format!("unsupported format: \"{format}\". Use: json, markdown"))?;

    let (_, library, _) = super::open(data_dir)?;
    let hero = library.find(query).map_err(|e| e.to_string())?;
    let content = export_hero(hero, format).map_err(|e| e.to_string())?;

    if let Some(path) = output {
        let target = if path.is_dir() {
            path.join(suggested_filename(hero, format))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&target, &content)
            .map_err(|e| format!("cannot write to {}: {e}", target.display()))?;
        println!("  Exported to {}", target.display());
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
