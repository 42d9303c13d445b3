use std::path::Path;

use forge_core::{FeatureData, SelectionData};
use forge_rules::get_features;
use forge_session::EditSession;

pub fn run(data_dir: &Path, query: &str, feature_id: &str, values: &[String]) -> Result<(), String> {
    let (_, mut library, catalog) = super::open(data_dir)?;
    let hero = library.find(query).map_err(|e| e.to_string())?.clone();

    let feature = get_features(&hero)
        .into_iter()
        .find(|f| f.id == feature_id)
        .ok_or_else(|| format!("{} has no feature \"{feature_id}\"", hero.display_name()))?;

    let selection = match &feature.data {
        FeatureData::Skill(s) | FeatureData::Language(s) if feature.choice => s,
        _ => return Err(format!("'{}' has no choice to make", feature.name)),
    };

    if values.len() != selection.count {
        return Err(format!(
            "'{}' needs {} pick(s), got {}",
            feature.name,
            selection.count,
            values.len()
        ));
    }

    let mut picks = Vec::with_capacity(values.len());
    for value in values {
        if !selection.allows(value) {
            return Err(format!(
                "'{value}' is not an option for '{}' (options: {})",
                feature.name,
                selection.options.join(", ")
            ));
        }
        let canonical = selection
            .options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(value))
            .unwrap_or(value);
        picks.push(canonical.clone());
    }

    let name = feature.name.clone();
    let filled = SelectionData {
        selected: picks.clone(),
        ..selection.clone()
    };
    let data = match feature.data {
        FeatureData::Skill(_) => FeatureData::Skill(filled),
        _ => FeatureData::Language(filled),
    };

    let mut session = EditSession::new(&catalog, hero);
    session
        .set_feature_data(feature_id, data)
        .map_err(|e| e.to_string())?;
    if !session
        .save_changes(&mut library)
        .map_err(|e| e.to_string())?
    {
        return Err("hero was removed while editing".to_string());
    }

    println!("  {name}: {}", picks.join(", "));

    Ok(())
}
