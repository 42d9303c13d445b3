use std::path::Path;

use colored::Colorize;
use forge_core::{Characteristic, FeatureField, Hero};
use forge_rules::{
    Catalog, Section, features_by_section, is_build_complete, section_states, validate_hero,
};
use forge_session::{ErrorLog, describe_data};

pub fn run(data_dir: &Path, query: &str) -> Result<(), String> {
    let (_, library, catalog) = super::open(data_dir)?;
    let hero = library.find(query).map_err(|e| e.to_string())?;
    let mut log = ErrorLog::new();

    // Header
    println!(
        "  {} [{}]",
        hero.display_name().bold(),
        hero.id.as_str().dimmed()
    );
    println!("  setting:    {}", hero.setting_id);
    println!();

    print_build(hero);
    print_characteristics(hero, &mut log);
    print_state(hero);
    print_features(hero);
    print_issues(&catalog, hero);

    for entry in log.entries() {
        println!("  {}", entry.to_string().dimmed());
    }

    Ok(())
}

fn print_build(hero: &Hero) {
    println!("  {}", "Build".bold());
    for (section, state) in section_states(hero) {
        let choice = match section {
            Section::Ancestry => hero.ancestry.as_ref().map(|a| a.name.clone()),
            Section::Culture => hero.culture.as_ref().map(|c| c.name.clone()),
            Section::Career => hero.career.as_ref().map(|c| c.name.clone()),
            Section::Class => hero.class.as_ref().map(|c| {
                let subclasses: Vec<&str> =
                    c.selected_subclasses().map(|sc| sc.name.as_str()).collect();
                if subclasses.is_empty() {
                    format!("{} {}", c.name, c.level)
                } else {
                    format!("{} {} ({})", c.name, c.level, subclasses.join(", "))
                }
            }),
            Section::Kit => hero.kit.as_ref().map(|k| k.name.clone()),
            Section::Complication => hero.complication.as_ref().map(|c| c.name.clone()),
            Section::Details => Some(hero.display_name().to_string()),
        };
        println!(
            "    {} {:<13} {}",
            super::state_marker(state),
            section.to_string(),
            choice.unwrap_or_else(|| "-".to_string())
        );
    }
    println!();
}

fn print_characteristics(hero: &Hero, log: &mut ErrorLog) {
    let Some(class) = &hero.class else {
        return;
    };
    if class.characteristics.is_empty() {
        return;
    }
    let Some(array) = log.guard("characteristics", || {
        class
            .characteristic_array()
            .ok_or("characteristic scores are incomplete")
    }) else {
        return;
    };

    println!("  {}", "Characteristics".bold());
    let cells: Vec<String> = Characteristic::ALL
        .iter()
        .map(|c| format!("{} {:+}", c.abbreviation(), array.value(*c)))
        .collect();
    println!("    {}", cells.join("  "));
    println!();
}

fn print_state(hero: &Hero) {
    let state = &hero.state;
    println!("  {}", "State".bold());
    println!("    {:<15} {}", FeatureField::ProjectPoints.to_string(), state.project_points);
    println!("    {:<15} {}", FeatureField::Renown.to_string(), state.renown);
    println!("    {:<15} {}", FeatureField::Wealth.to_string(), state.wealth);
    println!();
}

fn print_features(hero: &Hero) {
    let grouped = features_by_section(hero);
    if grouped.is_empty() {
        return;
    }

    println!("  {}", "Features".bold());
    for (section, in_section) in grouped {
        println!("    {}", section.to_string().underline());
        for feature in in_section {
            let detail = describe_data(&feature.data);
            let name = if feature.is_unresolved() {
                feature.name.yellow()
            } else {
                feature.name.normal()
            };
            if detail.is_empty() {
                println!("      {name} {}", feature.id.dimmed());
            } else {
                println!("      {name} ({detail}) {}", feature.id.dimmed());
            }
        }
    }
    println!();
}

fn print_issues(catalog: &Catalog, hero: &Hero) {
    let issues = validate_hero(catalog, hero);
    if issues.is_empty() {
        if is_build_complete(hero) {
            println!("  {}", "Build complete".green());
        }
        return;
    }
    for issue in issues {
        let line = issue.to_string();
        if issue.is_error {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.yellow());
        }
    }
}
