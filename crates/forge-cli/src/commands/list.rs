use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use forge_rules::{Section, SectionState, section_states};

pub fn run(data_dir: &Path) -> Result<(), String> {
    let (_, library, _) = super::open(data_dir)?;

    if library.is_empty() {
        println!("  No heroes yet. Create one with `forge new`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Ancestry", "Class", "Progress"]);

    for hero in library.heroes() {
        let states = section_states(hero);
        let required = states
            .iter()
            .filter(|(section, _)| *section != Section::Complication)
            .count();
        let done = states
            .iter()
            .filter(|(section, state)| {
                *section != Section::Complication && *state == SectionState::Completed
            })
            .count();

        let ancestry = hero.ancestry.as_ref().map_or("-", |a| a.name.as_str());
        let class = hero
            .class
            .as_ref()
            .map_or("-".to_string(), |c| format!("{} {}", c.name, c.level));

        table.add_row(vec![
            super::short_id(hero.id.as_str()).to_string(),
            hero.display_name().to_string(),
            ancestry.to_string(),
            class,
            format!("{done}/{required}"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} heroes", library.len());

    Ok(())
}
