//! Hero export and import.
//!
//! Heroes export as pretty JSON (the same shape the store uses) or as a
//! Markdown character sheet. Imports go through [`update_hero`] so legacy
//! records come in normalised.

use std::fmt;
use std::str::FromStr;

use forge_core::{CharacteristicArray, CoreError, Feature, FeatureData, Hero, HeroClass};
use forge_rules::{Section, features_by_section, section_state, update_hero};

use crate::diagnostics::ErrorLog;
use crate::error::{SessionError, SessionResult};

/// Output format for an exported hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Hero JSON, re-importable.
    Json,
    /// Markdown character sheet.
    Markdown,
}

impl ExportFormat {
    /// File extension, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => ".ds-hero",
            Self::Markdown => ".md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SessionError;

    fn from_str(s: &str) -> SessionResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" | "ds-hero" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(SessionError::UnknownFormat(s.to_string())),
        }
    }
}

/// File name to offer when exporting `hero`.
///
/// Path separators and other characters file systems reject become `_`,
/// and leading dots are dropped, so the name never leaves its directory.
pub fn suggested_filename(hero: &Hero, format: ExportFormat) -> String {
    let cleaned: String = hero
        .display_name()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = cleaned.trim_start_matches('.').trim();
    let stem = if stem.is_empty() { "hero" } else { stem };
    format!("{stem}{}", format.extension())
}

/// Render a hero in the given format.
pub fn export_hero(hero: &Hero, format: ExportFormat) -> SessionResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(hero)?),
        ExportFormat::Markdown => Ok(render_sheet(hero, &mut ErrorLog::new())),
    }
}

/// Parse exported hero JSON and normalise it.
pub fn parse_hero(json: &str) -> SessionResult<Hero> {
    let hero: Hero = serde_json::from_str(json)?;
    Ok(update_hero(hero))
}

/// Render a Markdown character sheet.
///
/// Parts that fail to render are recorded in `log` and left out.
pub fn render_sheet(hero: &Hero, log: &mut ErrorLog) -> String {
    let mut out = format!("# {}\n\nSetting: {}\n\n## Build\n\n", hero.display_name(), hero.setting_id);
    for section in Section::ALL {
        let choice = section_choice(hero, section).unwrap_or_else(|| "none".to_string());
        out.push_str(&format!(
            "- {section}: {choice} ({})\n",
            section_state(hero, section)
        ));
    }

    if let Some(class) = &hero.class
        && !class.characteristics.is_empty()
        && let Some(table) = log.guard("characteristics", || characteristic_table(class))
    {
        out.push_str("\n## Characteristics\n\n");
        out.push_str(&table);
    }

    let state = &hero.state;
    out.push_str("\n## State\n\n");
    out.push_str(&format!("- Project Points: {}\n", state.project_points));
    out.push_str(&format!("- Renown: {}\n", state.renown));
    out.push_str(&format!("- Wealth: {}\n", state.wealth));
    out.push_str(&format!("- Victories: {}\n", state.victories));
    out.push_str(&format!("- XP: {}\n", state.xp));

    let grouped = features_by_section(hero);
    if !grouped.is_empty() {
        out.push_str("\n## Features\n");
    }
    for (section, features) in grouped {
        out.push_str(&format!("\n### {section}\n\n"));
        for feature in features {
            out.push_str(&format!("- {}\n", feature_line(feature)));
        }
    }
    out
}

fn section_choice(hero: &Hero, section: Section) -> Option<String> {
    match section {
        Section::Ancestry => hero.ancestry.as_ref().map(|a| a.name.clone()),
        Section::Culture => hero.culture.as_ref().map(|c| {
            let aspects: Vec<&str> = [&c.environment, &c.organization, &c.upbringing]
                .into_iter()
                .flatten()
                .map(|f| f.name.as_str())
                .collect();
            if aspects.is_empty() {
                c.name.clone()
            } else {
                format!("{} ({})", c.name, aspects.join(", "))
            }
        }),
        Section::Career => hero.career.as_ref().map(|c| c.name.clone()),
        Section::Class => hero.class.as_ref().map(class_choice),
        Section::Kit => hero.kit.as_ref().map(|k| k.name.clone()),
        Section::Complication => hero.complication.as_ref().map(|c| c.name.clone()),
        Section::Details => {
            let name = hero.name.trim();
            (!name.is_empty()).then(|| name.to_string())
        }
    }
}

fn class_choice(class: &HeroClass) -> String {
    let subclasses: Vec<&str> = class.selected_subclasses().map(|sc| sc.name.as_str()).collect();
    if subclasses.is_empty() {
        format!("{}, level {}", class.name, class.level)
    } else {
        format!("{}, level {} ({})", class.name, class.level, subclasses.join(", "))
    }
}

fn characteristic_table(class: &HeroClass) -> SessionResult<String> {
    let array = CharacteristicArray::from_assignments(&class.characteristics)
        .ok_or(CoreError::ArrayLength(class.characteristics.len()))?;
    let values: Vec<String> = array.values().iter().map(|v| v.to_string()).collect();
    Ok(format!(
        "| MGT | AGI | RSN | INT | PRE |\n| --- | --- | --- | --- | --- |\n| {} |\n",
        values.join(" | ")
    ))
}

fn feature_line(feature: &Feature) -> String {
    let mut line = format!("**{}**", feature.name);
    let detail = describe_data(&feature.data);
    if !detail.is_empty() {
        line.push_str(&format!(" ({detail})"));
    }
    if !feature.description.is_empty() {
        line.push_str(&format!(": {}", feature.description));
    }
    line
}

/// Short human-readable summary of a feature payload; empty for plain text.
pub fn describe_data(data: &FeatureData) -> String {
    match data {
        FeatureData::Text => String::new(),
        FeatureData::Bonus(bonus) => format!("{:+} {}", bonus.value, bonus.field),
        FeatureData::Skill(selection) | FeatureData::Language(selection) => {
            let kind = data.type_name();
            let picks = if selection.is_complete() {
                selection.selected.join(", ")
            } else if selection.options.is_empty() {
                format!("choose {}", selection.count)
            } else {
                format!(
                    "choose {} from {}",
                    selection.count,
                    selection.options.join(", ")
                )
            };
            format!("{kind}: {picks}")
        }
        FeatureData::Ability(ability) if ability.cost == 0 => "signature ability".to_string(),
        FeatureData::Ability(ability) => format!("ability, cost {}", ability.cost),
        FeatureData::Size(size) => match size.modifier {
            Some(m) => format!("size {}{m}", size.value),
            None => format!("size {}", size.value),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{CharacteristicValue, HeroId, SelectionData};
    use forge_rules::{Catalog, create_hero, with_ancestry, with_name};

    fn vess() -> Hero {
        let catalog = Catalog::builtin();
        let hero = create_hero(&catalog, "orden").unwrap();
        let hero = with_name(&hero, "Vess");
        with_ancestry(&hero, catalog.ancestry("human"))
    }

    #[test]
    fn format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(SessionError::UnknownFormat(_))
        ));
    }

    #[test]
    fn filenames() {
        let mut hero = vess();
        assert_eq!(suggested_filename(&hero, ExportFormat::Json), "Vess.ds-hero");
        assert_eq!(suggested_filename(&hero, ExportFormat::Markdown), "Vess.md");
        hero.name.clear();
        assert_eq!(
            suggested_filename(&hero, ExportFormat::Json),
            "Unnamed Hero.ds-hero"
        );
    }

    #[test]
    fn filenames_stay_in_their_directory() {
        let mut hero = vess();
        hero.name = "../../etc/passwd".to_string();
        let name = suggested_filename(&hero, ExportFormat::Json);
        assert_eq!(name, "_.._etc_passwd.ds-hero");
        assert!(!name.contains('/'));

        hero.name = r"..\..\boot.ini".to_string();
        let name = suggested_filename(&hero, ExportFormat::Markdown);
        assert!(!name.contains('\\'));
        assert!(!name.starts_with('.'));

        hero.name = "..".to_string();
        assert_eq!(suggested_filename(&hero, ExportFormat::Json), "hero.ds-hero");
    }

    #[test]
    fn json_export_reimports() {
        let hero = vess();
        let json = export_hero(&hero, ExportFormat::Json).unwrap();
        assert_eq!(parse_hero(&json).unwrap(), hero);
    }

    #[test]
    fn parse_normalises() {
        let hero = parse_hero(r#"{"name": "Legacy"}"#).unwrap();
        assert!(!hero.id.is_blank());
        assert_eq!(hero.setting_id, "orden");
        assert!(parse_hero("[1, 2").is_err());
    }

    #[test]
    fn camel_case_record_imports_intact() {
        let json = r#"{
            "id": "0b6f2a52-legacy",
            "name": "Kell",
            "settingID": "orden",
            "career": {
                "id": "sage",
                "name": "Sage",
                "features": [
                    {"id": "sage-pp", "name": "Project Points", "type": "Bonus",
                     "data": {"field": "projectPoints", "value": 240}}
                ],
                "title": null
            },
            "class": {
                "id": "fury",
                "name": "Fury",
                "heroicResource": "Rage",
                "subclassName": "Aspect",
                "subclassCount": 1,
                "primaryCharacteristics": ["Might", "Agility"],
                "characteristics": [
                    {"characteristic": "Might", "value": 2},
                    {"characteristic": "Agility", "value": 2},
                    {"characteristic": "Reason", "value": -1},
                    {"characteristic": "Intuition", "value": 0},
                    {"characteristic": "Presence", "value": 1}
                ],
                "featuresByLevel": [
                    {"level": 1, "features": [
                        {"id": "fury-skill", "name": "Skill", "type": "Skill", "choice": true,
                         "data": {"options": [], "count": 1, "selected": ["Climb"]}}
                    ]}
                ],
                "subclasses": [
                    {"id": "berserker", "name": "Berserker", "selected": true,
                     "featuresByLevel": [{"level": 1, "features": [{"id": "b-1", "name": "Kit"}]}]}
                ],
                "level": 1
            },
            "state": {"projectPoints": 240, "renown": 0, "wealth": 1, "recoveriesUsed": 2}
        }"#;
        let hero = parse_hero(json).unwrap();

        assert_eq!(hero.setting_id, "orden");
        assert_eq!(hero.state.project_points, 240);
        assert_eq!(hero.state.recoveries_used, 2);
        assert!(hero.state.extra.is_empty());

        let career = hero.career.as_ref().unwrap();
        assert_eq!(
            career.features[0].as_bonus(),
            Some(&forge_core::BonusData {
                field: forge_core::FeatureField::ProjectPoints,
                value: 240,
            })
        );

        let class = hero.class.as_ref().unwrap();
        assert_eq!(class.heroic_resource, "Rage");
        assert_eq!(class.subclass_name, "Aspect");
        assert_eq!(class.primary_characteristics.len(), 2);
        assert_eq!(class.characteristics.len(), 5);
        assert_eq!(class.features_by_level.len(), 1);
        assert!(matches!(
            &class.features_by_level[0].features[0].data,
            FeatureData::Skill(s) if s.selected == ["Climb"]
        ));
        assert_eq!(class.subclasses[0].features_by_level.len(), 1);
    }

    #[test]
    fn markdown_sheet() {
        let sheet = export_hero(&vess(), ExportFormat::Markdown).unwrap();
        insta::assert_snapshot!(sheet, @r#"
# Vess

Setting: orden

## Build

- Ancestry: Human (Completed)
- Culture: none (Not Started)
- Career: none (Not Started)
- Class: none (Not Started)
- Kit: none (Not Started)
- Complication: none (Optional)
- Details: Vess (Completed)

## State

- Project Points: 0
- Renown: 0
- Wealth: 0
- Victories: 0
- XP: 0

## Features

### Ancestry

- **Size** (size 1M)
- **Detect the Supernatural**: You can sense undead, demons, and other supernatural creatures nearby.
- **Staying Power** (+2 Recoveries)
- **Human Skill** (skill: choose 1)
"#);
    }

    #[test]
    fn broken_characteristics_render_as_nothing() {
        let mut hero = Hero::new(HeroId::from("h1"), "orden");
        let mut class = HeroClass::new("fury", "Fury", "");
        class.characteristics = vec![CharacteristicValue {
            characteristic: forge_core::Characteristic::Might,
            value: 2,
        }];
        hero.class = Some(class);

        let mut log = ErrorLog::new();
        let sheet = render_sheet(&hero, &mut log);
        assert!(!sheet.contains("## Characteristics"));
        assert!(sheet.contains("- Class: Fury, level 1 (Completed)"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].context, "characteristics");
    }

    #[test]
    fn characteristics_table() {
        let mut class = HeroClass::new("fury", "Fury", "");
        class.characteristics = CharacteristicArray::new([2, 1, 0, 0, -1]).to_assignments();
        assert_eq!(
            characteristic_table(&class).unwrap(),
            "| MGT | AGI | RSN | INT | PRE |\n| --- | --- | --- | --- | --- |\n| 2 | 1 | 0 | 0 | -1 |\n"
        );
    }

    #[test]
    fn payload_descriptions() {
        let picked = SelectionData {
            selected: vec!["Caelian".to_string()],
            ..SelectionData::choose(1, &[])
        };
        assert_eq!(describe_data(&FeatureData::Language(picked)), "language: Caelian");
        assert_eq!(
            describe_data(&FeatureData::Skill(SelectionData::choose(2, &["Climb", "Swim"]))),
            "skill: choose 2 from Climb, Swim"
        );
        assert_eq!(describe_data(&FeatureData::Text), "");
    }
}
