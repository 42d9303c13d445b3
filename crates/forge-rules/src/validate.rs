//! Validation of a hero against the catalog.
//!
//! Checks that the hero's setting exists, that its class choices obey the
//! class's limits, and flags choices that still need the player's input.

use forge_core::Hero;

use crate::catalog::Catalog;
use crate::characteristics::is_valid_array;
use crate::features::features_for_section;
use crate::section::Section;

/// A warning or error found during hero validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The build section where the issue was found.
    pub section: Section,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(section: Section, message: String) -> Self {
        Self {
            section,
            message,
            is_error: true,
        }
    }

    fn warning(section: Section, message: String) -> Self {
        Self {
            section,
            message,
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.section, self.message)
    }
}

/// Validate a hero.
///
/// Returns every issue found, in section order. A hero that is simply
/// unfinished produces no errors; only choices still open are reported, as
/// warnings.
pub fn validate_hero(catalog: &Catalog, hero: &Hero) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if catalog.setting(&hero.setting_id).is_none() {
        issues.push(ValidationIssue::error(
            Section::Details,
            format!("unknown campaign setting '{}'", hero.setting_id),
        ));
    }

    validate_catalog_ids(catalog, hero, &mut issues);
    validate_class(hero, &mut issues);

    for section in Section::ALL {
        for feature in features_for_section(hero, section) {
            if feature.is_unresolved() {
                issues.push(ValidationIssue::warning(
                    section,
                    format!("'{}' needs a choice", feature.name),
                ));
            }
        }
    }

    issues.sort_by_key(|issue| Section::ALL.iter().position(|s| *s == issue.section));
    issues
}

/// Warn about selections the catalog does not know, e.g. missing homebrew.
fn validate_catalog_ids(catalog: &Catalog, hero: &Hero, issues: &mut Vec<ValidationIssue>) {
    let mut check = |section: Section, id: Option<&String>, known: fn(&Catalog, &str) -> bool| {
        if let Some(id) = id
            && !known(catalog, id)
        {
            issues.push(ValidationIssue::warning(
                section,
                format!("'{id}' is not in the catalog"),
            ));
        }
    };
    check(Section::Ancestry, hero.ancestry.as_ref().map(|a| &a.id), |c, id| {
        c.ancestry(id).is_some()
    });
    check(Section::Culture, hero.culture.as_ref().map(|c| &c.id), |c, id| {
        c.culture(id).is_some()
    });
    check(Section::Career, hero.career.as_ref().map(|c| &c.id), |c, id| {
        c.career(id).is_some()
    });
    check(Section::Class, hero.class.as_ref().map(|c| &c.id), |c, id| {
        c.class(id).is_some()
    });
    check(Section::Kit, hero.kit.as_ref().map(|k| &k.id), |c, id| {
        c.kit(id).is_some()
    });
    check(
        Section::Complication,
        hero.complication.as_ref().map(|c| &c.id),
        |c, id| c.complication(id).is_some(),
    );
}

/// Check the class's characteristics and subclass selection.
fn validate_class(hero: &Hero, issues: &mut Vec<ValidationIssue>) {
    let Some(class) = &hero.class else {
        return;
    };

    if class.characteristics.is_empty() {
        issues.push(ValidationIssue::warning(
            Section::Class,
            "characteristics not chosen".to_string(),
        ));
    } else {
        match class.characteristic_array() {
            Some(array) if is_valid_array(&array, &class.primary_characteristics) => {}
            Some(array) => issues.push(ValidationIssue::error(
                Section::Class,
                format!("characteristics {array} are not a valid array for {}", class.name),
            )),
            None => issues.push(ValidationIssue::error(
                Section::Class,
                format!(
                    "characteristics must assign all five scores, got {}",
                    class.characteristics.len()
                ),
            )),
        }
    }

    let selected = class.selected_subclasses().count();
    if selected > class.subclass_count {
        issues.push(ValidationIssue::error(
            Section::Class,
            format!(
                "{selected} {} selected, {} allowed",
                subclass_label(class),
                class.subclass_count
            ),
        ));
    } else if selected < class.subclass_count {
        issues.push(ValidationIssue::warning(
            Section::Class,
            format!(
                "{} of {} {} chosen",
                selected,
                class.subclass_count,
                subclass_label(class)
            ),
        ));
    }
}

fn subclass_label(class: &forge_core::HeroClass) -> String {
    if class.subclass_name.is_empty() {
        "subclass(es)".to_string()
    } else {
        format!("{}(s)", class.subclass_name.to_lowercase())
    }
}
