use std::path::Path;

use forge_rules::calculate_characteristic_arrays;
use forge_session::EditSession;

/// Requested changes, one per `forge edit` flag.
#[derive(Default)]
pub struct Changes {
    pub name: Option<String>,
    pub ancestry: Option<String>,
    pub culture: Option<String>,
    pub environment: Option<String>,
    pub organization: Option<String>,
    pub upbringing: Option<String>,
    pub career: Option<String>,
    pub class: Option<String>,
    pub characteristics: Option<usize>,
    pub subclasses: Vec<String>,
    pub kit: Option<String>,
    pub complication: Option<String>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ancestry.is_none()
            && self.culture.is_none()
            && self.environment.is_none()
            && self.organization.is_none()
            && self.upbringing.is_none()
            && self.career.is_none()
            && self.class.is_none()
            && self.characteristics.is_none()
            && self.subclasses.is_empty()
            && self.kit.is_none()
            && self.complication.is_none()
    }
}

pub fn run(data_dir: &Path, query: &str, changes: &Changes) -> Result<(), String> {
    if changes.is_empty() {
        return Err("nothing to change (see `forge edit --help`)".to_string());
    }

    let (_, mut library, catalog) = super::open(data_dir)?;
    let hero = library.find(query).map_err(|e| e.to_string())?.clone();
    let mut session = EditSession::new(&catalog, hero);

    if let Some(name) = &changes.name {
        session.set_name(name);
    }
    select("ancestry", &changes.ancestry, |id| session.select_ancestry(id))?;
    select("culture", &changes.culture, |id| session.select_culture(id))?;

    for (label, value) in [
        ("environment", &changes.environment),
        ("organization", &changes.organization),
        ("upbringing", &changes.upbringing),
    ] {
        if value.is_some() && session.hero().culture.is_none() {
            return Err(format!("choose a culture before setting its {label}"));
        }
    }
    select("environment", &changes.environment, |id| session.set_environment(id))?;
    select("organization", &changes.organization, |id| session.set_organization(id))?;
    select("upbringing", &changes.upbringing, |id| session.set_upbringing(id))?;

    select("career", &changes.career, |id| session.select_career(id))?;
    select("class", &changes.class, |id| session.select_class(id))?;

    if let Some(n) = changes.characteristics {
        let class = session
            .hero()
            .class
            .as_ref()
            .ok_or("choose a class before its characteristics")?;
        let arrays = calculate_characteristic_arrays(&class.primary_characteristics);
        let array = n
            .checked_sub(1)
            .and_then(|i| arrays.get(i))
            .copied()
            .ok_or_else(|| {
                format!(
                    "{} has arrays 1 to {}, got {n} (see `forge arrays {}`)",
                    class.name,
                    arrays.len(),
                    class.id
                )
            })?;
        session
            .set_characteristics(array)
            .map_err(|e| e.to_string())?;
    }

    if !changes.subclasses.is_empty() {
        let class = session
            .hero()
            .class
            .as_ref()
            .ok_or("choose a class before its subclasses")?;
        for id in &changes.subclasses {
            if !class.subclasses.iter().any(|sc| sc.id.eq_ignore_ascii_case(id)) {
                return Err(format!("{} has no subclass \"{id}\"", class.name));
            }
        }
        let ids: Vec<&str> = changes.subclasses.iter().map(String::as_str).collect();
        session.set_subclasses(&ids).map_err(|e| e.to_string())?;
    }

    select("kit", &changes.kit, |id| session.select_kit(id))?;
    select("complication", &changes.complication, |id| {
        session.select_complication(id)
    })?;

    if !session
        .save_changes(&mut library)
        .map_err(|e| e.to_string())?
    {
        return Err("hero was removed while editing".to_string());
    }

    let hero = session.hero();
    println!("  Updated hero '{}'", hero.display_name());
    let progress: Vec<String> = session
        .section_states()
        .into_iter()
        .map(|(section, state)| format!("{section} {}", super::state_marker(state)))
        .collect();
    println!("  {}", progress.join(", "));

    Ok(())
}

/// Apply one selection flag. "none" clears the selection.
fn select(
    label: &str,
    value: &Option<String>,
    apply: impl FnOnce(Option<&str>) -> bool,
) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let id = (!value.eq_ignore_ascii_case("none")).then_some(value.as_str());
    if apply(id) {
        Ok(())
    } else {
        Err(format!("unknown {label}: \"{value}\""))
    }
}
