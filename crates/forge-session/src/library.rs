//! The saved hero list.
//!
//! Every change is computed on a fresh copy of the list, written to the
//! store, and only then swapped in. A failed write leaves the in-memory list
//! as it was.

use forge_core::{Hero, HeroId, Options, Sourcebook};
use forge_rules::{Catalog, create_hero, update_hero};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::export::parse_hero;
use crate::store::{Store, StoreKey, load_json, save_json};

/// Heroes on disk (or wherever the store puts them), kept sorted by name.
pub struct HeroLibrary {
    heroes: Vec<Hero>,
    store: Box<dyn Store>,
}

impl HeroLibrary {
    /// Load the hero list from `store`. A store with no hero list yields an empty library.
    pub fn load(store: Box<dyn Store>) -> SessionResult<Self> {
        let stored: Vec<Hero> = load_json(store.as_ref(), StoreKey::Heroes)?.unwrap_or_default();
        let mut heroes: Vec<Hero> = stored.into_iter().map(update_hero).collect();
        sort_by_name(&mut heroes);
        debug!(count = heroes.len(), "loaded heroes");
        Ok(Self { heroes, store })
    }

    /// All heroes, sorted by name.
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Number of heroes.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Look up a hero by exact id.
    pub fn get(&self, id: &HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|h| &h.id == id)
    }

    /// Find a hero by exact id, unique id prefix, or case-insensitive name.
    pub fn find(&self, query: &str) -> SessionResult<&Hero> {
        let query = query.trim();
        if let Some(hero) = self.heroes.iter().find(|h| h.id.as_str() == query) {
            return Ok(hero);
        }
        let mut matches: Vec<&Hero> = self
            .heroes
            .iter()
            .filter(|h| !query.is_empty() && h.id.as_str().starts_with(query))
            .collect();
        if matches.is_empty() {
            matches = self
                .heroes
                .iter()
                .filter(|h| h.name.trim().eq_ignore_ascii_case(query))
                .collect();
        }
        match matches.as_slice() {
            [hero] => Ok(*hero),
            [] => Err(SessionError::HeroNotFound(query.to_string())),
            _ => Err(SessionError::AmbiguousHero {
                query: query.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Create a blank hero and persist it.
    pub fn add_hero(&mut self, catalog: &Catalog, setting_id: &str) -> SessionResult<Hero> {
        let hero = create_hero(catalog, setting_id)?;
        self.insert(hero.clone())?;
        info!(hero = %hero.id, "created hero");
        Ok(hero)
    }

    /// Import hero JSON under a fresh id and persist it.
    pub fn import_hero(&mut self, json: &str) -> SessionResult<Hero> {
        let mut hero = parse_hero(json)?;
        hero.id = HeroId::generate();
        self.insert(hero.clone())?;
        info!(hero = %hero.id, name = %hero.display_name(), "imported hero");
        Ok(hero)
    }

    /// Replace the stored hero with the same id. Returns false if there is none.
    pub fn save_hero(&mut self, hero: &Hero) -> SessionResult<bool> {
        let Some(index) = self.heroes.iter().position(|h| h.id == hero.id) else {
            return Ok(false);
        };
        let mut next = self.heroes.clone();
        next[index] = hero.clone();
        self.persist(next)?;
        Ok(true)
    }

    /// Remove a hero. Returns false if there is none.
    pub fn delete_hero(&mut self, id: &HeroId) -> SessionResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next: Vec<Hero> = self.heroes.iter().filter(|h| &h.id != id).cloned().collect();
        self.persist(next)?;
        info!(hero = %id, "deleted hero");
        Ok(true)
    }

    /// The stored homebrew sourcebook, empty if none.
    pub fn homebrew(&self) -> SessionResult<Sourcebook> {
        Ok(load_json(self.store.as_ref(), StoreKey::Homebrew)?.unwrap_or_default())
    }

    /// Replace the stored homebrew sourcebook.
    pub fn save_homebrew(&mut self, homebrew: &Sourcebook) -> SessionResult<()> {
        save_json(self.store.as_mut(), StoreKey::Homebrew, homebrew)
    }

    /// The stored options, defaults if none.
    pub fn options(&self) -> SessionResult<Options> {
        Ok(load_json(self.store.as_ref(), StoreKey::Options)?.unwrap_or_default())
    }

    /// Replace the stored options.
    pub fn save_options(&mut self, options: &Options) -> SessionResult<()> {
        save_json(self.store.as_mut(), StoreKey::Options, options)
    }

    fn insert(&mut self, hero: Hero) -> SessionResult<()> {
        let mut next = self.heroes.clone();
        next.push(hero);
        self.persist(next)
    }

    fn persist(&mut self, mut heroes: Vec<Hero>) -> SessionResult<()> {
        sort_by_name(&mut heroes);
        save_json(self.store.as_mut(), StoreKey::Heroes, &heroes)?;
        debug!(count = heroes.len(), "saved heroes");
        self.heroes = heroes;
        Ok(())
    }
}

fn sort_by_name(heroes: &mut [Hero]) {
    heroes.sort_by(|a, b| a.name.cmp(&b.name));
}
