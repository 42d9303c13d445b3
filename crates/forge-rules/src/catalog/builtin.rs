//! Built-in reference data for the Orden campaign setting.
//!
//! These produce the same entities a homebrew sourcebook would, but
//! without requiring a file on disk.

use forge_core::{
    Ability, Ancestry, CampaignSetting, Career, Characteristic, Complication, Culture, Feature,
    FeatureField, FeaturesAtLevel, HeroClass, Kit, SelectionData, SubClass,
};

use super::{BESPOKE_CULTURE, Catalog, DEFAULT_SETTING};

const CRAFTING: &[&str] = &["Alchemy", "Architecture", "Blacksmithing", "Cooking", "Jewelry"];
const EXPLORATION: &[&str] = &["Climb", "Drive", "Navigate", "Ride", "Swim", "Track"];
const INTERPERSONAL: &[&str] = &["Brag", "Empathize", "Interrogate", "Lie", "Persuade", "Read Person"];
const INTRIGUE: &[&str] = &["Alertness", "Conceal Object", "Disguise", "Eavesdrop", "Pick Lock", "Sneak"];
const LORE: &[&str] = &["Culture", "History", "Magic", "Monsters", "Religion", "Timescape"];

/// The complete Orden catalog.
pub fn orden() -> Catalog {
    let environments = environments();
    let organizations = organizations();
    let upbringings = upbringings();

    let aspect = |list: &[Feature], id: &str| list.iter().find(|f| f.id == id).cloned();
    let cultures = vec![
        Culture::new(
            BESPOKE_CULTURE,
            "Bespoke",
            "A culture of your own design: choose its environment, organization, and upbringing.",
            None,
            None,
            None,
        ),
        Culture::new(
            "free-company",
            "Free Company",
            "Sellswords who travel from contract to contract and share everything.",
            aspect(&environments, "nomadic"),
            aspect(&organizations, "communal"),
            aspect(&upbringings, "martial"),
        )
        .with_languages(&["Caelian", "Vaslorian"]),
        Culture::new(
            "high-court",
            "High Court",
            "The gilded halls of a capital city, where rank is everything.",
            aspect(&environments, "urban"),
            aspect(&organizations, "bureaucratic"),
            aspect(&upbringings, "noble"),
        )
        .with_languages(&["Caelian"]),
        Culture::new(
            "stone-hall",
            "Stone Hall",
            "A mountain hold of engineers and record-keepers.",
            aspect(&environments, "secluded"),
            aspect(&organizations, "bureaucratic"),
            aspect(&upbringings, "creative"),
        )
        .with_languages(&["Zaliac"]),
        Culture::new(
            "wild-kin",
            "Wild Kin",
            "Villages at the edge of the deep woods, living off the land.",
            aspect(&environments, "wilderness"),
            aspect(&organizations, "communal"),
            aspect(&upbringings, "labor"),
        )
        .with_languages(&["Yllyric"]),
    ];

    Catalog {
        settings: vec![CampaignSetting::new(
            DEFAULT_SETTING,
            "Orden",
            "The default setting: a world of fractured kingdoms and old gods.",
        )],
        ancestries: ancestries(),
        cultures,
        environments,
        organizations,
        upbringings,
        careers: careers(),
        classes: classes(),
        kits: kits(),
        complications: complications(),
    }
}

fn ancestries() -> Vec<Ancestry> {
    vec![
        Ancestry::new(
            "dwarf",
            "Dwarf",
            "Stout folk of stone and rune, slow to anger and slower to forget.",
            vec![
                Feature::size("dwarf-size", 1, Some('M')),
                Feature::text("dwarf-runic-carving", "Runic Carving", "You can carve a magic rune onto any stone object."),
                Feature::bonus("dwarf-grounded", "Grounded", FeatureField::Stability, 1),
            ],
        ),
        Ancestry::new(
            "human",
            "Human",
            "Adaptable and ambitious, humans are found in every corner of Orden.",
            vec![
                Feature::size("human-size", 1, Some('M')),
                Feature::text("human-detect-supernatural", "Detect the Supernatural", "You can sense undead, demons, and other supernatural creatures nearby."),
                Feature::bonus("human-staying-power", "Staying Power", FeatureField::Recoveries, 2),
                Feature::skill("human-skill", "Human Skill", SelectionData::choose(1, &[])),
            ],
        ),
        Ancestry::new(
            "polder",
            "Polder",
            "Small, quick, and hard to pin down.",
            vec![
                Feature::size("polder-size", 1, Some('S')),
                Feature::ability(
                    "polder-shadowmeld",
                    Ability {
                        id: "shadowmeld".to_string(),
                        name: "Shadowmeld".to_string(),
                        description: "You flatten yourself into a shadow on a wall or floor.".to_string(),
                        cost: 0,
                    },
                ),
                Feature::skill("polder-skill", "Nimble Fingers", SelectionData::choose(1, INTRIGUE)),
            ],
        ),
        Ancestry::new(
            "wode-elf",
            "Wode Elf",
            "Elves of the deep forest, at home among trees and shadow.",
            vec![
                Feature::size("wode-elf-size", 1, Some('M')),
                Feature::text("wode-elf-glamor", "Wode Elf Glamor", "You gain an edge on tests made to hide and sneak."),
                Feature::bonus("wode-elf-swift", "Swift", FeatureField::Speed, 1),
            ],
        ),
    ]
}

fn environments() -> Vec<Feature> {
    vec![
        Feature::skill("nomadic", "Nomadic", SelectionData::choose(1, EXPLORATION))
            .with_description("Your culture travels from place to place."),
        Feature::skill("rural", "Rural", SelectionData::choose(1, CRAFTING))
            .with_description("Your culture lives in a village or on farmland."),
        Feature::skill("secluded", "Secluded", SelectionData::choose(1, LORE))
            .with_description("Your culture dwells in one isolated place."),
        Feature::skill("urban", "Urban", SelectionData::choose(1, INTRIGUE))
            .with_description("Your culture lives in a city."),
        Feature::skill("wilderness", "Wilderness", SelectionData::choose(1, EXPLORATION))
            .with_description("Your culture survives in the wild."),
    ]
}

fn organizations() -> Vec<Feature> {
    vec![
        Feature::skill("bureaucratic", "Bureaucratic", SelectionData::choose(1, INTERPERSONAL))
            .with_description("Your culture is ruled by officials and written law."),
        Feature::skill("communal", "Communal", SelectionData::choose(1, CRAFTING))
            .with_description("Your culture shares power and property."),
    ]
}

fn upbringings() -> Vec<Feature> {
    vec![
        Feature::skill("academic", "Academic", SelectionData::choose(1, LORE))
            .with_description("You were raised among books and scholars."),
        Feature::skill("creative", "Creative", SelectionData::choose(1, CRAFTING))
            .with_description("You were raised to make things."),
        Feature::skill("labor", "Labor", SelectionData::choose(1, EXPLORATION))
            .with_description("You were raised to hard physical work."),
        Feature::skill("lawless", "Lawless", SelectionData::choose(1, INTRIGUE))
            .with_description("You were raised outside the law."),
        Feature::skill("martial", "Martial", SelectionData::choose(1, EXPLORATION))
            .with_description("You were raised to fight."),
        Feature::skill("noble", "Noble", SelectionData::choose(1, INTERPERSONAL))
            .with_description("You were raised among the powerful."),
    ]
}

fn careers() -> Vec<Career> {
    vec![
        Career::new(
            "agent",
            "Agent",
            "You were a spy in service to a crown, guild, or cause.",
            vec![
                Feature::skill("agent-skill-sneak", "Sneak", SelectionData::fixed(&["Sneak"])),
                Feature::skill("agent-skills", "Agent Skills", SelectionData::choose(2, INTERPERSONAL)),
                Feature::language("agent-languages", "Languages", SelectionData::choose(2, &[])),
                Feature::bonus("agent-wealth", "Wealth", FeatureField::Wealth, 1),
            ],
            Some(Feature::text("agent-title", "Sleeper Agent", "You keep a second identity ready at all times.")),
        ),
        Career::new(
            "artisan",
            "Artisan",
            "You made things with your hands and sold them.",
            vec![
                Feature::skill("artisan-skills", "Artisan Skills", SelectionData::choose(2, CRAFTING)),
                Feature::language("artisan-language", "Language", SelectionData::choose(1, &[])),
                Feature::bonus("artisan-project-points", "Project Points", FeatureField::ProjectPoints, 240),
            ],
            Some(Feature::text("artisan-title", "Guild Master", "Crafters of your guild defer to you.")),
        ),
        Career::new(
            "laborer",
            "Laborer",
            "You worked fields, docks, or mines.",
            vec![
                Feature::skill("laborer-skills", "Laborer Skills", SelectionData::choose(2, EXPLORATION)),
                Feature::bonus("laborer-project-points", "Project Points", FeatureField::ProjectPoints, 120),
                Feature::bonus("laborer-renown", "Renown", FeatureField::Renown, 1),
            ],
            Some(Feature::text("laborer-title", "Foreman", "Workers listen when you speak.")),
        ),
        Career::new(
            "performer",
            "Performer",
            "You entertained crowds for coin and applause.",
            vec![
                Feature::skill("performer-skills", "Performer Skills", SelectionData::choose(2, INTERPERSONAL)),
                Feature::bonus("performer-renown", "Renown", FeatureField::Renown, 2),
            ],
            Some(Feature::text("performer-title", "Crowd Favorite", "Audiences know your name.")),
        ),
        Career::new(
            "sage",
            "Sage",
            "You studied in a library, temple, or college.",
            vec![
                Feature::skill("sage-skills", "Sage Skills", SelectionData::choose(2, LORE)),
                Feature::language("sage-languages", "Languages", SelectionData::choose(2, &[])),
                Feature::bonus("sage-project-points", "Project Points", FeatureField::ProjectPoints, 240),
            ],
            Some(Feature::text("sage-title", "Loremaster", "Scholars seek your opinion.")),
        ),
        Career::new(
            "soldier",
            "Soldier",
            "You fought in an army or militia.",
            vec![
                Feature::skill("soldier-skill-alertness", "Alertness", SelectionData::fixed(&["Alertness"])),
                Feature::skill("soldier-skills", "Soldier Skills", SelectionData::choose(1, EXPLORATION)),
                Feature::bonus("soldier-renown", "Renown", FeatureField::Renown, 1),
                Feature::bonus("soldier-wealth", "Wealth", FeatureField::Wealth, 1),
            ],
            Some(Feature::text("soldier-title", "Veteran", "Old comrades turn up wherever you go.")),
        ),
    ]
}

fn ability(id: &str, name: &str, cost: u32, description: &str) -> Ability {
    Ability {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
    }
}

fn subclass(id: &str, name: &str, description: &str, level_one: Vec<Feature>) -> SubClass {
    SubClass::new(id, name, description, vec![FeaturesAtLevel::new(1, level_one)])
}

fn classes() -> Vec<HeroClass> {
    let conduit = HeroClass {
        heroic_resource: "Piety".to_string(),
        subclass_name: "Domain".to_string(),
        subclass_count: 2,
        primary_characteristics: vec![Characteristic::Intuition],
        features_by_level: vec![
            FeaturesAtLevel::new(
                1,
                vec![
                    Feature::text("conduit-prayer", "Prayer", "At the start of your turn you may pray for more piety."),
                    Feature::ability("conduit-healing-grace", ability("healing-grace", "Healing Grace", 0, "An ally within range may spend a recovery.")),
                    Feature::skill("conduit-skills", "Conduit Skills", SelectionData::choose(1, LORE)),
                ],
            ),
            FeaturesAtLevel::new(2, vec![Feature::text("conduit-blessing", "Blessing of the Faithful", "Allies near you gain temporary stamina.")]),
        ],
        subclasses: vec![
            subclass("life", "Life", "The domain of healing.", vec![Feature::text("life-revitalize", "Revitalizing Ritual", "Allies regain extra stamina when they rest.")]),
            subclass("protection", "Protection", "The domain of shields.", vec![Feature::text("protection-ward", "Protective Ritual", "Allies gain stability.")]),
            subclass("storm", "Storm", "The domain of wind and lightning.", vec![Feature::skill("storm-skill", "Storm Skill", SelectionData::fixed(&["Navigate"]))]),
            subclass("war", "War", "The domain of battle.", vec![Feature::text("war-ritual", "Blessing of Steel", "Allies deal extra damage.")]),
        ],
        ..HeroClass::new("conduit", "Conduit", "A divine magic user who heals and empowers allies.")
    };

    let fury = HeroClass {
        heroic_resource: "Rage".to_string(),
        subclass_name: "Aspect".to_string(),
        subclass_count: 1,
        primary_characteristics: vec![Characteristic::Might, Characteristic::Agility],
        features_by_level: vec![
            FeaturesAtLevel::new(
                1,
                vec![
                    Feature::text("fury-growing-ferocity", "Growing Ferocity", "You gain benefits as your rage grows."),
                    Feature::ability("fury-brutal-slam", ability("brutal-slam", "Brutal Slam", 0, "A heavy blow that pushes the target.")),
                    Feature::skill("fury-skills", "Primordial Skills", SelectionData::choose(1, EXPLORATION)),
                ],
            ),
            FeaturesAtLevel::new(2, vec![Feature::text("fury-aspect-2", "Aspect Benefit", "Your aspect grants a second benefit.")]),
        ],
        subclasses: vec![
            subclass("berserker", "Berserker", "Fury of the storm.", vec![Feature::skill("berserker-skill", "Berserker Skill", SelectionData::fixed(&["Lift"]))]),
            subclass("reaver", "Reaver", "Fury of the hunt.", vec![Feature::skill("reaver-skill", "Reaver Skill", SelectionData::fixed(&["Hide"]))]),
            subclass("stormwight", "Stormwight", "Fury of the beast.", vec![Feature::skill("stormwight-skill", "Stormwight Skill", SelectionData::fixed(&["Track"]))]),
        ],
        ..HeroClass::new("fury", "Fury", "A raging warrior who channels primordial chaos.")
    };

    let shadow = HeroClass {
        heroic_resource: "Insight".to_string(),
        subclass_name: "College".to_string(),
        subclass_count: 1,
        primary_characteristics: vec![Characteristic::Agility],
        features_by_level: vec![FeaturesAtLevel::new(
            1,
            vec![
                Feature::text("shadow-hesitation", "Hesitation Is Weakness", "Spend insight to act again."),
                Feature::skill("shadow-skills", "Shadow Skills", SelectionData::choose(2, INTRIGUE)),
            ],
        )],
        subclasses: vec![
            subclass("black-ash", "College of Black Ash", "Masters of teleportation.", vec![Feature::text("black-ash-step", "Black Ash Teleport", "Teleport through shadows.")]),
            subclass("caustic-alchemy", "College of Caustic Alchemy", "Masters of poison.", vec![Feature::skill("caustic-alchemy-skill", "Alchemy", SelectionData::fixed(&["Alchemy"]))]),
            subclass("harlequin-mask", "College of the Harlequin Mask", "Masters of disguise.", vec![Feature::skill("harlequin-mask-skill", "Disguise", SelectionData::fixed(&["Disguise"]))]),
        ],
        ..HeroClass::new("shadow", "Shadow", "An assassin trained in a secret college.")
    };

    let tactician = HeroClass {
        heroic_resource: "Focus".to_string(),
        subclass_name: "Tactical Doctrine".to_string(),
        subclass_count: 1,
        primary_characteristics: vec![Characteristic::Might, Characteristic::Reason],
        features_by_level: vec![
            FeaturesAtLevel::new(
                1,
                vec![
                    Feature::text("tactician-field-arsenal", "Field Arsenal", "You can use any weapon."),
                    Feature::ability("tactician-strike-now", ability("strike-now", "Strike Now!", 5, "Two allies make free strikes.")),
                    Feature::language("tactician-language", "Tactician Language", SelectionData::choose(1, &[])),
                ],
            ),
            FeaturesAtLevel::new(2, vec![Feature::text("tactician-battle-cry", "Battle Cry", "Allies gain an edge.")]),
        ],
        subclasses: vec![
            subclass("insurgent", "Insurgent", "Unconventional warfare.", vec![Feature::skill("insurgent-skill", "Insurgent Skill", SelectionData::fixed(&["Sneak"]))]),
            subclass("mastermind", "Mastermind", "Battlefield planning.", vec![Feature::skill("mastermind-skill", "Mastermind Skill", SelectionData::fixed(&["Strategy"]))]),
            subclass("vanguard", "Vanguard", "Leading from the front.", vec![Feature::skill("vanguard-skill", "Vanguard Skill", SelectionData::fixed(&["Lead"]))]),
        ],
        ..HeroClass::new("tactician", "Tactician", "A commander who directs allies in battle.")
    };

    vec![conduit, fury, shadow, tactician]
}

fn kits() -> Vec<Kit> {
    vec![
        Kit::new("cloak-and-dagger", "Cloak and Dagger", "Light armor and daggers for the sneaky.", 3, 2, 0),
        Kit::new("mountain", "Mountain", "Heavy armor and a heavy weapon.", 9, 0, 2),
        Kit::new("panther", "Panther", "A heavy weapon and no armor.", 6, 1, 0),
        Kit::new("spellsword", "Spellsword", "Light armor, a blade, and a protective ward.", 6, 0, 1)
            .with_ward(Feature::text("spellsword-ward", "Ward of Steel", "When an enemy strikes you, they take damage.")),
    ]
}

fn complications() -> Vec<Complication> {
    vec![
        Complication::new(
            "amnesia",
            "Amnesia",
            "You remember nothing before a certain day.",
            vec![
                Feature::skill("amnesia-benefit", "Amnesia Benefit", SelectionData::choose(1, &[])),
                Feature::text("amnesia-drawback", "Amnesia Drawback", "You have a bane on tests to recall your own past."),
            ],
        ),
        Complication::new(
            "cursed-weapon",
            "Cursed Weapon",
            "Your weapon hungers for blood.",
            vec![
                Feature::ability("cursed-weapon-benefit", ability("blood-hunger", "Blood Hunger", 0, "Your weapon deals extra damage to bleeding foes.")),
                Feature::text("cursed-weapon-drawback", "Cursed Weapon Drawback", "You cannot willingly let go of the weapon."),
            ],
        ),
        Complication::new(
            "disgraced",
            "Disgraced",
            "You were cast out from the society that raised you.",
            vec![
                Feature::language("disgraced-benefit", "Disgraced Benefit", SelectionData::choose(1, &[])),
                Feature::bonus("disgraced-drawback", "Disgraced Drawback", FeatureField::Renown, -1),
            ],
        ),
        Complication::new(
            "elemental-inside",
            "Elemental Inside",
            "An elemental spirit is bound within you.",
            vec![
                Feature::bonus("elemental-inside-benefit", "Elemental Inside Benefit", FeatureField::Stamina, 3),
                Feature::text("elemental-inside-drawback", "Elemental Inside Drawback", "The elemental sometimes takes control."),
            ],
        ),
    ]
}
