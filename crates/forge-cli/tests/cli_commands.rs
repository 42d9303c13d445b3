//! Integration tests for the forge CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `forge` pointed at a data directory, with colors off.
fn forge(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("forge").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("FORGE_DATA_DIR")
        .arg("--data-dir")
        .arg(data.path());
    cmd
}

/// A data directory holding one blank hero called Vess.
fn with_vess() -> TempDir {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["new", "--name", "Vess"])
        .assert()
        .success();
    data
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_summary_lists_every_kind() {
    let data = TempDir::new().unwrap();
    forge(&data).arg("catalog").assert().success().stdout(
        predicate::str::contains("ancestry")
            .and(predicate::str::contains("upbringing"))
            .and(predicate::str::contains("complication")),
    );
}

#[test]
fn catalog_lists_classes() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["catalog", "class"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fury")
                .and(predicate::str::contains("Tactician"))
                .and(predicate::str::contains("4 class entries")),
        );
}

#[test]
fn catalog_accepts_plural_kind() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["catalog", "kits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mountain"));
}

#[test]
fn catalog_unknown_kind() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["catalog", "spaceships"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown catalog kind"));
}

// ---------------------------------------------------------------------------
// arrays
// ---------------------------------------------------------------------------

#[test]
fn arrays_for_two_primary_class() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["arrays", "fury"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fury")
                .and(predicate::str::contains("primary: Might, Agility"))
                .and(predicate::str::contains("36 arrays")),
        );
}

#[test]
fn arrays_unknown_class() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["arrays", "bard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown class"));
}

// ---------------------------------------------------------------------------
// new / list
// ---------------------------------------------------------------------------

#[test]
fn list_empty_library() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No heroes yet"));
}

#[test]
fn new_hero_is_saved() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["new", "--name", "Vess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created hero 'Vess'"));

    assert!(data.path().join("forgesteel-heroes.json").exists());

    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vess").and(predicate::str::contains("1 heroes")));
}

#[test]
fn new_hero_without_name() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created hero 'Unnamed Hero'"));
}

#[test]
fn new_hero_unknown_setting() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["new", "--setting", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown campaign setting: atlantis"));
}

#[test]
fn data_dir_from_environment() {
    let data = TempDir::new().unwrap();
    Command::cargo_bin("forge")
        .unwrap()
        .env("FORGE_DATA_DIR", data.path())
        .args(["new", "--name", "Env"])
        .assert()
        .success();

    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Env"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_blank_hero() {
    let data = with_vess();
    forge(&data)
        .args(["show", "vess"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vess")
                .and(predicate::str::contains("todo Ancestry"))
                .and(predicate::str::contains("opt  Complication"))
                .and(predicate::str::contains("done Details")),
        );
}

#[test]
fn show_unknown_hero() {
    let data = with_vess();
    forge(&data)
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hero matches 'Nobody'"));
}

#[test]
fn show_ambiguous_name() {
    let data = with_vess();
    forge(&data).args(["new", "--name", "Vess"]).assert().success();
    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches 2 heroes"));
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[test]
fn edit_full_build() {
    let data = with_vess();
    forge(&data)
        .args([
            "edit",
            "Vess",
            "--ancestry",
            "human",
            "--culture",
            "high-court",
            "--career",
            "soldier",
            "--class",
            "fury",
            "--characteristics",
            "1",
            "--subclass",
            "berserker",
            "--kit",
            "mountain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated hero 'Vess'"));

    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("done Ancestry")
                .and(predicate::str::contains("Fury 1 (Berserker)"))
                .and(predicate::str::contains("MGT +2"))
                .and(predicate::str::contains("Mountain"))
                .and(predicate::str::contains("todo").not()),
        );
}

#[test]
fn edit_bespoke_culture_aspects() {
    let data = with_vess();
    forge(&data)
        .args([
            "edit",
            "Vess",
            "--culture",
            "bespoke",
            "--environment",
            "urban",
            "--upbringing",
            "noble",
        ])
        .assert()
        .success();

    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("urban").and(predicate::str::contains("noble")));
}

#[test]
fn edit_clears_with_none() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--kit", "panther"])
        .assert()
        .success();
    forge(&data)
        .args(["edit", "Vess", "--kit", "none"])
        .assert()
        .success();
    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo Kit"));
}

#[test]
fn edit_rename() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--name", "Korva"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated hero 'Korva'"));
    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Korva").and(predicate::str::contains("Vess").not()));
}

#[test]
fn edit_unknown_id_changes_nothing() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--ancestry", "human", "--kit", "jetpack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown kit: \"jetpack\""));

    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo Ancestry"));
}

#[test]
fn edit_aspect_needs_culture() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--environment", "urban"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose a culture"));
}

#[test]
fn edit_characteristics_out_of_range() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--class", "fury", "--characteristics", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("arrays 1 to 36"));
}

#[test]
fn edit_too_many_subclasses() {
    let data = with_vess();
    forge(&data)
        .args([
            "edit",
            "Vess",
            "--class",
            "fury",
            "--subclass",
            "berserker",
            "--subclass",
            "reaver",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("allows 1 subclass(es)"));
}

#[test]
fn edit_without_changes() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

// ---------------------------------------------------------------------------
// choose
// ---------------------------------------------------------------------------

#[test]
fn choose_fills_skill() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--ancestry", "human"])
        .assert()
        .success();
    forge(&data)
        .args(["choose", "Vess", "human-skill", "Alertness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Human Skill: Alertness"));

    forge(&data)
        .args(["show", "Vess"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("skill: Alertness")
                .and(predicate::str::contains("needs a choice").not()),
        );
}

#[test]
fn choose_wrong_count() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--ancestry", "human"])
        .assert()
        .success();
    forge(&data)
        .args(["choose", "Vess", "human-skill", "Alertness", "Climb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs 1 pick(s), got 2"));
}

#[test]
fn choose_outside_options() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--class", "fury"])
        .assert()
        .success();
    forge(&data)
        .args(["choose", "Vess", "fury-skills", "Sing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Sing' is not an option"));
}

#[test]
fn choose_on_bonus_feature() {
    let data = with_vess();
    forge(&data)
        .args(["edit", "Vess", "--ancestry", "human"])
        .assert()
        .success();
    forge(&data)
        .args(["choose", "Vess", "human-staying-power", "Anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no choice to make"));
}

// ---------------------------------------------------------------------------
// export / import
// ---------------------------------------------------------------------------

#[test]
fn export_json_to_stdout() {
    let data = with_vess();
    let output = forge(&data)
        .args(["export", "Vess"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Vess");
    assert_eq!(json["setting_id"], "orden");
}

#[test]
fn export_markdown_sheet() {
    let data = with_vess();
    forge(&data)
        .args(["export", "Vess", "--format", "markdown"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Vess")
                .and(predicate::str::contains("- Ancestry: none (Not Started)")),
        );
}

#[test]
fn export_to_directory_uses_suggested_name() {
    let data = with_vess();
    let out = TempDir::new().unwrap();
    forge(&data)
        .args(["export", "Vess", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    assert!(out.path().join("Vess.ds-hero").exists());
}

#[test]
fn export_to_directory_keeps_hostile_names_inside() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["new", "--name", "../escape"])
        .assert()
        .success();
    let root = TempDir::new().unwrap();
    let out = root.path().join("out");
    fs::create_dir(&out).unwrap();

    forge(&data)
        .args(["export", "../escape", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("_escape.ds-hero").exists());
    assert!(!root.path().join("escape.ds-hero").exists());
}

#[test]
fn export_then_import_adds_copy() {
    let data = with_vess();
    let out = TempDir::new().unwrap();
    let file = out.path().join("vess.ds-hero");
    forge(&data)
        .args(["export", "Vess", "-o"])
        .arg(&file)
        .assert()
        .success();

    forge(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported hero 'Vess'"));

    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 heroes"));
}

#[test]
fn export_unsupported_format() {
    let data = with_vess();
    forge(&data)
        .args(["export", "Vess", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn import_invalid_json() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("broken.ds-hero");
    fs::write(&file, "{ not json").unwrap();

    forge(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot import"));
}

#[test]
fn import_missing_file() {
    let data = TempDir::new().unwrap();
    forge(&data)
        .args(["import", "nowhere.ds-hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn import_camel_case_record() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("kell.ds-hero");
    fs::write(
        &file,
        r#"{
            "id": "legacy-kell",
            "name": "Kell",
            "settingID": "orden",
            "career": {
                "id": "sage",
                "name": "Sage",
                "features": [
                    {"id": "sage-pp", "name": "Project Points", "type": "Bonus",
                     "data": {"field": "projectPoints", "value": 240}}
                ]
            },
            "state": {"projectPoints": 240, "renown": 1}
        }"#,
    )
    .unwrap();

    forge(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported hero 'Kell'"));

    forge(&data)
        .args(["show", "Kell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Points  240"))
        .stdout(predicate::str::contains(
            "Project Points (+240 Project Points) sage-pp",
        ));
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[test]
fn delete_hero() {
    let data = with_vess();
    forge(&data)
        .args(["delete", "Vess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted hero 'Vess'"));

    forge(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No heroes yet"));
}
