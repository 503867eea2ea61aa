use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shelter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelter").unwrap();
    cmd.env("SHELTER_HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add_rex(dir: &TempDir) {
    shelter(dir)
        .args(["pet", "add", "Dog", "P1", "Rex", "3", "Labrador", "Healthy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex has been added."));
}

#[test]
fn empty_directory_lists_nothing() {
    let dir = TempDir::new().unwrap();
    shelter(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No pets available."));
}

#[test]
fn added_pet_is_listed_and_persisted() {
    let dir = TempDir::new().unwrap();
    add_rex(&dir);

    shelter(&dir)
        .args(["pet", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex").and(predicate::str::contains("Labrador")));

    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Dog,P1,Rex,3,Labrador,Healthy\n"
    );
}

#[test]
fn adoption_moves_pet_to_adopter() {
    let dir = TempDir::new().unwrap();
    add_rex(&dir);
    shelter(&dir)
        .args(["adopter", "add", "A1", "Jane", "555-1234"])
        .assert()
        .success();

    shelter(&dir)
        .args(["adopt", "A1", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane has adopted Rex."));

    shelter(&dir)
        .args(["adopter", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Adopted Pets:")
                .and(predicate::str::contains("P1 - Rex")),
        );
    shelter(&dir)
        .args(["pet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pets available."));
    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Dog,P1,Rex,3,Labrador,Healthy\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("adopters.txt")).unwrap(),
        "A1,Jane,555-1234,P1\n"
    );

    // Another mutating run must not lose the adoption.
    shelter(&dir)
        .args(["pet", "add", "Cat", "P2", "Tom", "2", "Tabby", "Healthy"])
        .assert()
        .success();
    shelter(&dir)
        .args(["adopter", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P1 - Rex"));
}

#[test]
fn adopting_unknown_pet_reports_not_found() {
    let dir = TempDir::new().unwrap();
    shelter(&dir)
        .args(["adopter", "add", "A1", "Jane", "555-1234"])
        .assert()
        .success();

    shelter(&dir)
        .args(["adopt", "A1", "P9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adopter or Pet not found"));
}

#[test]
fn non_numeric_age_is_rejected() {
    let dir = TempDir::new().unwrap();
    shelter(&dir)
        .args(["pet", "add", "Cat", "C1", "Tom", "two", "Tabby", "Healthy"])
        .assert()
        .failure();

    assert!(!dir.path().join("pets.txt").exists());
}

#[test]
fn health_update_is_saved() {
    let dir = TempDir::new().unwrap();
    add_rex(&dir);

    shelter(&dir)
        .args(["pet", "health", "P1", "Vaccinated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex is now marked as: Vaccinated"));
    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Dog,P1,Rex,3,Labrador,Vaccinated\n"
    );
}

#[test]
fn config_changes_pets_file() {
    let dir = TempDir::new().unwrap();
    shelter(&dir)
        .args(["config", "pets-file", "animals.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pets-file set to animals.txt"));

    add_rex(&dir);
    assert!(dir.path().join("animals.txt").exists());

    shelter(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("pets-file = animals.txt"));
}
