use shelter::api::ShelterApi;
use shelter::config::ShelterConfig;
use shelter::model::{Adopter, Pet, Species};
use shelter::store::fs::FileStore;
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> ShelterApi<FileStore> {
    let root = dir.path().to_path_buf();
    let config = ShelterConfig::load(&root).unwrap();
    let mut api = ShelterApi::new(FileStore::with_config(root.clone(), &config), root);
    api.load().unwrap();
    api
}

#[test]
fn fresh_directory_loads_empty_and_saves_empty_files() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);

    let loaded = api.load().unwrap();
    assert_eq!(loaded.load_report.unwrap().missing_files.len(), 2);

    api.save().unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("pets.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(dir.path().join("adopters.txt")).unwrap(), "");
}

#[test]
fn records_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.add_pet(Pet::new(Species::Dog, "P1", "Rex", 3, "Labrador", "Healthy"))
            .unwrap();
        api.add_pet(Pet::new(Species::Cat, "P2", "Tom", 2, "Tabby", "Healthy"))
            .unwrap();
        api.add_pet(Pet::new(Species::Bird, "P3", "Tweety", 1, "Canary", "Healthy"))
            .unwrap();
        api.register_adopter(Adopter::new("A1", "Jane", "555-1234"))
            .unwrap();
        api.adopt("A1", "P3").unwrap();
        api.adopt("A1", "P1").unwrap();
        api.save().unwrap();
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Cat,P2,Tom,2,Tabby,Healthy\n\
         Bird,P3,Tweety,1,Canary,Healthy\n\
         Dog,P1,Rex,3,Labrador,Healthy\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("adopters.txt")).unwrap(),
        "A1,Jane,555-1234,P3,P1\n"
    );

    let api = open(&dir);
    let pets: Vec<_> = api.list_pets().unwrap().listed_pets;
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, "P2");

    let adopters = api.list_adopters().unwrap().listed_adopters;
    let owned: Vec<&str> = adopters[0].pets.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(owned, vec!["P3", "P1"]);
}

#[test]
fn rex_and_jane_from_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pets.txt"), "Dog,P1,Rex,3,Labrador,Healthy\n").unwrap();
    fs::write(dir.path().join("adopters.txt"), "A1,Jane,555-1234,P1\n").unwrap();

    let mut api = open(&dir);
    assert!(api.list_pets().unwrap().listed_pets.is_empty());
    let adopters = api.list_adopters().unwrap().listed_adopters;
    assert_eq!(adopters[0].pets[0].name, "Rex");

    api.save().unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Dog,P1,Rex,3,Labrador,Healthy\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("adopters.txt")).unwrap(),
        "A1,Jane,555-1234,P1\n"
    );

    let api = open(&dir);
    let adopters = api.list_adopters().unwrap().listed_adopters;
    assert_eq!(adopters[0].pets[0].name, "Rex");
    assert!(api.list_pets().unwrap().listed_pets.is_empty());
}

#[test]
fn latin1_file_is_read_and_rewritten_as_utf8() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pets.txt"),
        b"Cat,C1,Zo\xeb,4,Siamese,Healthy\n".as_slice(),
    )
    .unwrap();

    let mut api = open(&dir);
    assert_eq!(api.center().find_pet("C1").unwrap().name, "Zoë");

    api.save().unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("pets.txt")).unwrap(),
        "Cat,C1,Zoë,4,Siamese,Healthy\n"
    );
}

#[test]
fn configured_file_names_are_used() {
    let dir = TempDir::new().unwrap();
    let mut config = ShelterConfig::default();
    config.set("pets-file", "animals.csv").unwrap();
    config.save(dir.path()).unwrap();

    let mut api = open(&dir);
    api.add_pet(Pet::new(Species::Dog, "P1", "Rex", 3, "Labrador", "Healthy"))
        .unwrap();
    api.save().unwrap();

    assert!(dir.path().join("animals.csv").exists());
    assert!(!dir.path().join("pets.txt").exists());
    assert!(dir.path().join("adopters.txt").exists());
}
