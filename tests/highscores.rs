use kwis::model::Level;
use kwis::persist::{self, HighscoreStore};
use kwis::settings::Settings;
use kwis::store::{FileStore, KeyValueStore, MemoryStore, StoreError};

#[test]
fn test_record_if_better_ordering() {
    let mut hs = HighscoreStore::new(MemoryStore::new());
    assert!(hs.record_if_better(Level::Easy, 2, 40));

    assert!(!hs.record_if_better(Level::Easy, 1, 30));
    assert!(!hs.record_if_better(Level::Easy, 1, 40));
    assert!(!hs.record_if_better(Level::Easy, 2, 40));
    let stored = hs.load(Level::Easy).unwrap();
    assert_eq!((stored.correct, stored.points), (2, 40));

    assert!(hs.record_if_better(Level::Easy, 3, 40));
    let stored = hs.load(Level::Easy).unwrap();
    assert_eq!((stored.correct, stored.points), (3, 40));

    // points dominate even with fewer correct answers
    assert!(hs.record_if_better(Level::Easy, 1, 41));
    assert_eq!(hs.load(Level::Easy).unwrap().correct, 1);
}

#[test]
fn test_levels_are_independent() {
    let mut hs = HighscoreStore::new(MemoryStore::new());
    hs.record_if_better(Level::Medium, 4, 160);
    assert_eq!(hs.load(Level::Easy), None);
    assert_eq!(hs.load(Level::Hard), None);
    assert!(hs.record_if_better(Level::Hard, 1, 30));
}

#[test]
fn test_reset_and_reset_all() {
    let mut hs = HighscoreStore::new(MemoryStore::new());
    for level in Level::ALL {
        hs.record_if_better(level, 1, 10);
    }

    hs.reset(Level::Medium);
    hs.reset(Level::Medium);
    assert_eq!(hs.load(Level::Medium), None);
    assert!(hs.load(Level::Easy).is_some());

    hs.reset_all();
    for level in Level::ALL {
        assert_eq!(hs.load(level), None);
    }
}

#[test]
fn test_file_store_persists_across_instances() {
    let tmp = tempfile::tempdir().unwrap();

    let mut hs = HighscoreStore::new(FileStore::new(tmp.path()));
    assert!(hs.record_if_better(Level::Hard, 3, 110));
    drop(hs);

    let mut hs = HighscoreStore::new(FileStore::new(tmp.path()));
    let stored = hs.load(Level::Hard).unwrap();
    assert_eq!((stored.correct, stored.points), (3, 110));
    assert!(tmp.path().join("highscore_moeilijk.yaml").exists());

    hs.reset_all();
    assert!(!tmp.path().join("highscore_moeilijk.yaml").exists());
}

/// Store whose every operation fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(broken(key))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(broken(key))
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        Err(broken(key))
    }
}

fn broken(key: &str) -> StoreError {
    StoreError::Io {
        path: key.into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
    }
}

#[test]
fn test_unavailable_storage_degrades_quietly() {
    let mut hs = HighscoreStore::new(BrokenStore);
    assert_eq!(hs.load(Level::Easy), None);
    // the write is dropped, so no record is reported
    assert!(!hs.record_if_better(Level::Easy, 4, 136));
    assert_eq!(hs.load(Level::Easy), None);
    hs.reset(Level::Easy);
    hs.reset_all();

    let mut store = BrokenStore;
    assert_eq!(persist::load_settings(&store), Settings::default());
    persist::save_settings(&mut store, &Settings::default());
}
