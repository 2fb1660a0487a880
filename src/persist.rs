use std::path::PathBuf;

use directories::ProjectDirs;

use crate::model::{Highscore, Level};
use crate::settings::Settings;
use crate::store::{KeyValueStore, StoreError};

pub const SETTINGS_KEY: &str = "settings";

pub fn highscore_key(level: Level) -> String {
    format!("highscore_{}", level.key())
}

/// Platform data directory, falling back to `./.kwis`.
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("nl", "Kwis", "kwis")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".kwis"))
}

/// Best result per level. Storage failures never reach the caller: reads
/// degrade to "no record" and writes are dropped with a warning.
#[derive(Debug)]
pub struct HighscoreStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HighscoreStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn load(&self, level: Level) -> Option<Highscore> {
        let key = highscore_key(level);
        match read_record(&self.store, &key) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("ignoring highscore for {}: {}", level.key(), e);
                None
            }
        }
    }

    /// Stores the result when it beats the current record (points first,
    /// then correct count). Returns whether a new record was stored; a
    /// failed write counts as not stored.
    pub fn record_if_better(&mut self, level: Level, correct: u32, points: u32) -> bool {
        let candidate = Highscore::new(correct, points);
        if let Some(existing) = self.load(level) {
            if !candidate.beats(&existing) {
                return false;
            }
        }

        let record = Highscore {
            achieved_at: Some(chrono::Local::now().fixed_offset()),
            ..candidate
        };
        match write_record(&mut self.store, &highscore_key(level), &record) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not save highscore for {}: {}", level.key(), e);
                false
            }
        }
    }

    pub fn reset(&mut self, level: Level) {
        if let Err(e) = self.store.delete(&highscore_key(level)) {
            log::warn!("could not reset highscore for {}: {}", level.key(), e);
        }
    }

    pub fn reset_all(&mut self) {
        for level in Level::ALL {
            self.reset(level);
        }
    }
}

fn read_record<S: KeyValueStore>(store: &S, key: &str) -> Result<Option<Highscore>, StoreError> {
    let Some(content) = store.get(key)? else {
        return Ok(None);
    };
    let record = serde_yaml::from_str(&content).map_err(|source| StoreError::Format {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(record))
}

fn write_record<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    record: &Highscore,
) -> Result<(), StoreError> {
    let yaml = serde_yaml::to_string(record).map_err(|source| StoreError::Format {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &yaml)
}

/// Loads settings, falling back to defaults when missing or unreadable.
pub fn load_settings<S: KeyValueStore>(store: &S) -> Settings {
    let content = match store.get(SETTINGS_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Settings::default(),
        Err(e) => {
            log::warn!("could not read settings: {}", e);
            return Settings::default();
        }
    };
    match serde_yaml::from_str::<Settings>(&content) {
        Ok(settings) => settings.clamped(),
        Err(e) => {
            log::warn!("corrupt settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

pub fn save_settings<S: KeyValueStore>(store: &mut S, settings: &Settings) {
    let result = serde_yaml::to_string(settings)
        .map_err(|source| StoreError::Format {
            key: SETTINGS_KEY.to_string(),
            source,
        })
        .and_then(|yaml| store.set(SETTINGS_KEY, &yaml));
    if let Err(e) = result {
        log::warn!("could not save settings: {}", e);
    }
}

pub fn format_highscore(record: Option<&Highscore>) -> String {
    match record {
        Some(hs) => format!("{} goed • {} pt", hs.correct, hs.points),
        None => "Nog geen score".to_string(),
    }
}

pub fn print_highscores<S: KeyValueStore>(highscores: &HighscoreStore<S>) {
    println!("Highscores");
    for level in Level::ALL {
        let record = highscores.load(level);
        print!("  {:<10} {}", level.display_name(), format_highscore(record.as_ref()));
        if let Some(at) = record.and_then(|r| r.achieved_at) {
            print!("  ({})", at.format("%Y-%m-%d %H:%M"));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_first_result_is_always_a_record() {
        let mut hs = HighscoreStore::new(MemoryStore::new());
        assert_eq!(hs.load(Level::Easy), None);
        assert!(hs.record_if_better(Level::Easy, 0, 0));
        let stored = hs.load(Level::Easy).unwrap();
        assert_eq!((stored.correct, stored.points), (0, 0));
        assert!(stored.achieved_at.is_some());
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set("highscore_moeilijk", "{{not yaml").unwrap();
        let mut hs = HighscoreStore::new(store);
        assert_eq!(hs.load(Level::Hard), None);
        assert!(hs.record_if_better(Level::Hard, 1, 30));
        assert_eq!(hs.load(Level::Hard).unwrap().points, 30);
    }

    #[test]
    fn test_record_without_timestamp_loads() {
        let mut store = MemoryStore::new();
        store
            .set("highscore_gemiddeld", "correct: 2\npoints: 40\n")
            .unwrap();
        let hs = HighscoreStore::new(store);
        assert_eq!(hs.load(Level::Medium), Some(Highscore::new(2, 40)));
    }

    #[test]
    fn test_settings_roundtrip_through_store() {
        let mut store = MemoryStore::new();
        assert_eq!(load_settings(&store), Settings::default());

        let settings = Settings {
            time_easy: 25,
            speech_enabled: false,
            ..Settings::default()
        };
        save_settings(&mut store, &settings);
        assert_eq!(load_settings(&store), settings);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "time_easy: [1, 2]").unwrap();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_format_highscore() {
        assert_eq!(format_highscore(None), "Nog geen score");
        assert_eq!(
            format_highscore(Some(&Highscore::new(3, 94))),
            "3 goed • 94 pt"
        );
    }
}
