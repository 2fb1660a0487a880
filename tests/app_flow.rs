use std::time::{Duration, Instant};

use kwis::bank::QuestionBank;
use kwis::feedback::Cue;
use kwis::model::{Level, ResultTier};
use kwis::persist::{self, HighscoreStore};
use kwis::settings::Settings;
use kwis::state::{AppState, ResultAction, Screen};
use kwis::store::{FileStore, KeyValueStore};

fn app_in(dir: &std::path::Path, now: Instant) -> AppState {
    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(dir));
    let settings = persist::load_settings(&store);
    AppState::new(
        QuestionBank::builtin(),
        settings,
        HighscoreStore::new(store),
        now,
    )
}

fn play_all_correct(app: &mut AppState, mut now: Instant) -> Instant {
    while app.screen == Screen::Quiz {
        app.answer(0, now);
        now += Duration::from_secs(2);
        app.on_tick(now);
    }
    now
}

#[test]
fn test_record_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = app_in(tmp.path(), now);
    app.skip_welcome();
    app.selected_level = Level::Medium;
    app.start_quiz(now).unwrap();
    play_all_correct(&mut app, now);

    assert_eq!(app.screen, Screen::Results);
    let summary = app.result.clone().unwrap();
    assert!(summary.new_record);
    assert_eq!(summary.tally.tier(), ResultTier::Perfect);
    let best = summary.best.unwrap();
    assert_eq!(best.points, summary.tally.total_points);
    drop(app);

    let app = app_in(tmp.path(), now);
    assert_eq!(app.highscore(Level::Medium).map(|h| h.points), Some(best.points));
    assert_eq!(app.highscore(Level::Easy), None);
}

#[test]
fn test_play_again_does_not_report_same_record_twice() {
    let tmp = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = app_in(tmp.path(), now);
    app.skip_welcome();
    app.start_quiz(now).unwrap();
    let now = play_all_correct(&mut app, now);
    assert!(app.result.as_ref().unwrap().new_record);

    app.result_cursor = ResultAction::ALL
        .iter()
        .position(|a| *a == ResultAction::PlayAgain)
        .unwrap();
    app.result_activate(now).unwrap();
    assert_eq!(app.screen, Screen::Quiz);
    play_all_correct(&mut app, now);

    let summary = app.result.as_ref().unwrap();
    assert!(!summary.new_record);
    assert_eq!(summary.best.as_ref().unwrap().points, summary.tally.total_points);
}

#[test]
fn test_settings_change_round_trips_and_applies() {
    let tmp = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = app_in(tmp.path(), now);
    app.skip_welcome();
    app.settings = Settings {
        time_hard: 20,
        speech_enabled: false,
        ..Settings::default()
    };
    app.leave_settings();
    drop(app);

    let mut app = app_in(tmp.path(), now);
    assert_eq!(app.settings.time_hard, 20);
    app.skip_welcome();
    app.selected_level = Level::Hard;
    app.start_quiz(now).unwrap();
    assert_eq!(app.session.as_ref().unwrap().total_seconds(), 20);
    assert!(matches!(app.take_cues().as_slice(), [Cue::Speak(_)]));
}
