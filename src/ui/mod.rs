pub mod dialog;
pub mod highscores;
pub mod keybar;
pub mod layout;
pub mod menu;
pub mod question;
pub mod result;
pub mod settings;
pub mod statusbar;
pub mod titlebar;

use ratatui::style::Color;
use ratatui::Frame;

use crate::model::{Level, LevelColor};
use crate::state::{AppState, Screen};

pub const GRONINGEN_RED: Color = Color::Rgb(216, 44, 44);
pub const GRONINGEN_GREEN: Color = Color::Rgb(0, 128, 56);
pub const GRONINGEN_BLUE: Color = Color::Rgb(44, 82, 156);

pub fn level_color(level: Level) -> Color {
    match level.color() {
        LevelColor::Green => GRONINGEN_GREEN,
        LevelColor::Blue => GRONINGEN_BLUE,
        LevelColor::Red => GRONINGEN_RED,
    }
}

pub fn draw(f: &mut Frame, state: &AppState, caption: Option<&str>) {
    let area = f.area();

    if state.screen == Screen::Welcome {
        menu::draw_welcome(f, area);
        return;
    }

    let layout = layout::compute_layout(area);
    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Welcome => {}
        Screen::StartMenu => menu::draw_start_menu(f, layout.main, state),
        Screen::LevelSelection => menu::draw_level_selection(f, layout.main, state),
        Screen::Quiz => question::draw_question(f, layout.main, state),
        Screen::Results => result::draw_results(f, layout.main, state),
        Screen::Highscores => highscores::draw_highscores(f, layout.main, state),
        Screen::Settings => settings::draw_settings(f, layout.main, state),
    }

    statusbar::draw_statusbar(f, layout.statusbar, state, caption);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
