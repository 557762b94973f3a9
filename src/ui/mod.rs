mod button;

pub use button::Button;

use crate::application::Settings;
use crate::input::Command;

pub const PANEL_WIDTH: f32 = 170.0;
pub const PANEL_MARGIN: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_SPACING: f32 = 46.0;

/// Minimum window height so the panel always fits
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Get the X position where the panel starts (right of the grid)
pub fn panel_x(settings: &Settings) -> f32 {
    settings.grid_extent().0
}

/// Window size in pixels for the given settings
pub fn window_size(settings: &Settings) -> (f32, f32) {
    let (grid_width, grid_height) = settings.grid_extent();
    (grid_width + PANEL_WIDTH, grid_height.max(MIN_WINDOW_HEIGHT))
}

/// Menu commands shown as buttons, with the shortcut hint for each
const MENU: &[(Command, &str)] = &[
    (Command::TogglePause, "Pause  | Space"),
    (Command::Reset, "Reset  | R"),
    (Command::Clear, "Clear  | C"),
    (Command::Exit, "Exit   | Esc"),
];

/// Create the panel buttons, stacked from the top of the panel
pub fn create_buttons(settings: &Settings) -> Vec<(Command, Button)> {
    let x = panel_x(settings) + PANEL_MARGIN;
    let width = PANEL_WIDTH - 2.0 * PANEL_MARGIN;
    MENU.iter()
        .enumerate()
        .map(|(idx, &(command, label))| {
            let y = PANEL_MARGIN + idx as f32 * BUTTON_SPACING;
            (command, Button::new(x, y, width, BUTTON_HEIGHT, label))
        })
        .collect()
}
