use macroquad::prelude::*;

use crate::application::{GameState, Settings};
use crate::ui::Button;

/// Control-surface commands shared by the menu buttons and the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
    Clear,
    Exit,
}

/// Whether the main loop should keep going after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Apply one command to the game state
pub fn apply(state: GameState, command: Command) -> (GameState, Flow) {
    match command {
        Command::TogglePause => (state.toggle_pause(), Flow::Continue),
        Command::Reset => (state.reset(), Flow::Continue),
        Command::Clear => (state.clear(), Flow::Continue),
        Command::Exit => (state, Flow::Exit),
    }
}

/// Map a window position to (column, row). Returns None over the panel.
/// Positions left of or above the grid map to negative coordinates.
pub fn screen_to_cell(mouse_pos: (f32, f32), settings: &Settings) -> Option<(i32, i32)> {
    let (grid_width, _) = settings.grid_extent();
    if mouse_pos.0 >= grid_width {
        return None;
    }
    let column = (mouse_pos.0 / settings.cell_size).floor() as i32;
    let row = (mouse_pos.1 / settings.cell_size).floor() as i32;
    Some((column, row))
}

/// Toggle the clicked cell, once per press
pub fn handle_cell_click(state: &mut GameState, settings: &Settings, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((column, row)) = screen_to_cell(mouse_pos, settings) {
        state.toggle_cell(column, row);
    }
}

/// Keyboard shortcuts; Ctrl is optional for Reset and Clear
fn pressed_key_commands() -> Vec<Command> {
    let bindings = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::R, Command::Reset),
        (KeyCode::C, Command::Clear),
        (KeyCode::Escape, Command::Exit),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Commands from buttons clicked this frame
fn clicked_button_commands(buttons: &[(Command, Button)], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|(_, button)| button.is_clicked(mouse_pos))
        .map(|&(command, _)| command)
        .collect()
}

/// Process buttons and keyboard, folding every command into the state
pub fn process_commands(
    state: GameState,
    buttons: &[(Command, Button)],
    mouse_pos: (f32, f32),
) -> (GameState, Flow) {
    clicked_button_commands(buttons, mouse_pos)
        .into_iter()
        .chain(pressed_key_commands())
        .fold((state, Flow::Continue), |(s, flow), command| match flow {
            Flow::Exit => (s, Flow::Exit),
            Flow::Continue => apply(s, command),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeedMode;

    fn settings() -> Settings {
        Settings::default()
            .with_dimensions(10, 8)
            .with_cell_size(10.0)
            .with_seed_mode(SeedMode::Empty)
    }

    #[test]
    fn test_screen_to_cell() {
        let settings = settings();
        assert_eq!(screen_to_cell((0.0, 0.0), &settings), Some((0, 0)));
        assert_eq!(screen_to_cell((99.9, 79.9), &settings), Some((9, 7)));
        assert_eq!(screen_to_cell((15.0, 200.0), &settings), Some((1, 20)));
        assert_eq!(screen_to_cell((-3.0, 5.0), &settings), Some((-1, 0)));
        assert_eq!(screen_to_cell((100.0, 5.0), &settings), None);
    }

    #[test]
    fn test_apply_commands() {
        let state = GameState::new(&settings()).unwrap();
        let (state, flow) = apply(state, Command::TogglePause);
        assert!(state.is_running());
        assert_eq!(flow, Flow::Continue);

        let (state, _) = apply(state, Command::Reset);
        assert!(!state.is_running());

        let (state, flow) = apply(state, Command::Exit);
        assert_eq!(flow, Flow::Exit);
        let (state, _) = apply(state, Command::Clear);
        assert_eq!(state.engine.population(), 0);
    }
}
