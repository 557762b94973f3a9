use macroquad::prelude::*;

use crate::application::{GameState, Settings};
use crate::domain::Grid;
use crate::input::Command;
use crate::ui::{Button, PANEL_MARGIN, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = WHITE;
const DEAD_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = Color::new(0.25, 0.25, 0.25, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Draw every cell: white when alive, black when dead, with 1px borders
pub fn draw_grid(grid: &Grid, settings: &Settings) {
    let size = settings.cell_size;

    for (x, y, cell) in grid.iter_cells() {
        let screen_x = x as f32 * size;
        let screen_y = y as f32 * size;
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

        draw_rectangle(screen_x, screen_y, size, size, color);
        draw_rectangle_lines(screen_x, screen_y, size, size, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw the side panel: menu buttons, then status
pub fn draw_controls(
    state: &GameState,
    settings: &Settings,
    buttons: &[(Command, Button)],
    mouse_pos: (f32, f32),
) {
    let px = panel_x(settings);
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);

    buttons.iter().for_each(|(_, button)| button.draw(mouse_pos));

    let engine = &state.engine;
    let (width, height) = engine.dimensions();
    let text_x = px + PANEL_MARGIN;
    let top = buttons.len() as f32 * crate::ui::BUTTON_SPACING + 30.0;

    let (status, status_color) = if engine.is_running() {
        ("Running", GREEN)
    } else {
        ("Paused", ORANGE)
    };

    let labels = [
        (status.to_string(), 20.0, status_color),
        (format!("Generation: {}", engine.generation()), 16.0, WHITE),
        (format!("Population: {}", engine.population()), 16.0, WHITE),
        (format!("Grid: {}x{}", width, height), 14.0, GRAY),
        (format!("Step: {:.2}ms", state.last_evolution_time_ms), 14.0, GRAY),
        (format!("Render: {:.2}ms", state.last_render_time_ms), 14.0, GRAY),
        ("Click a cell to toggle".to_string(), 13.0, GRAY),
    ];

    labels.iter().enumerate().for_each(|(idx, (text, size, color))| {
        draw_text(text, text_x, top + idx as f32 * 22.0, *size, *color);
    });
}
