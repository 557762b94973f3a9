use macroquad::prelude::*;
use toroidal_life::{
    GameState, Settings,
    input::{self, Flow},
    rendering, ui,
};

fn window_conf() -> Conf {
    let (width, height) = ui::window_size(&Settings::default());
    Conf {
        window_title: "Conway's Game of Life (Lite Version)".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let mut state = match GameState::new(&settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };
    let buttons = ui::create_buttons(&settings);

    loop {
        let mouse_pos = mouse_position();

        let (next, flow) = input::process_commands(state, &buttons, mouse_pos);
        state = next;
        if flow == Flow::Exit {
            log::info!("exiting at generation {}", state.engine.generation());
            break;
        }
        input::handle_cell_click(&mut state, &settings, mouse_pos);

        // Steps only while running, once per interval
        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid(state.engine.grid(), &settings);
        rendering::draw_controls(&state, &settings, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
