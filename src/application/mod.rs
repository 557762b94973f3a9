mod settings;
mod game_state;

pub use settings::Settings;
pub use game_state::GameState;
