mod app_events;
mod app_render;
mod app_state;
pub mod article_input;

// Re-export public types
pub use app_state::App;
pub use article_input::{ArticleInput, InputEvent, Side};
