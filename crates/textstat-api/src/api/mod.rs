//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  get_character_count, get_longest_words, get_paragraph_count, get_sentence_count,
  get_word_count, health_check, post_text,
};
pub use routes::{create_router, run_server, text_routes};
pub use state::AppState;
