//! Data model module

mod new_text;
mod text_record;

pub use new_text::{MAX_TEXT_LENGTH, MIN_TEXT_LENGTH, NewText, TEXT_RULES, TextRule};
pub use text_record::{DbId, TextRecord, Timestamp};
