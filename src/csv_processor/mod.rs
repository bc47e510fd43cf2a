pub mod extract;
pub mod reader;
pub mod writer;

pub use extract::{extract_first_words, first_token, write_word_list};
pub use reader::WordReader;
pub use writer::{write_cards, CardWriter};
