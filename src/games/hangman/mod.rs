pub mod controller;
pub use controller::GuessError;

pub mod core;

mod options;
pub use options::GameStyle;

pub mod state;

pub mod terminal;

pub mod view;

mod words_list;
pub use words_list::{Error as WordsListError, WordsList, DEFAULT_WORDS};
