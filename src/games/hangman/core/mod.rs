mod letter;
pub use letter::{Letter, ParseLetterError};

mod word;
pub use word::{ParseWordError, Word};
