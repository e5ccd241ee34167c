pub mod analyze;
pub mod classify;
pub mod config;
pub mod palindrome;
pub mod types;
pub mod wordlist;

pub use analyze::{analyze_word, build_report};
pub use classify::LetterClassifier;
pub use config::Config;
pub use palindrome::is_palindrome;
pub use types::*;
