pub mod progress;
pub mod word;

pub use progress::{Rating, StudyState, WordProgress, WordStatus};
pub use word::{Library, Meanings, VocabEntry};
