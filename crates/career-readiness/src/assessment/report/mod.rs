mod summary;
pub mod views;

pub use summary::{QuestionView, ResultReport, SectionOutline, SessionView};
pub use views::{CardVariant, ScoreBand, ScoreCard, WiscarEntry};
