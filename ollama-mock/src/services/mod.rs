pub mod extractor;
pub mod metrics;

pub use extractor::{extract_word, match_word, MatchSource, WordMatch, UNKNOWN_WORD};
pub use self::metrics::{get_metrics, init_metrics, record_generation, spawn_upkeep, UPKEEP_INTERVAL};
