mod confidence;
mod degradation_event;
mod index_entry;
mod scored_passage;

pub use confidence::{ConfidenceSignals, ConfidenceWeights, RankDiscount};
pub use degradation_event::DegradationEvent;
pub use index_entry::IndexEntry;
pub use scored_passage::{PassageOrigin, ScoredPassage};
