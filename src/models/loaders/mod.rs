pub mod toml_loader;

pub use toml_loader::{load_all_drafts, load_survey_draft, DraftBatch};
