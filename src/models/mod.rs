pub mod loaders;
pub mod question;
pub mod question_set;
pub mod survey;

pub use loaders::{load_all_drafts, load_survey_draft, DraftBatch};
pub use question::{Question, QuestionId, QuestionType, NO_OPTIONS};
pub use question_set::QuestionSet;
pub use survey::{QuestionDraft, SurveyAggregate, SurveyDraft};
