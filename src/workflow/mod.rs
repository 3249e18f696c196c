pub mod designer_session;

pub use designer_session::SurveyDesigner;
