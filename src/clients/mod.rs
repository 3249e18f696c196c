pub mod survey_client;

pub use survey_client::{ServerAck, SurveyClient};
