pub mod auth;
pub mod http_transport;

pub use auth::{AuthContext, CurrentUser, SignedOut, StaticTokenAuth};
pub use http_transport::{HttpTransport, SurveyTransport};
