//! Client for the hosted backend's table API (PostgREST dialect).

mod config;
mod error;
mod query;
mod rest_client;

pub use config::BackendConfig;
pub use error::BackendError;
pub use query::SelectQuery;
pub use rest_client::{decode_rows, RestClient, RestTransport};
