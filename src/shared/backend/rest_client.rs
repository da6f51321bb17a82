use async_trait::async_trait;
use reqwest::{header, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{BackendConfig, BackendError, SelectQuery};

const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";
/// Inserts answer 201 with an empty body.
const INSERT_PREFERENCE: &str = "return=minimal";

/// Table-level calls against the backend.
///
/// Adapters depend on this seam so they can be exercised with canned rows.
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Returns a JSON array, or a single object when `query.is_single()`.
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Value, BackendError>;

    /// Append-only; nothing is read back, so anon roles need INSERT only.
    async fn insert(&self, table: &str, row: Value) -> Result<(), BackendError>;

    async fn ping(&self) -> Result<(), BackendError>;
}

#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RestClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn select_url(&self, table: &str, query: &SelectQuery) -> Result<Url, BackendError> {
        Url::parse_with_params(&self.config.table_url(table), &query.to_pairs())
            .map_err(|e| BackendError::Transport(format!("invalid backend url: {}", e)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn insert_request(&self, table: &str, row: &Value) -> RequestBuilder {
        self.authorized(self.http.post(self.config.table_url(table)))
            .header("Prefer", INSERT_PREFERENCE)
            .json(row)
    }
}

#[async_trait]
impl RestTransport for RestClient {
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Value, BackendError> {
        let url = self.select_url(table, query)?;
        debug!(table, url = %url, "Backend select");

        let mut request = self.authorized(self.http.get(url));
        if query.is_single() {
            request = request.header(header::ACCEPT, SINGLE_OBJECT_MEDIA_TYPE);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, query.is_single(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn insert(&self, table: &str, row: Value) -> Result<(), BackendError> {
        debug!(table, "Backend insert");

        let response = self
            .insert_request(table, &row)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, false, body));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let response = self
            .authorized(self.http.get(format!("{}/", self.config.rest_root())))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(map_status(status, false, String::new()))
        }
    }
}

/// PostgREST answers 406 when a single-object read matches zero (or many) rows.
fn map_status(status: StatusCode, single: bool, body: String) -> BackendError {
    if single && status == StatusCode::NOT_ACCEPTABLE {
        BackendError::NotFound
    } else {
        BackendError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

/// Decode a JSON array of rows into records.
pub fn decode_rows<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn client() -> RestClient {
        RestClient::new(BackendConfig::new("https://demo.supabase.co", "anon-key")).unwrap()
    }

    #[test]
    fn test_select_url_encodes_query_pairs() {
        let query = SelectQuery::all()
            .eq("is_public", true)
            .order_asc("sort_order");

        let url = client().select_url("contacts", &query).unwrap();

        assert_eq!(url.path(), "/rest/v1/contacts");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, query.to_pairs());
    }

    #[test]
    fn test_insert_asks_for_minimal_return() {
        let request = client()
            .insert_request("contact_messages", &json!({ "name": "Jane" }))
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/rest/v1/contact_messages");
        assert_eq!(request.headers()["Prefer"], "return=minimal");
        assert_eq!(request.headers()["apikey"], "anon-key");
    }

    #[test]
    fn test_single_not_acceptable_maps_to_not_found() {
        let err = map_status(StatusCode::NOT_ACCEPTABLE, true, "{}".to_string());
        assert_eq!(err, BackendError::NotFound);
    }

    #[test]
    fn test_list_not_acceptable_keeps_status() {
        let err = map_status(StatusCode::NOT_ACCEPTABLE, false, "nope".to_string());
        assert_eq!(
            err,
            BackendError::Status {
                status: 406,
                body: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_keeps_body() {
        let err = map_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            true,
            "boom".to_string(),
        );
        assert!(matches!(err, BackendError::Status { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let output = format!("{:?}", client());
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("anon-key"));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
        name: String,
    }

    #[test]
    fn test_decode_rows_success() {
        let rows: Vec<Row> = decode_rows(json!([{ "id": 1, "name": "a" }])).unwrap();
        assert_eq!(
            rows,
            vec![Row {
                id: 1,
                name: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_decode_rows_shape_mismatch() {
        let result: Result<Vec<Row>, _> = decode_rows(json!({ "id": 1 }));
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }
}
