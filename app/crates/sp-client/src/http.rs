use crate::{ClientError, Result as ClientResult};

use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Base URL plus a shared reqwest client.
#[derive(Debug, Clone)]
pub(crate) struct HttpApi {
    pub(crate) base_url: String,
    client: ReqwestClient,
}

impl HttpApi {
    pub(crate) fn new(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request and decode a JSON success body.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let body = self.execute_raw(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send the request, discarding any success body.
    pub(crate) async fn execute_empty(&self, req: RequestBuilder) -> ClientResult<()> {
        self.execute_raw(req).await.map(|_| ())
    }

    async fn execute_raw(&self, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(&body).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ));
        }

        Ok(body)
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .filter(|message| !message.is_empty())
        .map(String::from)
}
