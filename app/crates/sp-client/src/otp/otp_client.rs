use crate::http::HttpApi;
use crate::Result as ClientResult;

use log::info;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpQrBlock {
    pub payload: String,
    pub data_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequestResponse {
    pub request_id: String,
    #[serde(default)]
    pub mock: Option<bool>,
    /// Only set by the service's mock mode
    #[serde(default)]
    pub mock_code: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub qr: Option<OtpQrBlock>,
    #[serde(default)]
    pub report_captured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyResponse {
    pub success: bool,
    pub phone: String,
    #[serde(default)]
    pub mock: Option<bool>,
    /// Remote user id the verified phone belongs to
    #[serde(default)]
    pub supabase_user_id: Option<String>,
    #[serde(default)]
    pub supabase_user_created: Option<bool>,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyBody<'a> {
    request_id: &'a str,
    code: &'a str,
}

/// Client of the phone one-time-code service.
pub struct OtpClient {
    http: HttpApi,
}

impl OtpClient {
    pub fn new(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            http: HttpApi::new(base_url, client),
        }
    }

    /// Send a code to an E.164 phone number. `report` is an opaque payload
    /// forwarded to the service as-is.
    pub async fn request_code(
        &self,
        phone: &str,
        report: Option<&Value>,
    ) -> ClientResult<OtpRequestResponse> {
        let body = RequestBody { phone, report };
        let req = self.http.request(Method::POST, "/otp/request").json(&body);
        let response: OtpRequestResponse = self.http.execute(req).await?;
        info!("OTP requested (request id {})", response.request_id);
        Ok(response)
    }

    pub async fn verify_code(&self, request_id: &str, code: &str) -> ClientResult<OtpVerifyResponse> {
        let body = VerifyBody { request_id, code };
        let req = self.http.request(Method::POST, "/otp/verify").json(&body);
        self.http.execute(req).await
    }
}
