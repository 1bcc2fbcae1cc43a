use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::model::{DirectoryData, Employee, ErrorBody, MasterData};

pub const SECRET_HEADER: &str = "x-secret-key";

/// Consuming-side façade over the two directory endpoints. Both fetches run
/// concurrently and any failure, transport or HTTP, collapses to "no data";
/// partial results are never returned.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        DirectoryClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Both datasets, or `None` when either fetch failed. The failure is
    /// logged, not surfaced.
    pub async fn fetch_directory(&self) -> Option<DirectoryData> {
        match tokio::try_join!(self.employees(), self.master_data()) {
            Ok((employees, master_data)) => Some(DirectoryData {
                employees,
                master_data,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "directory fetch failed");
                None
            }
        }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.get_json("/api/employee").await
    }

    pub async fn master_data(&self) -> Result<MasterData, ClientError> {
        self.get_json("/api/master-data").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(SECRET_HEADER, &self.secret_key)
            .send()
            .await?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.json::<ErrorBody>().await.unwrap_or(ErrorBody {
                error_code: String::new(),
                error_message: "no structured error payload".to_string(),
            });
            return Err(classify(status, body));
        }
        Ok(response.json().await?)
    }
}

/// Maps a non-success response to the client error taxonomy: unauthorized,
/// server failure, or anything else.
fn classify(status: u16, body: ErrorBody) -> ClientError {
    match status {
        401 => ClientError::Unauthorized(body.error_message),
        500 => ClientError::Server {
            code: body.error_code,
            message: body.error_message,
        },
        other => ClientError::Unexpected {
            status: other,
            message: body.error_message,
        },
    }
}
