use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ServiceAccountKey;
use crate::error::UpstreamError;

const SHEETS_HOST: &str = "https://sheets.googleapis.com";
const DRIVE_HOST: &str = "https://www.googleapis.com";
const SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets.readonly \
                      https://www.googleapis.com/auth/drive.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize, Default)]
struct ValueGrid {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// One entry of a Drive folder listing. Drive may omit either field; the
/// photo lookup skips such entries.
#[derive(Clone, Debug, Deserialize)]
pub struct FolderEntry {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
struct FileList {
    #[serde(default)]
    files: Vec<FolderEntry>,
}

/// Read-only client for the Sheets values API and the Drive files API,
/// authenticated as a service account. Tokens are exchanged per call; no
/// state outlives a request.
pub struct GoogleClient {
    http: reqwest::Client,
    key: ServiceAccountKey,
}

impl GoogleClient {
    pub fn new(key: ServiceAccountKey) -> Self {
        GoogleClient {
            http: reqwest::Client::new(),
            key,
        }
    }

    async fn access_token(&self) -> Result<String, UpstreamError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: SCOPES,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + 3600,
        };
        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Token(format!("{status}: {body}")));
        }
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// All rows of the given range, as the formatted strings Sheets returns.
    /// A range with no data deserializes to an empty grid.
    pub async fn sheet_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, UpstreamError> {
        let url = format!("{SHEETS_HOST}/v4/spreadsheets/{spreadsheet_id}/values/{range}");
        let grid: ValueGrid = self.get_json(&url, &[]).await?;
        Ok(grid.values)
    }

    /// Non-trashed entries directly inside the folder, name and id only.
    pub async fn folder_entries(
        &self,
        folder_id: &str,
    ) -> Result<Vec<FolderEntry>, UpstreamError> {
        let url = format!("{DRIVE_HOST}/drive/v3/files");
        let filter = format!("'{folder_id}' in parents and trashed = false");
        let list: FileList = self
            .get_json(
                &url,
                &[
                    ("q", filter.as_str()),
                    ("fields", "files(id,name)"),
                    ("pageSize", "1000"),
                ],
            )
            .await?;
        Ok(list.files)
    }
}
