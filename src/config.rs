use anyhow::Context;
use shuttle_runtime::SecretStore;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Which spreadsheet range and photo folder a request should read. Each
/// endpoint owns one of these, so the same pipeline can serve any number of
/// configured datasets.
#[derive(Clone, Debug)]
pub struct DatasetParams {
    pub spreadsheet_id: String,
    pub range: String,
    pub folder_id: String,
}

/// Service-account credentials used to sign the Google OAuth assertion.
#[derive(Clone, Debug)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Shared secret every request must present.
    pub secret_key: String,
    /// Public host prefix photo file ids are resolved against.
    pub photo_host: String,
    pub employees: DatasetParams,
    pub master_data: DatasetParams,
}

impl AppConfig {
    pub fn from_secrets(secrets: &SecretStore) -> anyhow::Result<(AppConfig, ServiceAccountKey)> {
        let get = |key: &str| {
            secrets
                .get(key)
                .with_context(|| format!("secret {key} was not found"))
        };

        let folder_id = get("PHOTO_FOLDER_ID")?;
        let config = AppConfig {
            secret_key: get("SECRET_KEY")?,
            photo_host: get("PHOTO_HOST")?,
            employees: DatasetParams {
                spreadsheet_id: get("EMPLOYEE_SPREADSHEET_ID")?,
                range: get("EMPLOYEE_RANGE")?,
                folder_id: folder_id.clone(),
            },
            master_data: DatasetParams {
                spreadsheet_id: get("MASTER_SPREADSHEET_ID")?,
                range: get("MASTER_RANGE")?,
                folder_id,
            },
        };
        let key = ServiceAccountKey {
            client_email: get("SA_CLIENT_EMAIL")?,
            private_key: get("SA_PRIVATE_KEY")?,
            token_uri: secrets
                .get("SA_TOKEN_URI")
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        };
        Ok((config, key))
    }
}
