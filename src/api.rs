use crate::config::Config;
use crate::error::FixError;
use serde::Serialize;
use std::time::Duration;
use url::Url;

#[derive(Serialize)]
struct ExecSqlBody<'a> {
    query: &'a str,
}

/// Thin wrapper around the remote `exec_sql` RPC route.
///
/// Authenticates every request with the project key, both as the `apikey`
/// header and as a bearer token, the way the REST gateway expects.
pub struct ExecSqlApi {
    client: reqwest::Client,
    url: Url,
    key: String,
}

impl ExecSqlApi {
    pub fn new(cfg: &Config) -> Result<Self, FixError> {
        let client = reqwest::Client::builder()
            .user_agent("schemafix/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;
        // join() drops the last path segment unless the base ends with '/'.
        let mut base = cfg.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base.join("rest/v1/rpc/exec_sql")?;
        Ok(Self {
            client,
            url,
            key: cfg.key.clone(),
        })
    }

    pub async fn post(&self, sql: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(self.url.clone())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .json(&ExecSqlBody { query: sql })
            .send()
            .await
    }
}
