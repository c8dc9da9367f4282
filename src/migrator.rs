use crate::api::ExecSqlApi;
use crate::config::Config;
use crate::error::FixError;
use crate::report::MigrationReport;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

/// One statement's outcome, before it is folded into the report.
enum Outcome {
    Success(Value),
    Error(String),
}

/// Applies an ordered list of SQL statements to the remote endpoint,
/// one at a time, and accumulates a [`MigrationReport`].
pub struct Migrator {
    api: ExecSqlApi,
}

impl Migrator {
    pub fn new(cfg: &Config) -> Result<Self, FixError> {
        Ok(Self {
            api: ExecSqlApi::new(cfg)?,
        })
    }

    /// Execute a single statement. Every failure mode, transport or
    /// endpoint-side, is absorbed into an error outcome; nothing is raised.
    async fn execute(&self, sql: &str) -> Outcome {
        let resp = match self.api.post(sql).await {
            Ok(resp) => resp,
            Err(e) => return Outcome::Error(e.to_string()),
        };

        let status = resp.status();
        if status == StatusCode::OK {
            match resp.json::<Value>().await {
                Ok(value) => Outcome::Success(value),
                Err(e) => Outcome::Error(format!("invalid JSON in response: {e}")),
            }
        } else {
            let body = resp.text().await.unwrap_or_default();
            Outcome::Error(format!("HTTP {}: {}", status.as_u16(), body))
        }
    }

    /// Run every statement in declaration order. A failing statement never
    /// stops the ones after it; later independent statements (index creation,
    /// seed inserts) should still be attempted.
    pub async fn run(&self, statements: &[&str]) -> MigrationReport {
        info!(count = statements.len(), "applying schema statements");
        let mut report = MigrationReport::default();

        for (i, sql) in statements.iter().enumerate() {
            let sequence = i + 1;
            debug!(sequence, "executing statement");
            match self.execute(sql).await {
                Outcome::Success(value) => {
                    println!("✅ statement {sequence} succeeded");
                    report.push_success(sequence, sql, value);
                }
                Outcome::Error(message) => {
                    println!("❌ statement {sequence} failed: {message}");
                    warn!(sequence, error = %message, "statement failed");
                    report.push_error(sequence, sql, message);
                }
            }
        }

        report
    }
}
