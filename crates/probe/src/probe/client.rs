use std::time::{Duration, Instant};

use contracts::system::auth::{LoginProbeRequest, LoginProbeResponse};
use thiserror::Error;

use crate::shared::config::ProbeSettings;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProbeError {
    /// Имя варианта для строки `Error Type` в отчёте
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::ClientBuild(_) => "ClientBuild",
            ProbeError::Transport(_) => "Transport",
        }
    }
}

/// Всё, что удалось узнать об ответе сервера.
/// Ответ с кодом не 2xx тоже считается результатом.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub elapsed: Duration,
    pub body: String,
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    pub fn parsed(&self) -> Result<LoginProbeResponse, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Один POST на функцию авторизации, без повторов
pub struct LoginProbe {
    client: reqwest::Client,
    endpoint: String,
}

impl LoginProbe {
    pub fn new(settings: &ProbeSettings) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let client = builder.build().map_err(ProbeError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, request: &LoginProbeRequest) -> Result<ProbeOutcome, ProbeError> {
        tracing::info!(endpoint = %self.endpoint, email = %request.email, "Sending login probe");

        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();
        let body = response.text().await?;
        let elapsed = started.elapsed();

        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            bytes = body.len(),
            "Login probe completed"
        );

        Ok(ProbeOutcome {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            elapsed,
            body,
        })
    }
}
