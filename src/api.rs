use reqwest::{multipart, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::AnalysisResult;
use crate::config::{ApiConfig, Endpoint};
use crate::options::{form_flag, UploadOptions};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with `success` false or missing.
    #[error("server rejected request: {}", .0.as_deref().unwrap_or("no message"))]
    Server(Option<String>),
    /// The request failed or the reply could not be read.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("malformed reply: {err}"))
    }
}

/// The file part of an upload, already read into memory.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub session_id: &'a str,
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ReplyStatus {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Reads a `{success, error?, ...}` envelope. Error replies come with 4xx/5xx
/// statuses but still carry JSON, so the HTTP status is not consulted.
pub fn parse_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let status: ReplyStatus = serde_json::from_str(body)?;
    if !status.success {
        return Err(ApiError::Server(status.error));
    }
    Ok(serde_json::from_str(body)?)
}

pub async fn upload(
    config: &ApiConfig,
    file: FilePayload,
    options: &UploadOptions,
) -> Result<AnalysisResult, ApiError> {
    let part = multipart::Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(&file.mime)?;
    let form = multipart::Form::new()
        .part("file", part)
        .text("include_key_points", form_flag(options.include_key_points))
        .text("include_mindmap", form_flag(options.include_mindmap))
        .text("use_ocr", form_flag(options.use_ocr))
        .text("audience", options.audience.as_str())
        .text("summary_length", options.length.as_str())
        .text("language", options.language.as_str());

    let response = Client::new()
        .post(config.url(Endpoint::Upload))
        .multipart(form)
        .send()
        .await?;
    let body = response.text().await?;
    parse_reply(&body)
}

pub async fn chat(config: &ApiConfig, session_id: &str, question: &str) -> Result<String, ApiError> {
    let response = Client::new()
        .post(config.url(Endpoint::Chat))
        .json(&ChatRequest {
            session_id,
            question,
        })
        .send()
        .await?;
    let body = response.text().await?;
    parse_reply::<ChatReply>(&body).map(|reply| reply.answer)
}

pub async fn download_summary(config: &ApiConfig, result: &AnalysisResult) -> Result<Vec<u8>, ApiError> {
    fetch_file(config, Endpoint::Download, result).await
}

pub async fn convert_to_text(config: &ApiConfig, session_id: &str) -> Result<Vec<u8>, ApiError> {
    fetch_file(config, Endpoint::ConvertToText, &ConvertRequest { session_id }).await
}

async fn fetch_file<B: Serialize + ?Sized>(
    config: &ApiConfig,
    endpoint: Endpoint,
    body: &B,
) -> Result<Vec<u8>, ApiError> {
    let response = Client::new()
        .post(config.url(endpoint))
        .json(body)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Transport(format!(
            "{} answered with status {status}",
            endpoint.path()
        )));
    }
    Ok(response.bytes().await?.to_vec())
}
