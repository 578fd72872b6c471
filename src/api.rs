use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Serialize, Debug)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct AskResponse {
    pub answer: String,
}

/// Any failure to get an answer out of `/api/ask`. The variants only feed
/// the console log; the user always sees the same message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AskError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("malformed answer body: {0}")]
    Decode(String),
}

pub fn decode_answer(body: &str) -> Result<String, AskError> {
    serde_json::from_str::<AskResponse>(body)
        .map(|response| response.answer)
        .map_err(|e| AskError::Decode(e.to_string()))
}

/// Sends one question to the backend and waits for its answer. No timeout is
/// applied beyond whatever the browser enforces.
pub async fn ask(question: String) -> Result<String, AskError> {
    let url = format!("{}/api/ask", config::get_backend_url());
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&AskRequest { question: &question })
        .map_err(|e| AskError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AskError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;
    decode_answer(&body)
}
