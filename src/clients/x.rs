use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::app::{LinkcasterError, Result};
use crate::clients::ensure_success;

const TWEETS_URL: &str = "https://api.x.com/2/tweets";

#[derive(Serialize)]
struct CreateTweet<'a> {
    text: &'a str,
}

/// X API v2 client for creating posts.
pub struct XClient {
    client: Client,
    bearer_token: String,
}

impl XClient {
    pub fn new(client: Client, bearer_token: String) -> Self {
        Self {
            client,
            bearer_token,
        }
    }

    /// Create a post. Returns the new post id when the API reports one.
    pub async fn create_post(&self, text: &str) -> Result<Option<String>> {
        let response = self
            .client
            .post(TWEETS_URL)
            .bearer_auth(&self.bearer_token)
            .json(&CreateTweet { text })
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(LinkcasterError::Api {
                status: status.as_u16(),
                message: "expected 201 Created".to_string(),
            });
        }

        let value: Value = response.json().await.unwrap_or(Value::Null);
        Ok(value
            .pointer("/data/id")
            .and_then(Value::as_str)
            .map(String::from))
    }
}
