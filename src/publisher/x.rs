use async_trait::async_trait;

use crate::app::Result;
use crate::clients::XClient;
use crate::publisher::Publisher;

pub struct XPublisher {
    client: XClient,
}

impl XPublisher {
    pub fn new(client: XClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for XPublisher {
    fn name(&self) -> &str {
        "x"
    }

    fn is_live(&self) -> bool {
        true
    }

    async fn publish(&self, text: &str) -> Result<Option<String>> {
        let id = self.client.create_post(text).await?;
        tracing::info!(post_id = id.as_deref().unwrap_or("-"), "Posted: {}", text);
        Ok(id)
    }
}
