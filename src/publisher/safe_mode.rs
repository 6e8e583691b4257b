use async_trait::async_trait;

use crate::app::Result;
use crate::publisher::Publisher;

/// Logs what would have been posted and never touches the network.
pub struct SafeModePublisher;

#[async_trait]
impl Publisher for SafeModePublisher {
    fn name(&self) -> &str {
        "safe_mode"
    }

    fn is_live(&self) -> bool {
        false
    }

    async fn publish(&self, text: &str) -> Result<Option<String>> {
        tracing::info!(chars = text.chars().count(), "WOULD POST: {}", text);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_safe_mode_always_succeeds() {
        let publisher = SafeModePublisher;
        assert!(!publisher.is_live());
        assert_eq!(publisher.publish("hello").await.unwrap(), None);
    }
}
