mod safe_mode;
mod x;

pub use safe_mode::SafeModePublisher;
pub use x::XPublisher;

use async_trait::async_trait;

use crate::app::Result;

/// Where formatted messages go.
#[async_trait]
pub trait Publisher {
    fn name(&self) -> &str;

    /// Whether messages actually leave the process.
    fn is_live(&self) -> bool;

    /// Publish a message. Returns an identifier for the post when known.
    async fn publish(&self, text: &str) -> Result<Option<String>>;
}
