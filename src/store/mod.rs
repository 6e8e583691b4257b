pub mod history;
pub mod json;

use crate::app::Result;

pub use history::History;
pub use json::JsonStore;

pub const HISTORY_FILE: &str = "tweet_history.json";
pub const TRUSTED_FILE: &str = "trusted_domains.json";
pub const BLACKLIST_FILE: &str = "blacklist.json";

/// Persistence for the bookkeeping that survives between runs.
///
/// Every `save_*` call replaces the whole document.
pub trait Store {
    // History operations
    fn load_history(&self) -> Result<History>;
    fn save_history(&self, history: &History) -> Result<()>;

    // Trusted-domain delta operations
    fn load_learned_domains(&self) -> Result<Vec<String>>;
    fn save_learned_domains(&self, domains: &[String]) -> Result<()>;

    // Blacklist operations
    fn load_blacklist(&self) -> Result<Vec<String>>;
    fn save_blacklist(&self, domains: &[String]) -> Result<()>;
}
