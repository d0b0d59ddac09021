pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::{create_http_client, create_http_client_with_timeout};
// Re-export schedule resolution
pub use date_logic::{resolve_schedule, resolve_schedule_for_date, today_in_japan};
pub use fetch_utils::fetch_page;
// Re-export core API functions
pub use self::core::*;
