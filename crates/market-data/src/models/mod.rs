//! Data models shared across providers.

mod profile;

pub use profile::{ApiStatus, QuoteProfile};
