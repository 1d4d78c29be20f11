pub mod client;
pub mod notifier;
pub mod types;

pub use client::{ChatDelivery, TelegramClient};
pub use notifier::Notifier;
pub use types::*;
