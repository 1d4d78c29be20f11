pub mod client;

pub use client::{PracticumApiClient, StatusSource};
