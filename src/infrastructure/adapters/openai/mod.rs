mod client;
mod types;

pub use client::{OpenAiClient, OpenAiClientConfig};
