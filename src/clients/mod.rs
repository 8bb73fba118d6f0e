mod client;
mod disconnected;

pub use client::Client;
pub use disconnected::DisconnectedClient;
