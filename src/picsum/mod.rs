mod client;

pub use client::PicsumClient;
