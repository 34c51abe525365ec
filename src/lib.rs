pub mod analysis;
pub mod config;
pub mod deserializers;
pub mod error;
pub mod http;
pub mod schemas;
pub mod scraping;
pub mod search;
pub mod server;
pub mod store;
pub mod tools;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
