pub mod clients;
pub mod config;
pub mod crossref;
pub mod error;
pub mod extract;
pub mod framework;
pub mod links;
pub mod prompts;
pub mod schemas;
pub mod search;
pub mod server;
pub mod store;
pub mod tools;

pub use config::Config;
pub use error::{RegulatoryError, Result};
pub use framework::Framework;
pub use server::RegulatoryServer;
pub use store::{DocumentStore, LoadReport};

// Load .env from the working directory if present; a missing file is fine.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
