//! Server module containing the RegulatoryServer implementation

use crate::clients::{AnswerClient, create_answer_client};
use crate::config::Config;
use crate::store::{DocumentStore, LoadReport, load_documents};
use std::path::Path;
use std::sync::Arc;

// Submodules
pub mod router;

/// Main regulatory MCP server implementation.
///
/// Holds the immutable document store, the answering client, and the loaded
/// configuration; every tool handler borrows from here. Cloning is cheap
/// (all fields are `Arc`s) and no field is mutated after construction.
#[derive(Clone)]
pub struct RegulatoryServer {
    pub store: Arc<DocumentStore>,
    pub answerer: Arc<dyn AnswerClient>,
    pub config: Arc<Config>,
}

impl RegulatoryServer {
    /// Load the document tree named by the configuration and pick an
    /// answering client. Load problems are warnings carried in the report,
    /// not errors; only client configuration can fail here (strict mode).
    pub fn new(config: Config) -> anyhow::Result<(Self, LoadReport)> {
        let (store, report) = load_documents(Path::new(&config.system.documents_path));
        let answerer = create_answer_client(&config)?;
        Ok((
            Self {
                store: Arc::new(store),
                answerer,
                config: Arc::new(config),
            },
            report,
        ))
    }

    /// Assemble a server from prebuilt parts. Used by tests and the admin
    /// CLI, which construct the store and client themselves.
    pub fn with_parts(
        store: Arc<DocumentStore>,
        answerer: Arc<dyn AnswerClient>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            store,
            answerer,
            config,
        }
    }
}
