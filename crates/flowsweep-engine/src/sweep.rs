//! One-shot scan-and-terminate pass over the engine's process instances.

use tracing::{debug, info, warn};

use crate::connection::EngineConnection;
use crate::models::ProcessInstance;
use crate::EngineError;

/// Outcome of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of instances returned by the listing.
    pub total: usize,
    /// Ids whose termination failed, in sweep order.
    pub failed: Vec<String>,
}

impl SweepReport {
    /// True when every listed instance was terminated.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of instances terminated successfully.
    pub fn terminated(&self) -> usize {
        self.total - self.failed.len()
    }
}

/// Drives the list-then-terminate cleanup loop.
pub struct SweepDriver {
    connection: EngineConnection,
}

impl SweepDriver {
    /// Wrap an engine connection.
    pub fn new(connection: EngineConnection) -> Self {
        Self { connection }
    }

    /// Fetch the current process instances, in server order.
    pub async fn list_process_instances(&self) -> Result<Vec<ProcessInstance>, EngineError> {
        let raw = self.connection.get_raw("/process-instance").await?;
        serde_json::from_slice(&raw).map_err(|e| EngineError::Decode(e.to_string()))
    }

    /// Ask the engine to forcibly end one instance.
    ///
    /// The response body is discarded; the engine answers with an empty
    /// body on success.
    pub async fn terminate_process(&self, id: &str) -> Result<(), EngineError> {
        self.connection
            .delete_raw(&format!("/process-instance/{id}"))
            .await?;
        Ok(())
    }

    /// List every instance and terminate each in turn.
    ///
    /// A listing failure aborts the run before any termination is issued.
    /// An individual termination failure is recorded and the sweep
    /// continues with the remaining instances.
    pub async fn run(&self) -> Result<SweepReport, EngineError> {
        let instances = self.list_process_instances().await?;
        info!(count = instances.len(), "fetched process instance list");

        let mut failed = Vec::new();
        for instance in &instances {
            match self.terminate_process(&instance.id).await {
                Ok(()) => debug!(id = %instance.id, "terminated"),
                Err(e) => {
                    warn!(id = %instance.id, "termination failed: {e}");
                    failed.push(instance.id.clone());
                }
            }
        }

        Ok(SweepReport {
            total: instances.len(),
            failed,
        })
    }
}
