//! Observational listeners for resolution sessions.
//!
//! The engine driving a session reports transfer and repository activity
//! through these traits. Listeners observe; they cannot veto or alter what
//! the engine does.

/// Progress of one artifact or metadata transfer.
#[derive(Debug, Clone)]
pub struct TransferEvent {
    /// Resource being transferred, relative to its repository URL.
    pub resource: String,
    /// Identifier of the repository the transfer talks to.
    pub repository_id: String,
    /// Bytes transferred so far.
    pub transferred_bytes: u64,
    /// Total size when the remote side reported one.
    pub total_bytes: Option<u64>,
}

/// Something that happened to a repository item.
#[derive(Debug, Clone)]
pub struct RepositoryEvent {
    /// Identifier of the repository involved.
    pub repository_id: String,
    /// The artifact or metadata item the event concerns.
    pub item: String,
}

/// Observes artifact and metadata transfers.
pub trait TransferListener: Send + Sync {
    /// A transfer is about to start.
    fn initiated(&self, event: &TransferEvent) {
        let _ = event;
    }

    /// More bytes arrived.
    fn progressed(&self, event: &TransferEvent) {
        let _ = event;
    }

    /// The transfer completed.
    fn succeeded(&self, event: &TransferEvent) {
        let _ = event;
    }

    /// The transferred data failed checksum validation.
    fn corrupted(&self, event: &TransferEvent) {
        let _ = event;
    }

    /// The transfer failed.
    fn failed(&self, event: &TransferEvent) {
        let _ = event;
    }
}

/// Observes repository-level activity such as artifact installation and
/// resolution.
pub trait RepositoryListener: Send + Sync {
    /// An item is about to be resolved from a repository.
    fn resolving(&self, event: &RepositoryEvent) {
        let _ = event;
    }

    /// An item was resolved from a repository.
    fn resolved(&self, event: &RepositoryEvent) {
        let _ = event;
    }

    /// An item was installed into the local cache.
    fn installed(&self, event: &RepositoryEvent) {
        let _ = event;
    }

    /// An item could not be found or read.
    fn invalid(&self, event: &RepositoryEvent) {
        let _ = event;
    }
}

/// Transfer listener that logs every event at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransferListener;

impl TransferListener for TracingTransferListener {
    fn initiated(&self, event: &TransferEvent) {
        tracing::debug!(
            target: "mortar::session",
            resource = %event.resource,
            repository = %event.repository_id,
            "Transfer initiated"
        );
    }

    fn progressed(&self, event: &TransferEvent) {
        tracing::debug!(
            target: "mortar::session",
            resource = %event.resource,
            transferred = event.transferred_bytes,
            total = ?event.total_bytes,
            "Transfer progressed"
        );
    }

    fn succeeded(&self, event: &TransferEvent) {
        tracing::debug!(
            target: "mortar::session",
            resource = %event.resource,
            transferred = event.transferred_bytes,
            "Transfer succeeded"
        );
    }

    fn corrupted(&self, event: &TransferEvent) {
        tracing::debug!(
            target: "mortar::session",
            resource = %event.resource,
            "Transfer data failed validation"
        );
    }

    fn failed(&self, event: &TransferEvent) {
        tracing::debug!(
            target: "mortar::session",
            resource = %event.resource,
            repository = %event.repository_id,
            "Transfer failed"
        );
    }
}

/// Repository listener that logs every event at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRepositoryListener;

impl RepositoryListener for TracingRepositoryListener {
    fn resolving(&self, event: &RepositoryEvent) {
        tracing::debug!(
            target: "mortar::session",
            repository = %event.repository_id,
            item = %event.item,
            "Resolving"
        );
    }

    fn resolved(&self, event: &RepositoryEvent) {
        tracing::debug!(
            target: "mortar::session",
            repository = %event.repository_id,
            item = %event.item,
            "Resolved"
        );
    }

    fn installed(&self, event: &RepositoryEvent) {
        tracing::debug!(
            target: "mortar::session",
            repository = %event.repository_id,
            item = %event.item,
            "Installed"
        );
    }

    fn invalid(&self, event: &RepositoryEvent) {
        tracing::debug!(
            target: "mortar::session",
            repository = %event.repository_id,
            item = %event.item,
            "Invalid item"
        );
    }
}
