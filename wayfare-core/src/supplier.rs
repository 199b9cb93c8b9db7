use async_trait::async_trait;
use serde_json::Value;

/// Why a single upstream attempt did not produce a usable body
#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("304 response with empty body")]
    EmptyNotModified,
    #[error("Malformed upstream body: {0}")]
    Decode(String),
}

/// One way of answering a query, e.g. a single upstream endpoint variant.
///
/// Strategies are tried in order by the gateway; any `Err` moves on to the next.
#[async_trait]
pub trait UpstreamStrategy<Q>: Send + Sync
where
    Q: Sync + ?Sized,
{
    /// Stable label used in logs and in the source header
    fn name(&self) -> &str;

    async fn fetch(&self, query: &Q) -> Result<Value, SupplierError>;
}

/// Last resort that always produces a body shaped like a real upstream answer
pub trait SyntheticStrategy<Q: ?Sized>: Send + Sync {
    fn synthesize(&self, query: &Q) -> Value;
}
