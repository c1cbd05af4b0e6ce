//! Collection-to-endpoint resolution and argument validation.
//!
//! Every collection-scoped method funnels through these helpers before
//! touching the transport, so validation failures never cause partial
//! network side effects.

use crate::error::{ClientError, ClientResult};
use crate::types::PrimaryKey;

/// Reserved prefix marking system collections.
pub const SYSTEM_COLLECTION_PREFIX: &str = "directus_";

/// Resolves the base resource path for item-scoped operations.
///
/// System collections live under their own namespace: the reserved prefix
/// is stripped and the remainder used verbatim as the path segment
/// (`directus_users` → `/users`). Everything else is addressed through
/// `/items/<collection>`. The match is a literal prefix check; no
/// case-folding or pluralization.
pub fn collection_endpoint(collection: &str) -> String {
    match collection.strip_prefix(SYSTEM_COLLECTION_PREFIX) {
        Some(resource) => format!("/{resource}"),
        None => format!("/items/{collection}"),
    }
}

/// Rejects an absent collection name.
pub(crate) fn require_collection(collection: &str) -> ClientResult<()> {
    if collection.is_empty() {
        return Err(ClientError::validation("collection is required"));
    }
    Ok(())
}

/// Rejects an absent key. `what` names the argument in the error
/// ("primary key", "revision id").
pub(crate) fn require_key(key: &PrimaryKey, what: &str) -> ClientResult<()> {
    if key.is_empty() {
        return Err(ClientError::validation(format!("{what} is required")));
    }
    Ok(())
}
