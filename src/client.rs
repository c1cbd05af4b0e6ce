//! The client facade: argument validation, path resolution, dispatch.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::routing::{collection_endpoint, require_collection, require_key};
use crate::transport::Transport;
use crate::types::{PrimaryKey, QueryParams, ResponseEnvelope, Revision};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Client for collection-scoped operations against the remote API.
///
/// Holds only a transport handle; no state is kept between calls, so a
/// clone can be shared freely across tasks.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client backed by the production HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(config)))
    }

    /// Creates a client over an injected transport. This is the seam for
    /// substituting a test double.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists records of a collection.
    pub async fn items(
        &self,
        collection: &str,
        params: Option<QueryParams>,
    ) -> ClientResult<Vec<Value>> {
        require_collection(collection)?;
        let path = collection_endpoint(collection);
        let body = self.transport.get(&path, params.as_ref()).await?;
        unwrap_data(body)
    }

    /// Retrieves one record by primary key.
    pub async fn item(
        &self,
        collection: &str,
        primary_key: impl Into<PrimaryKey>,
        params: Option<QueryParams>,
    ) -> ClientResult<Value> {
        require_collection(collection)?;
        let key = primary_key.into();
        require_key(&key, "primary key")?;

        let path = format!("{}/{}", collection_endpoint(collection), key);
        let body = self.transport.get(&path, params.as_ref()).await?;
        unwrap_data(body)
    }

    /// Creates a record.
    pub async fn create_item(&self, collection: &str, item: Value) -> ClientResult<Value> {
        require_collection(collection)?;
        require_mapping(&item)?;

        let path = collection_endpoint(collection);
        let body = self.transport.post(&path, Some(&item)).await?;
        unwrap_data(body)
    }

    /// Partially updates a record.
    pub async fn update_item(
        &self,
        collection: &str,
        primary_key: impl Into<PrimaryKey>,
        item: Value,
    ) -> ClientResult<Value> {
        require_collection(collection)?;
        let key = primary_key.into();
        require_key(&key, "primary key")?;
        require_mapping(&item)?;

        let path = format!("{}/{}", collection_endpoint(collection), key);
        let body = self.transport.patch(&path, Some(&item)).await?;
        unwrap_data(body)
    }

    /// Deletes a record.
    pub async fn delete_item(
        &self,
        collection: &str,
        primary_key: impl Into<PrimaryKey>,
    ) -> ClientResult<()> {
        require_collection(collection)?;
        let key = primary_key.into();
        require_key(&key, "primary key")?;

        let path = format!("{}/{}", collection_endpoint(collection), key);
        self.transport.delete(&path, None).await?;
        Ok(())
    }

    /// Retrieves the revision history of one record.
    pub async fn item_revisions(
        &self,
        collection: &str,
        primary_key: impl Into<PrimaryKey>,
        params: Option<QueryParams>,
    ) -> ClientResult<Vec<Revision>> {
        require_collection(collection)?;
        let key = primary_key.into();
        require_key(&key, "primary key")?;

        let path = format!("{}/{}/revisions", collection_endpoint(collection), key);
        let body = self.transport.get(&path, params.as_ref()).await?;
        unwrap_data(body)
    }

    /// Rolls a record back to the state captured by a revision.
    ///
    /// Issues a PATCH with no body; the remote answers with the reverted
    /// record.
    pub async fn revert(
        &self,
        collection: &str,
        primary_key: impl Into<PrimaryKey>,
        revision_id: impl Into<PrimaryKey>,
    ) -> ClientResult<Value> {
        require_collection(collection)?;
        let key = primary_key.into();
        require_key(&key, "primary key")?;
        let revision = revision_id.into();
        require_key(&revision, "revision id")?;

        let path = format!(
            "{}/{}/revert/{}",
            collection_endpoint(collection),
            key,
            revision
        );
        let body = self.transport.patch(&path, None).await?;
        unwrap_data(body)
    }
}

fn unwrap_data<T: DeserializeOwned>(body: Value) -> ClientResult<T> {
    let envelope: ResponseEnvelope<T> = serde_json::from_value(body)?;
    Ok(envelope.data)
}

fn require_mapping(item: &Value) -> ClientResult<()> {
    if !item.is_object() {
        return Err(ClientError::validation(
            "item payload must be a plain key-value mapping",
        ));
    }
    Ok(())
}
