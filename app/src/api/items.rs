use super::{ApiClient, ApiConfig, ApiResult};
use serde::Serialize;
use serde_json::Value;

/// Request payload for creating an item.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for replacing an existing item.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The five canonical operations on the `items` resource.
///
/// Each call returns the backend payload exactly as the client parsed it;
/// no mapping, no validation. Errors pass through from [`ApiClient`]
/// untouched.
pub struct ItemsApi {
    client: ApiClient,
}

impl ItemsApi {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: ApiClient::with_config(config),
        }
    }

    pub async fn create<B: Serialize>(&self, item: &B) -> ApiResult<Value> {
        self.client.post("/items", item).await
    }

    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/items").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/items/{}", id)).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, item: &B) -> ApiResult<Value> {
        self.client.put(&format!("/items/{}", id), item).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/items/{}", id)).await
    }
}

impl Default for ItemsApi {
    fn default() -> Self {
        Self::new()
    }
}
