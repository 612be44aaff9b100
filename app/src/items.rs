use serde::Serialize;
use serde_json::Value;

use crate::api::items::ItemsApi;

/// Shown when a create fails without a usable message of its own.
const CREATE_FAILURE_MESSAGE: &str = "Failed to create item";

/// Creation state for the items front end.
///
/// Tracks one create operation: `is_creating` while the request is in
/// flight, then either `created` (the backend payload) or `create_error`
/// (a display-ready message). Each instance owns its own copy of the
/// state.
#[derive(Default)]
pub struct CreateItemState {
    api: ItemsApi,
    pub is_creating: bool,
    pub create_error: Option<String>,
    pub created: Option<Value>,
}

impl CreateItemState {
    pub fn new(api: ItemsApi) -> Self {
        Self {
            api,
            is_creating: false,
            create_error: None,
            created: None,
        }
    }

    /// Run one create through the items API.
    ///
    /// Failures never surface as `Err`: the message lands in
    /// `create_error` and the call returns `None`. `is_creating` is
    /// cleared on both outcomes.
    pub async fn create<B: Serialize>(&mut self, item: &B) -> Option<Value> {
        self.start_creating();
        match self.api.create(item).await {
            Ok(created) => {
                self.set_created(created.clone());
                Some(created)
            }
            Err(error) => {
                let message = if error.message.is_empty() {
                    CREATE_FAILURE_MESSAGE.to_string()
                } else {
                    error.message
                };
                self.set_error(message);
                None
            }
        }
    }

    /// Restore the initial idle state without making a call.
    pub fn reset(&mut self) {
        self.is_creating = false;
        self.create_error = None;
        self.created = None;
    }

    fn start_creating(&mut self) {
        self.is_creating = true;
        self.create_error = None;
        self.created = None;
    }

    fn set_created(&mut self, created: Value) {
        self.created = Some(created);
        self.is_creating = false;
    }

    fn set_error(&mut self, error: String) {
        self.create_error = Some(error);
        self.is_creating = false;
    }
}
