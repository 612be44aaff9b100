//! In-memory items backend for tests and local development.
//!
//! Serves the five CRUD routes the front end consumes, with the same error
//! body shape the real backend uses: failures answer with a JSON object
//! whose `message` field describes the problem, which is exactly what the
//! client's error extraction reads first.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub description: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.values().cloned().collect())
}

async fn create_item(State(db): State<Db>, Json(input): Json<CreateItem>) -> Response {
    if input.name.trim().is_empty() {
        return error_body(StatusCode::UNPROCESSABLE_ENTITY, "item name cannot be empty");
    }
    let item = Item {
        id: Uuid::new_v4(),
        name: input.name,
        description: input.description,
    };
    db.write().await.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn get_item(State(db): State<Db>, Path(id): Path<Uuid>) -> Response {
    let items = db.read().await;
    match items.get(&id) {
        Some(item) => Json(item.clone()).into_response(),
        None => error_body(StatusCode::NOT_FOUND, "item not found"),
    }
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItem>,
) -> Response {
    let mut items = db.write().await;
    match items.get_mut(&id) {
        Some(item) => {
            item.name = input.name;
            item.description = input.description;
            Json(item.clone()).into_response()
        }
        None => error_body(StatusCode::NOT_FOUND, "item not found"),
    }
}

async fn delete_item(State(db): State<Db>, Path(id): Path<Uuid>) -> Response {
    let mut items = db.write().await;
    match items.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error_body(StatusCode::NOT_FOUND, "item not found"),
    }
}
