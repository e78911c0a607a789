use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::transaction::CreatedResponse, routes::build_router,
    stores::memory::InMemoryTransactionStore,
};

/// A server running the full router over an empty in-memory store.
pub(crate) fn test_server() -> TestServer {
    let app = build_router(Arc::new(InMemoryTransactionStore::new()));

    TestServer::new(app)
}

/// Add a transaction through the API and return its id.
pub(crate) async fn add_transaction(server: &TestServer, body: Value) -> Uuid {
    let response = server.post("/add-transactions").json(&body).await;

    response.assert_status_ok();
    response.json::<CreatedResponse>().inserted_id
}
