#![allow(dead_code)]

use async_trait::async_trait;
use library_client::{ApiRequest, ClientConfig, ClientError, LibraryClient, Result, Transport};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory transport that answers from canned routes and records every request.
#[derive(Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<(Method, String), Value>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), body);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested(&self) -> Vec<(Method, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.url.path().to_string()))
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());

        let key = (request.method.clone(), request.url.path().to_string());
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or(ClientError::UnexpectedStatus {
                status: StatusCode::NOT_FOUND,
                url: request.url,
            })
    }
}

pub fn client(transport: Arc<RecordingTransport>) -> LibraryClient {
    let config = ClientConfig::new("http://library.test".parse().unwrap(), "/api");
    LibraryClient::with_transport(&config, transport).unwrap()
}

pub fn book_json(book_id: i64, title: &str) -> Value {
    json!({
        "bookId": book_id,
        "title": title,
        "author": "Unknown",
        "isbn": "978-0-00-000000-0"
    })
}

pub fn inventory_json(entries: &[(i64, i64)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(book_id, total)| {
                json!({
                    "libraryId": 1,
                    "book": book_json(*book_id, "Inventory book"),
                    "totalPurchasedByLibrary": total
                })
            })
            .collect(),
    )
}

pub fn signed_out_json(library_id: i64, book_id: i64, member_id: i64, returned: bool) -> Value {
    let when_returned = returned.then_some("2024-03-08T10:00:00Z");

    json!({
        "signedOutId": 100,
        "bookId": book_id,
        "libraryId": library_id,
        "memberId": member_id,
        "whenSignedOut": "2024-03-01T10:00:00Z",
        "whenReturned": when_returned
    })
}
