use serde::Deserialize;
use serde_json::{Map, Value};

use crate::actions::{Action, ActionRequest, Method};
use crate::builder::RequestBuilder;

#[derive(Debug, Default, Clone, Copy)]
pub struct IndexAction;

impl Action for IndexAction {
    const NAME: &'static str = "indices:data/write/index";

    type Request = IndexRequest;
    type Response = IndexResponse;
}

pub type IndexRequestBuilder<'a, C> = RequestBuilder<'a, C, IndexAction>;

/// Stores a document. Without an id the cluster assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    pub index: String,
    pub doc_type: String,
    pub id: Option<String>,
    pub source: Value,
    pub routing: Option<String>,
    pub refresh: bool,
}

impl IndexRequest {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>) -> Self {
        IndexRequest {
            index: index.into(),
            doc_type: doc_type.into(),
            id: None,
            source: Value::Object(Map::new()),
            routing: None,
            refresh: false,
        }
    }
}

impl ActionRequest for IndexRequest {
    fn method(&self) -> Method {
        match self.id {
            Some(_) => Method::Put,
            None => Method::Post,
        }
    }

    fn path_segments(&self) -> Vec<String> {
        let mut segments = vec![self.index.clone(), self.doc_type.clone()];
        segments.extend(self.id.clone());
        segments
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(routing) = &self.routing {
            params.push(("routing", routing.clone()));
        }
        if self.refresh {
            params.push(("refresh", "true".to_string()));
        }
        params
    }

    fn body(&self) -> Option<Value> {
        Some(self.source.clone())
    }
}

impl<'a, C: ?Sized> RequestBuilder<'a, C, IndexAction> {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.request.id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: Value) -> Self {
        self.request.source = source;
        self
    }

    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.request.routing = Some(routing.into());
        self
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.request.refresh = refresh;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: u64,
    #[serde(default)]
    pub created: bool,
}
