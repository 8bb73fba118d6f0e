use serde::Deserialize;

use crate::actions::{Action, ActionRequest, Method};
use crate::builder::RequestBuilder;

#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteAction;

impl Action for DeleteAction {
    const NAME: &'static str = "indices:data/write/delete";

    type Request = DeleteRequest;
    type Response = DeleteResponse;
}

pub type DeleteRequestBuilder<'a, C> = RequestBuilder<'a, C, DeleteAction>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeleteRequest {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub routing: Option<String>,
    pub refresh: bool,
}

impl DeleteRequest {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>, id: impl Into<String>) -> Self {
        DeleteRequest {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ActionRequest for DeleteRequest {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path_segments(&self) -> Vec<String> {
        vec![self.index.clone(), self.doc_type.clone(), self.id.clone()]
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
}

impl<'a, C: ?Sized> RequestBuilder<'a, C, DeleteAction> {
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
pub struct DeleteResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: Option<u64>,
    pub found: bool,
}
