use serde::Deserialize;
use serde_json::Value;

use crate::actions::{Action, ActionRequest, Method};
use crate::builder::RequestBuilder;

#[derive(Debug, Default, Clone, Copy)]
pub struct GetAction;

impl Action for GetAction {
    const NAME: &'static str = "indices:data/read/get";

    type Request = GetRequest;
    type Response = GetResponse;
}

pub type GetRequestBuilder<'a, C> = RequestBuilder<'a, C, GetAction>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GetRequest {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub routing: Option<String>,
    pub fields: Vec<String>,
    pub realtime: Option<bool>,
}

impl GetRequest {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>, id: impl Into<String>) -> Self {
        GetRequest {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ActionRequest for GetRequest {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path_segments(&self) -> Vec<String> {
        vec![self.index.clone(), self.doc_type.clone(), self.id.clone()]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(routing) = &self.routing {
            params.push(("routing", routing.clone()));
        }
        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        if let Some(realtime) = self.realtime {
            params.push(("realtime", realtime.to_string()));
        }
        params
    }
}

impl<'a, C: ?Sized> RequestBuilder<'a, C, GetAction> {
    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.request.routing = Some(routing.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.request.realtime = Some(realtime);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: Option<u64>,
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<Value>,
}
