use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::actions::{Action, ActionRequest, Method};
use crate::builder::RequestBuilder;

#[derive(Debug, Default, Clone, Copy)]
pub struct SearchAction;

impl Action for SearchAction {
    const NAME: &'static str = "indices:data/read/search";

    type Request = SearchRequest;
    type Response = SearchResponse;
}

pub type SearchRequestBuilder<'a, C> = RequestBuilder<'a, C, SearchAction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A search over zero or more indices. No indices means all of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchRequest {
    pub indices: Vec<String>,
    pub types: Vec<String>,
    pub query: Option<Value>,
    pub post_filter: Option<Value>,
    pub from: Option<usize>,
    pub size: Option<usize>,
    pub sort: Vec<(String, SortOrder)>,
    pub source_includes: Vec<String>,
    pub aggregations: BTreeMap<String, Value>,
    pub timeout: Option<Duration>,
    pub routing: Option<String>,
    pub preference: Option<String>,
}

impl SearchRequest {
    pub fn new<I, S>(indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchRequest {
            indices: indices.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

// The cluster takes a single whole number per unit, so use the largest exact one.
fn time_value(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos % 1_000_000_000 == 0 {
        format!("{}s", duration.as_secs())
    } else if nanos % 1_000_000 == 0 {
        format!("{}ms", duration.as_millis())
    } else if nanos % 1_000 == 0 {
        format!("{}micros", duration.as_micros())
    } else {
        format!("{nanos}nanos")
    }
}

impl ActionRequest for SearchRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path_segments(&self) -> Vec<String> {
        let mut segments = Vec::with_capacity(3);
        if !self.indices.is_empty() {
            segments.push(self.indices.join(","));
            if !self.types.is_empty() {
                segments.push(self.types.join(","));
            }
        }
        segments.push("_search".to_string());
        segments
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(routing) = &self.routing {
            params.push(("routing", routing.clone()));
        }
        if let Some(preference) = &self.preference {
            params.push(("preference", preference.clone()));
        }
        params
    }

    fn body(&self) -> Option<Value> {
        let mut body = Map::new();
        if let Some(from) = self.from {
            body.insert("from".into(), json!(from));
        }
        if let Some(size) = self.size {
            body.insert("size".into(), json!(size));
        }
        if let Some(timeout) = self.timeout {
            body.insert("timeout".into(), json!(time_value(timeout)));
        }
        if let Some(query) = &self.query {
            body.insert("query".into(), query.clone());
        }
        if let Some(filter) = &self.post_filter {
            body.insert("post_filter".into(), filter.clone());
        }
        if !self.sort.is_empty() {
            let sort = self
                .sort
                .iter()
                .map(|(field, order)| json!({ field: { "order": order } }))
                .collect();
            body.insert("sort".into(), Value::Array(sort));
        }
        if !self.source_includes.is_empty() {
            body.insert("_source".into(), json!(self.source_includes));
        }
        if !self.aggregations.is_empty() {
            body.insert("aggs".into(), json!(self.aggregations));
        }
        Some(Value::Object(body))
    }
}

impl<'a, C: ?Sized> RequestBuilder<'a, C, SearchAction> {
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.request.query = Some(query);
        self
    }

    pub fn with_post_filter(mut self, filter: Value) -> Self {
        self.request.post_filter = Some(filter);
        self
    }

    pub fn with_from(mut self, from: usize) -> Self {
        self.request.from = Some(from);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.request.size = Some(size);
        self
    }

    /// Adds a sort clause; clauses apply in the order they were added.
    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.request.sort.push((field.into(), order));
        self
    }

    pub fn with_source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.source_includes = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_aggregation(mut self, name: impl Into<String>, aggregation: Value) -> Self {
        self.request.aggregations.insert(name.into(), aggregation);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.request.routing = Some(routing.into());
        self
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.request.preference = Some(preference.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    pub hits: SearchHits,
    #[serde(default)]
    pub aggregations: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits {
    pub total: u64,
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_empty_search_body() {
        let request = SearchRequest::new(Vec::<String>::new());
        assert_eq!(request.body(), Some(json!({})));
        assert_eq!(request.path(), "/_search");
        assert_eq!(request.method(), Method::Post);
    }

    #[test]
    fn test_search_body_contains_only_set_fields() {
        let mut request = SearchRequest::new(["logs"]);
        request.query = Some(json!({ "term": { "level": "error" } }));
        request.size = Some(10);
        request.sort = vec![
            ("@timestamp".to_string(), SortOrder::Desc),
            ("_score".to_string(), SortOrder::Asc),
        ];
        request.timeout = Some(Duration::from_millis(1500));

        assert_eq!(
            request.body(),
            Some(json!({
                "size": 10,
                "timeout": "1500ms",
                "query": { "term": { "level": "error" } },
                "sort": [
                    { "@timestamp": { "order": "desc" } },
                    { "_score": { "order": "asc" } }
                ]
            }))
        );
    }

    #[test]
    fn test_search_endpoint() {
        let mut request = SearchRequest::new(["logs-1", "logs-2"]);
        request.types = vec!["event".to_string()];
        request.routing = Some("user1".to_string());
        request.preference = Some("_local".to_string());

        let base = Url::parse("http://localhost:9200").unwrap();
        let url = request.endpoint(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9200/logs-1,logs-2/event/_search?routing=user1&preference=_local"
        );
    }

    #[test]
    fn test_types_ignored_without_indices() {
        let mut request = SearchRequest::default();
        request.types = vec!["event".to_string()];
        assert_eq!(request.path(), "/_search");
    }

    #[test]
    fn test_sub_millisecond_timeout_is_not_truncated() {
        let mut request = SearchRequest::default();
        request.timeout = Some(Duration::from_micros(500));
        assert_eq!(request.body(), Some(json!({ "timeout": "500micros" })));
    }

    #[test]
    fn test_time_value() {
        assert_eq!(time_value(Duration::from_secs(5)), "5s");
        assert_eq!(time_value(Duration::from_millis(250)), "250ms");
        assert_eq!(time_value(Duration::from_millis(1500)), "1500ms");
        assert_eq!(time_value(Duration::from_micros(500)), "500micros");
        assert_eq!(time_value(Duration::from_micros(1500)), "1500micros");
        assert_eq!(time_value(Duration::from_nanos(2_000_001)), "2000001nanos");
        assert_eq!(time_value(Duration::ZERO), "0s");
    }

    #[test]
    fn test_search_response_deserialization() {
        let raw = r#"{
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": 1,
                "max_score": 1.0,
                "hits": [
                    { "_index": "logs", "_type": "event", "_id": "1", "_score": 1.0, "_source": { "level": "error" } }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.took, 3);
        assert_eq!(response.hits.total, 1);
        assert_eq!(response.hits.hits[0].id, "1");
        assert_eq!(response.hits.hits[0].source, Some(json!({ "level": "error" })));
        assert!(response.aggregations.is_none());
    }
}
