use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

// Same set `url` escapes in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// An operation kind a client can dispatch, tying a request type to the
/// response type a connected client would deliver.
pub trait Action: Default + Send {
    const NAME: &'static str;

    type Request: ActionRequest;
    type Response: DeserializeOwned + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// The parts of a request an HTTP transport needs to send it.
pub trait ActionRequest: Send {
    fn method(&self) -> Method;

    fn path_segments(&self) -> Vec<String>;

    fn query_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> Option<Value> {
        None
    }

    /// Percent-encoded request path, ready to send as is.
    fn path(&self) -> String {
        self.path_segments()
            .iter()
            .map(|segment| format!("/{}", utf8_percent_encode(segment, PATH_SEGMENT)))
            .collect()
    }

    /// Appends [`ActionRequest::path`] and the query parameters to `base`,
    /// keeping any path prefix `base` already carries.
    fn endpoint(&self, base: &Url) -> Result<Url, ClientError> {
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        let mut url = base.clone();
        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", self.path()));

        let params = self.query_params();
        url.set_query(None);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl ActionRequest for Ping {
        fn method(&self) -> Method {
            Method::Get
        }

        fn path_segments(&self) -> Vec<String> {
            vec!["_cluster".to_string(), "health".to_string()]
        }
    }

    #[test]
    fn test_default_path_and_body() {
        assert_eq!(Ping.path(), "/_cluster/health");
        assert_eq!(Ping.body(), None);
        assert_eq!(Ping.method().to_string(), "GET");
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let base = Url::parse("http://localhost:9200/es/").unwrap();
        let url = Ping.endpoint(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9200/es/_cluster/health");

        let bare = Url::parse("http://localhost:9200").unwrap();
        let url = Ping.endpoint(&bare).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9200/_cluster/health");
    }

    struct Lookup(&'static str);

    impl ActionRequest for Lookup {
        fn method(&self) -> Method {
            Method::Get
        }

        fn path_segments(&self) -> Vec<String> {
            vec!["users".to_string(), self.0.to_string()]
        }
    }

    #[test]
    fn test_path_matches_endpoint_encoding() {
        let base = Url::parse("http://localhost:9200").unwrap();
        for id in ["a b", "a/b", "50%", "q?x#y", "ok,too"] {
            let request = Lookup(id);
            let url = request.endpoint(&base).unwrap();
            assert_eq!(url.path(), request.path(), "id {id:?}");
        }
        assert_eq!(Lookup("a b").path(), "/users/a%20b");
        assert_eq!(Lookup("a/b").path(), "/users/a%2Fb");
    }

    #[test]
    fn test_endpoint_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:search@example.com").unwrap();
        assert!(matches!(
            Ping.endpoint(&base),
            Err(ClientError::Endpoint(_))
        ));
    }
}
