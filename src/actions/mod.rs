mod action;
mod delete;
mod get;
mod index;
mod search;

pub use action::{Action, ActionRequest, Method};
pub use delete::{DeleteAction, DeleteRequest, DeleteRequestBuilder, DeleteResponse};
pub use get::{GetAction, GetRequest, GetRequestBuilder, GetResponse};
pub use index::{IndexAction, IndexRequest, IndexRequestBuilder, IndexResponse};
pub use search::{
    SearchAction, SearchHit, SearchHits, SearchRequest, SearchRequestBuilder, SearchResponse,
    SortOrder,
};
