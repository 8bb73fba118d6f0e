use crate::actions::{
    Action, DeleteAction, DeleteRequest, DeleteRequestBuilder, GetAction, GetRequest,
    GetRequestBuilder, IndexAction, IndexRequest, IndexRequestBuilder, SearchAction,
    SearchRequest, SearchRequestBuilder,
};
use crate::builder::RequestBuilder;
use crate::error::ClientError;
use crate::listeners::ActionListener;
use crate::settings::Settings;

/// The capability set of a search client.
///
/// Implementors supply dispatch and teardown; the builder factories and
/// typed shortcuts come for free on top of [`Client::execute`].
pub trait Client: Send + Sync {
    fn settings(&self) -> &Settings;

    /// Dispatches `request` and reports the outcome to `listener`.
    fn execute<A, L>(&self, action: A, request: A::Request, listener: L)
    where
        A: Action,
        L: ActionListener<A::Response>;

    fn close(&self) -> Result<(), ClientError>;

    fn prepare_search<I, S>(&self, indices: I) -> SearchRequestBuilder<'_, Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RequestBuilder::new(self, SearchRequest::new(indices))
    }

    fn prepare_get(
        &self,
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> GetRequestBuilder<'_, Self> {
        RequestBuilder::new(self, GetRequest::new(index, doc_type, id))
    }

    fn prepare_index(
        &self,
        index: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> IndexRequestBuilder<'_, Self> {
        RequestBuilder::new(self, IndexRequest::new(index, doc_type))
    }

    fn prepare_delete(
        &self,
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> DeleteRequestBuilder<'_, Self> {
        RequestBuilder::new(self, DeleteRequest::new(index, doc_type, id))
    }

    fn search<L>(&self, request: SearchRequest, listener: L)
    where
        L: ActionListener<<SearchAction as Action>::Response>,
    {
        self.execute(SearchAction, request, listener)
    }

    fn get<L>(&self, request: GetRequest, listener: L)
    where
        L: ActionListener<<GetAction as Action>::Response>,
    {
        self.execute(GetAction, request, listener)
    }

    fn index<L>(&self, request: IndexRequest, listener: L)
    where
        L: ActionListener<<IndexAction as Action>::Response>,
    {
        self.execute(IndexAction, request, listener)
    }

    fn delete<L>(&self, request: DeleteRequest, listener: L)
    where
        L: ActionListener<<DeleteAction as Action>::Response>,
    {
        self.execute(DeleteAction, request, listener)
    }
}
