use std::fmt;
use std::marker::PhantomData;

use crate::actions::{Action, ActionRequest};
use crate::clients::Client;
use crate::listeners::ActionListener;

/// Fluent builder for one request, bound to the client that created it.
///
/// Action specific setters live next to each action. `Display` renders the
/// request body as compact JSON, `{}` when the request has none.
pub struct RequestBuilder<'a, C: ?Sized, A: Action> {
    client: &'a C,
    pub(crate) request: A::Request,
    action: PhantomData<A>,
}

impl<'a, C: Client + ?Sized, A: Action> RequestBuilder<'a, C, A> {
    pub(crate) fn new(client: &'a C, request: A::Request) -> Self {
        RequestBuilder {
            client,
            request,
            action: PhantomData,
        }
    }

    pub fn request(&self) -> &A::Request {
        &self.request
    }

    pub fn into_request(self) -> A::Request {
        self.request
    }

    /// Hands the request to the owning client's dispatch.
    pub fn execute<L: ActionListener<A::Response>>(self, listener: L) {
        self.client.execute(A::default(), self.request, listener)
    }
}

impl<C: ?Sized, A: Action> fmt::Display for RequestBuilder<'_, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.request.body() {
            Some(body) => write!(f, "{body}"),
            None => f.write_str("{}"),
        }
    }
}
