use crate::error::ClientError;

/// Receives the outcome of a dispatched action.
///
/// A connected client calls exactly one of the two methods. The
/// disconnected client calls neither.
pub trait ActionListener<R>: Send {
    fn on_response(self, response: R);

    fn on_failure(self, error: ClientError);
}

impl<R, F> ActionListener<R> for F
where
    F: FnOnce(Result<R, ClientError>) + Send,
{
    fn on_response(self, response: R) {
        self(Ok(response))
    }

    fn on_failure(self, error: ClientError) {
        self(Err(error))
    }
}
