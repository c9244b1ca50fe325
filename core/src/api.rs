//! Resource client: the four comment operations over a transport.
//!
//! Every failure is reported as a `tracing` error event before it is handed
//! back to the caller. The log line is diagnostic only; callers still have
//! to handle the `Err`.

use crate::client::CommentClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, Operation, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Comment, NewComment};

pub struct CommentApi<T> {
    client: CommentClient,
    transport: T,
}

impl CommentApi<UreqTransport> {
    /// Resource client for the configured base URL over the default transport.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(CommentClient::with_config(config), UreqTransport::new())
    }
}

impl<T: Transport> CommentApi<T> {
    pub fn new(client: CommentClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_comments(&self) -> Result<Vec<Comment>, TransportError> {
        let req = self.client.build_list_comments();
        self.round_trip(Operation::List, None, Ok(req), |res| self.client.parse_list_comments(res))
    }

    pub fn create_comment(&self, input: &NewComment) -> Result<Comment, TransportError> {
        let req = self.client.build_create_comment(input);
        self.round_trip(Operation::Create, None, req, |res| self.client.parse_create_comment(res))
    }

    pub fn update_comment(&self, comment: &Comment) -> Result<Comment, TransportError> {
        let req = self.client.build_update_comment(comment);
        self.round_trip(Operation::Update, Some(comment.id), req, |res| {
            self.client.parse_update_comment(res)
        })
    }

    /// Succeeds on any 2xx, whether or not the record existed.
    pub fn delete_comment(&self, id: u64) -> Result<(), TransportError> {
        let req = self.client.build_delete_comment(id);
        self.round_trip(Operation::Delete, Some(id), Ok(req), |res| {
            self.client.parse_delete_comment(res)
        })
    }

    fn round_trip<R>(
        &self,
        operation: Operation,
        id: Option<u64>,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, TransportError> {
        request
            .and_then(|req| self.transport.execute(req))
            .and_then(parse)
            .map_err(|source| {
                let err = TransportError::new(operation, source);
                tracing::error!(
                    operation = operation.as_str(),
                    id = ?id,
                    error = %err.source,
                    "error while trying to {operation}"
                );
                err
            })
    }
}
