use crate::client::{call, to_body, ClientError, MessageBody, Method, Transport};
use crate::domain::filter::{RequestFilter, RequestSummary};
use crate::domain::request::{Comment, NewComment, RoomChangeRequest};
use crate::domain::transitions::ReviewAction;
use crate::spreadsheets::export_requests_xlsx;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeBody {
    dark_mode: bool,
}

/// Review screen state: the loaded requests plus the active filter.
/// Each dashboard owns its own copy; nothing is shared between instances.
pub struct ReviewDashboard<T> {
    transport: T,
    requests: Vec<RoomChangeRequest>,
    pub filter: RequestFilter,
}

impl<T: Transport> ReviewDashboard<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            requests: Vec::new(),
            filter: RequestFilter::default(),
        }
    }

    /// Reload every request from the backend, replacing the local list.
    pub fn refresh(&mut self) -> Result<&[RoomChangeRequest], ClientError> {
        self.requests = call(&self.transport, Method::Get, "roomchange/display", None)?;
        tracing::debug!(count = self.requests.len(), "dashboard refreshed");
        Ok(&self.requests)
    }

    pub fn requests(&self) -> &[RoomChangeRequest] {
        &self.requests
    }

    pub fn get(&self, id: i64) -> Option<&RoomChangeRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Loaded requests that pass the current filter.
    pub fn visible(&self) -> Vec<&RoomChangeRequest> {
        self.filter.apply(&self.requests)
    }

    pub fn summary(&self) -> RequestSummary {
        RequestSummary::from_requests(&self.requests)
    }

    fn position(&self, id: i64) -> Result<usize, ClientError> {
        self.requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(ClientError::UnknownRequest(id))
    }

    /// Check the transition against the loaded status, show the new status
    /// straight away, and put the old one back if the backend refuses.
    fn review(
        &mut self,
        id: i64,
        action: ReviewAction,
        body: serde_json::Value,
    ) -> Result<RoomChangeRequest, ClientError> {
        let idx = self.position(id)?;
        let previous = self.requests[idx].status;
        self.requests[idx].status = previous.transition(action)?;

        let path = format!("roomchange/{action}/{id}");
        match call::<_, RoomChangeRequest>(&self.transport, Method::Put, &path, Some(&body)) {
            Ok(updated) => {
                self.requests[idx] = updated.clone();
                tracing::info!(id, status = %updated.status, "request reviewed");
                Ok(updated)
            }
            Err(e) => {
                self.requests[idx].status = previous;
                tracing::warn!(id, %action, error = %e, "review failed, status restored");
                Err(e)
            }
        }
    }

    pub fn approve(
        &mut self,
        id: i64,
        message: Option<&str>,
    ) -> Result<RoomChangeRequest, ClientError> {
        let message = message.map(str::trim).filter(|m| !m.is_empty());
        self.review(id, ReviewAction::Approve, json!({ "message": message }))
    }

    pub fn reject(&mut self, id: i64, reason: &str) -> Result<RoomChangeRequest, ClientError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::EmptyRejectionReason);
        }
        self.review(id, ReviewAction::Reject, json!({ "reason": reason }))
    }

    /// Permanently remove a request. `confirm` is asked first and a `false`
    /// answer stops here without calling the backend.
    pub fn delete<F>(&mut self, id: i64, confirm: F) -> Result<String, ClientError>
    where
        F: FnOnce(&RoomChangeRequest) -> bool,
    {
        let idx = self.position(id)?;
        if !confirm(&self.requests[idx]) {
            return Err(ClientError::NotConfirmed);
        }

        let path = format!("roomchange/delete/{id}");
        let reply: MessageBody = call(&self.transport, Method::Delete, &path, None)?;
        self.requests.remove(idx);

        tracing::info!(id, "request deleted");
        Ok(reply.message)
    }

    pub fn add_comment(
        &mut self,
        id: i64,
        author: &str,
        text: &str,
    ) -> Result<Comment, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyComment);
        }
        let idx = self.position(id)?;

        let body = to_body(&NewComment {
            request_id: id,
            comment: text.to_string(),
            commented_by: author.trim().to_string(),
        })?;
        let comment: Comment =
            call(&self.transport, Method::Post, "roomchange/comment", Some(&body))?;

        self.requests[idx].comments.push(comment.clone());
        Ok(comment)
    }

    /// Fetch the thread for one request, oldest first, and cache it on the
    /// loaded copy when there is one.
    pub fn comments(&mut self, id: i64) -> Result<Vec<Comment>, ClientError> {
        let path = format!("roomchange/comment/{id}");
        let thread: Vec<Comment> = call(&self.transport, Method::Get, &path, None)?;

        if let Some(r) = self.requests.iter_mut().find(|r| r.id == id) {
            r.comments = thread.clone();
        }
        Ok(thread)
    }

    /// Spreadsheet of the currently visible rows.
    pub fn export(&self) -> Result<Vec<u8>, ClientError> {
        Ok(export_requests_xlsx(&self.visible())?)
    }

    pub fn dark_mode(&self) -> Result<bool, ClientError> {
        let theme: ThemeBody = call(&self.transport, Method::Get, "preferences/theme", None)?;
        Ok(theme.dark_mode)
    }

    pub fn set_dark_mode(&self, dark_mode: bool) -> Result<(), ClientError> {
        let body = to_body(&ThemeBody { dark_mode })?;
        let _: ThemeBody = call(&self.transport, Method::Put, "preferences/theme", Some(&body))?;
        Ok(())
    }
}
