use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::{AttachmentKind, FrameKind, Report};
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::AlreadyExists => StatusCode::CONFLICT,
            KernelError::Unauthorized => StatusCode::FORBIDDEN,
            KernelError::Identity => StatusCode::UNAUTHORIZED,
            KernelError::Store => StatusCode::SERVICE_UNAVAILABLE,
            KernelError::Serialization | KernelError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Most recent printable attachment, falling back to the context itself.
    fn message(&self) -> String {
        self.0
            .frames()
            .find_map(|frame| match frame.kind() {
                FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                    Some(printable.to_string())
                }
                _ => None,
            })
            .unwrap_or_else(|| self.0.current_context().to_string())
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        (status, self.message()).into_response()
    }
}
