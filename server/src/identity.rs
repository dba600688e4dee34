use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use error_stack::Report;
use kernel::interface::identity::ClientIdentity;
use kernel::prelude::entity::MspId;
use kernel::KernelError;

pub const MSP_ID_HEADER: &str = "x-msp-id";

/// Caller organization as presented by the `x-msp-id` header.
#[derive(Debug, Clone)]
pub struct CallerIdentity(Option<MspId>);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let msp_id = parts
            .headers
            .get(MSP_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(MspId::new);
        Ok(Self(msp_id))
    }
}

impl ClientIdentity for CallerIdentity {
    fn msp_id(&self) -> error_stack::Result<MspId, KernelError> {
        self.0.clone().ok_or_else(|| {
            Report::new(KernelError::Identity)
                .attach_printable(format!("missing or malformed {MSP_ID_HEADER} header"))
        })
    }
}
