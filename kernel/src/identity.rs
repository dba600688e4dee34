use crate::entity::MspId;
use crate::KernelError;

/// Resolves the organization the current caller transacts for.
pub trait ClientIdentity {
    fn msp_id(&self) -> error_stack::Result<MspId, KernelError>;
}

impl ClientIdentity for MspId {
    fn msp_id(&self) -> error_stack::Result<MspId, KernelError> {
        Ok(self.clone())
    }
}
