use std::sync::Arc;

use driver::module::ContractModule;
use error_stack::ResultExt;
use kernel::prelude::policy::RoleRegistry;
use kernel::KernelError;

pub struct AppModule<C>(Arc<ContractModule<C>>);

impl<C> AppModule<C> {
    pub fn new(connection: C, roles: RoleRegistry) -> Self {
        Self(Arc::new(ContractModule::new(connection, roles)))
    }
}

impl<C: 'static + Sync + Send> AppModule<C> {
    /// Runs a contract call on the blocking pool; world state backends do synchronous I/O.
    pub async fn contract<F, T>(&self, f: F) -> error_stack::Result<T, KernelError>
    where
        F: FnOnce(&ContractModule<C>) -> error_stack::Result<T, KernelError> + Send + 'static,
        T: Send + 'static,
    {
        let module = Arc::clone(&self.0);
        tokio::task::spawn_blocking(move || f(module.as_ref()))
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "contract call did not complete")?
    }
}

impl<C> Clone for AppModule<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
