use crate::KernelError;

pub trait DatabaseConnection: 'static + Sync + Send {
    type Transaction: Transaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

/// Unit of work against the world state. Dropping a transaction without
/// committing discards every buffered write.
pub trait Transaction: 'static + Send {
    fn commit(self) -> error_stack::Result<(), KernelError>;
    fn roll_back(self) -> error_stack::Result<(), KernelError>;
}

/// Key-value view of the world state. Absent keys read as `None`.
pub trait WorldState {
    fn get_state(&mut self, key: &str) -> error_stack::Result<Option<Vec<u8>>, KernelError>;
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> error_stack::Result<(), KernelError>;
    fn del_state(&mut self, key: &str) -> error_stack::Result<(), KernelError>;
}
