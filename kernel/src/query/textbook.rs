use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Textbook, TextbookId};
use crate::KernelError;

pub trait TextbookQuery<Connection: Transaction>: Sync + Send + 'static {
    /// `true` iff a non-empty value is stored under `id`.
    fn exists(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<bool, KernelError>;
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<Option<Textbook>, KernelError>;
}

pub trait DependOnTextbookQuery: Sync + Send + 'static + DependOnDatabaseConnection {
    type TextbookQuery: TextbookQuery<
        <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn textbook_query(&self) -> &Self::TextbookQuery;
}
