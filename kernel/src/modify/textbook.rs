use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Textbook, TextbookId};
use crate::KernelError;

pub trait TextbookModifier<Connection: Transaction>: 'static + Sync + Send {
    fn create(
        &self,
        con: &mut Connection,
        textbook: &Textbook,
    ) -> error_stack::Result<(), KernelError>;
    fn update(
        &self,
        con: &mut Connection,
        textbook: &Textbook,
    ) -> error_stack::Result<(), KernelError>;
    fn delete(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnTextbookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type TextbookModifier: TextbookModifier<
        <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn textbook_modifier(&self) -> &Self::TextbookModifier;
}
