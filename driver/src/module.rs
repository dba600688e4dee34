use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, WorldState};
use kernel::interface::query::DependOnTextbookQuery;
use kernel::interface::update::DependOnTextbookModifier;
use kernel::prelude::policy::{DependOnRoleRegistry, RoleRegistry};

use crate::database::WorldStateTextbookRepository;

/// Wires a world state backend and the role registry into everything the textbook contract depends on.
pub struct ContractModule<C> {
    connection: C,
    roles: RoleRegistry,
}

impl<C> ContractModule<C> {
    pub fn new(connection: C, roles: RoleRegistry) -> Self {
        Self { connection, roles }
    }
}

impl<C: DatabaseConnection> DependOnDatabaseConnection for ContractModule<C> {
    type DatabaseConnection = C;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.connection
    }
}

impl<C> DependOnTextbookQuery for ContractModule<C>
where
    C: DatabaseConnection,
    C::Transaction: WorldState,
{
    type TextbookQuery = WorldStateTextbookRepository;
    fn textbook_query(&self) -> &Self::TextbookQuery {
        &WorldStateTextbookRepository
    }
}

impl<C> DependOnTextbookModifier for ContractModule<C>
where
    C: DatabaseConnection,
    C::Transaction: WorldState,
{
    type TextbookModifier = WorldStateTextbookRepository;
    fn textbook_modifier(&self) -> &Self::TextbookModifier {
        &WorldStateTextbookRepository
    }
}

impl<C: DatabaseConnection> DependOnRoleRegistry for ContractModule<C> {
    fn role_registry(&self) -> &RoleRegistry {
        &self.roles
    }
}
