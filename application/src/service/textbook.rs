use error_stack::Report;
use tracing::{info, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::identity::ClientIdentity;
use kernel::interface::query::{DependOnTextbookQuery, TextbookQuery};
use kernel::interface::update::{DependOnTextbookModifier, TextbookModifier};
use kernel::prelude::entity::{
    MspId, Textbook, TextbookAuthor, TextbookId, TextbookPrice, TextbookTitle, TextbookYear,
};
use kernel::prelude::policy::{unauthorized, DependOnRoleRegistry, Role, RoleRegistry};
use kernel::KernelError;

use crate::transfer::{
    CreateTextbookDto, DeleteTextbookDto, GetTextbookDto, TextbookDto, UpdateTextbookDto,
};

fn not_found(id: &TextbookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("the textbook {id} does not exist"))
}

fn authorize(
    registry: &RoleRegistry,
    msp_id: &MspId,
    permits: impl FnOnce(&Role) -> bool,
) -> error_stack::Result<Role, KernelError> {
    let role = registry.role_of(msp_id);
    match role.filter(permits) {
        Some(role) => Ok(role),
        None => {
            warn!(%msp_id, ?role, "rejected caller");
            Err(unauthorized(msp_id))
        }
    }
}

pub trait ExistsTextbookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnTextbookQuery
{
    #[tracing::instrument(skip_all, fields(id = %dto.id))]
    fn textbook_exists(&self, dto: &GetTextbookDto) -> error_stack::Result<bool, KernelError> {
        let mut con = self.database_connection().transact()?;
        let id = TextbookId::new(dto.id.clone());
        self.textbook_query().exists(&mut con, &id)
    }
}

impl<T> ExistsTextbookService for T where T: DependOnDatabaseConnection + DependOnTextbookQuery {}

pub trait GetTextbookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnTextbookQuery
{
    #[tracing::instrument(skip_all, fields(id = %dto.id))]
    fn get_textbook(&self, dto: &GetTextbookDto) -> error_stack::Result<TextbookDto, KernelError> {
        let mut con = self.database_connection().transact()?;
        let id = TextbookId::new(dto.id.clone());
        let textbook = self
            .textbook_query()
            .find_by_id(&mut con, &id)?
            .ok_or_else(|| not_found(&id))?;
        Ok(TextbookDto::from(textbook))
    }
}

impl<T> GetTextbookService for T where T: DependOnDatabaseConnection + DependOnTextbookQuery {}

pub trait CreateTextbookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnTextbookQuery
    + DependOnTextbookModifier
    + DependOnRoleRegistry
{
    /// Only the manufacturer may create. The role is checked before the key is
    /// looked up so other organizations cannot probe which ids exist.
    #[tracing::instrument(skip_all, fields(id = %dto.id))]
    fn create_textbook(
        &self,
        caller: &impl ClientIdentity,
        dto: CreateTextbookDto,
    ) -> error_stack::Result<String, KernelError> {
        let msp_id = caller.msp_id()?;
        authorize(self.role_registry(), &msp_id, Role::can_create)?;

        let mut con = self.database_connection().transact()?;
        let id = TextbookId::new(dto.id);
        if self.textbook_query().exists(&mut con, &id)? {
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("the textbook {id} already exists")));
        }

        let textbook = Textbook::new(
            id.clone(),
            TextbookTitle::new(dto.title),
            TextbookAuthor::new(dto.author),
            TextbookYear::new(dto.year),
            TextbookPrice::new(dto.price),
        );
        self.textbook_modifier().create(&mut con, &textbook)?;
        con.commit()?;

        info!(%msp_id, "textbook created");
        Ok(format!("Successfully added textbook {id}"))
    }
}

impl<T> CreateTextbookService for T where
    T: DependOnDatabaseConnection
        + DependOnTextbookQuery
        + DependOnTextbookModifier
        + DependOnRoleRegistry
{
}

pub trait UpdateTextbookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnTextbookQuery
    + DependOnTextbookModifier
    + DependOnRoleRegistry
{
    /// Unlike create and delete, existence is checked before the caller's role.
    /// A dealer's title, author and year are discarded; only the price is applied.
    #[tracing::instrument(skip_all, fields(id = %dto.id))]
    fn update_textbook(
        &self,
        caller: &impl ClientIdentity,
        dto: UpdateTextbookDto,
    ) -> error_stack::Result<String, KernelError> {
        let msp_id = caller.msp_id()?;

        let mut con = self.database_connection().transact()?;
        let id = TextbookId::new(dto.id);
        if !self.textbook_query().exists(&mut con, &id)? {
            return Err(not_found(&id));
        }
        let mut textbook = self
            .textbook_query()
            .find_by_id(&mut con, &id)?
            .ok_or_else(|| not_found(&id))?;

        let role = authorize(self.role_registry(), &msp_id, Role::can_update)?;
        let patch = role.patch(
            TextbookTitle::new(dto.title),
            TextbookAuthor::new(dto.author),
            TextbookYear::new(dto.year),
            TextbookPrice::new(dto.price),
        );
        textbook.apply(patch);

        self.textbook_modifier().update(&mut con, &textbook)?;
        con.commit()?;

        info!(%msp_id, ?role, "textbook updated");
        Ok(format!("Textbook with id {id} has been updated"))
    }
}

impl<T> UpdateTextbookService for T where
    T: DependOnDatabaseConnection
        + DependOnTextbookQuery
        + DependOnTextbookModifier
        + DependOnRoleRegistry
{
}

pub trait DeleteTextbookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnTextbookQuery
    + DependOnTextbookModifier
    + DependOnRoleRegistry
{
    #[tracing::instrument(skip_all, fields(id = %dto.id))]
    fn delete_textbook(
        &self,
        caller: &impl ClientIdentity,
        dto: DeleteTextbookDto,
    ) -> error_stack::Result<String, KernelError> {
        let msp_id = caller.msp_id()?;
        authorize(self.role_registry(), &msp_id, Role::can_delete)?;

        let mut con = self.database_connection().transact()?;
        let id = TextbookId::new(dto.id);
        if !self.textbook_query().exists(&mut con, &id)? {
            return Err(not_found(&id));
        }

        self.textbook_modifier().delete(&mut con, &id)?;
        con.commit()?;

        info!(%msp_id, "textbook deleted");
        Ok(format!("Textbook with id {id} has been deleted from the world state"))
    }
}

impl<T> DeleteTextbookService for T where
    T: DependOnDatabaseConnection
        + DependOnTextbookQuery
        + DependOnTextbookModifier
        + DependOnRoleRegistry
{
}
