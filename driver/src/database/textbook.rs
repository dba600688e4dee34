use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use kernel::interface::database::{Transaction, WorldState};
use kernel::interface::query::TextbookQuery;
use kernel::interface::update::TextbookModifier;
use kernel::prelude::entity::{
    DestructTextbook, Textbook, TextbookAuthor, TextbookId, TextbookPrice, TextbookTitle,
    TextbookYear,
};
use kernel::KernelError;

use crate::error::ConvertError;

/// Stores textbooks as JSON documents keyed by their id in any [`WorldState`].
pub struct WorldStateTextbookRepository;

impl<Connection> TextbookQuery<Connection> for WorldStateTextbookRepository
where
    Connection: Transaction + WorldState,
{
    fn exists(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<bool, KernelError> {
        WorldStateTextbookInternal::read(con, id).map(|bytes| bytes.is_some())
    }

    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<Option<Textbook>, KernelError> {
        WorldStateTextbookInternal::find_by_id(con, id)
    }
}

impl<Connection> TextbookModifier<Connection> for WorldStateTextbookRepository
where
    Connection: Transaction + WorldState,
{
    fn create(
        &self,
        con: &mut Connection,
        textbook: &Textbook,
    ) -> error_stack::Result<(), KernelError> {
        WorldStateTextbookInternal::write(con, textbook)
    }

    fn update(
        &self,
        con: &mut Connection,
        textbook: &Textbook,
    ) -> error_stack::Result<(), KernelError> {
        WorldStateTextbookInternal::write(con, textbook)
    }

    fn delete(
        &self,
        con: &mut Connection,
        id: &TextbookId,
    ) -> error_stack::Result<(), KernelError> {
        con.del_state(key(id))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TextbookRow {
    id: String,
    title: String,
    author: String,
    year: String,
    price: String,
}

impl From<TextbookRow> for Textbook {
    fn from(value: TextbookRow) -> Self {
        Textbook::new(
            TextbookId::new(value.id),
            TextbookTitle::new(value.title),
            TextbookAuthor::new(value.author),
            TextbookYear::new(value.year),
            TextbookPrice::new(value.price),
        )
    }
}

impl From<Textbook> for TextbookRow {
    fn from(value: Textbook) -> Self {
        let DestructTextbook {
            id,
            title,
            author,
            year,
            price,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            price: price.into(),
        }
    }
}

fn key(id: &TextbookId) -> &str {
    let key: &String = id.as_ref();
    key
}

struct WorldStateTextbookInternal;

impl WorldStateTextbookInternal {
    /// Raw payload under `id`. An empty value counts as absent.
    fn read(
        con: &mut impl WorldState,
        id: &TextbookId,
    ) -> error_stack::Result<Option<Vec<u8>>, KernelError> {
        let bytes = con
            .get_state(key(id))
            .attach_printable_lazy(|| format!("failed to read {id} from world state"))?;
        Ok(bytes.filter(|bytes| !bytes.is_empty()))
    }

    fn find_by_id(
        con: &mut impl WorldState,
        id: &TextbookId,
    ) -> error_stack::Result<Option<Textbook>, KernelError> {
        let Some(bytes) = Self::read(con, id)? else {
            return Ok(None);
        };
        let row = serde_json::from_slice::<TextbookRow>(&bytes)
            .convert_error()
            .attach_printable_lazy(|| {
                format!("could not unmarshal world state data at {id} to type Textbook")
            })?;
        Ok(Some(Textbook::from(row)))
    }

    fn write(con: &mut impl WorldState, textbook: &Textbook) -> error_stack::Result<(), KernelError> {
        let id = textbook.id();
        let bytes = serde_json::to_vec(&TextbookRow::from(textbook.clone()))
            .convert_error()
            .attach_printable_lazy(|| format!("could not marshal textbook {id}"))?;
        con.put_state(key(id), bytes)
    }
}
