use kernel::prelude::entity::{DestructTextbook, Textbook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TextbookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub price: String,
}

impl From<Textbook> for TextbookDto {
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

#[derive(Debug)]
pub struct GetTextbookDto {
    pub id: String,
}

#[derive(Debug)]
pub struct CreateTextbookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub price: String,
}

/// Every mutable field is always supplied. The caller's role decides which of them are applied.
#[derive(Debug)]
pub struct UpdateTextbookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub price: String,
}

#[derive(Debug)]
pub struct DeleteTextbookDto {
    pub id: String,
}
