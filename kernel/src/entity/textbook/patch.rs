use destructure::Destructure;

use crate::entity::{TextbookAuthor, TextbookPrice, TextbookTitle, TextbookYear};

/// Set of field changes to apply to a stored textbook. Fields left as `None` keep their value.
///
/// Patches are only built through the constructors below so the reachable
/// field combinations match what [`Role`](crate::prelude::policy::Role) grants.
#[derive(Debug, Clone, Default, Eq, PartialEq, Destructure)]
pub struct TextbookPatch {
    title: Option<TextbookTitle>,
    author: Option<TextbookAuthor>,
    year: Option<TextbookYear>,
    price: Option<TextbookPrice>,
}

impl TextbookPatch {
    pub fn all(
        title: TextbookTitle,
        author: TextbookAuthor,
        year: TextbookYear,
        price: TextbookPrice,
    ) -> Self {
        Self {
            title: Some(title),
            author: Some(author),
            year: Some(year),
            price: Some(price),
        }
    }

    pub fn price_only(price: TextbookPrice) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn touches_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn touches_author(&self) -> bool {
        self.author.is_some()
    }

    pub fn touches_year(&self) -> bool {
        self.year.is_some()
    }

    pub fn touches_price(&self) -> bool {
        self.price.is_some()
    }
}
