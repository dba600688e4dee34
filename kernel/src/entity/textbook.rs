mod author;
mod id;
mod patch;
mod price;
mod title;
mod year;

pub use self::{author::*, id::*, patch::*, price::*, title::*, year::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Textbook {
    id: TextbookId,
    title: TextbookTitle,
    author: TextbookAuthor,
    year: TextbookYear,
    price: TextbookPrice,
}

impl Textbook {
    pub fn new(
        id: TextbookId,
        title: TextbookTitle,
        author: TextbookAuthor,
        year: TextbookYear,
        price: TextbookPrice,
    ) -> Self {
        Self {
            id,
            title,
            author,
            year,
            price,
        }
    }

    /// Overwrites every field the patch carries. The id is never touched.
    pub fn apply(&mut self, patch: TextbookPatch) {
        let DestructTextbookPatch {
            title,
            author,
            year,
            price,
        } = patch.into_destruct();
        self.substitute(|textbook| {
            if let Some(title) = title {
                *textbook.title = title;
            }
            if let Some(author) = author {
                *textbook.author = author;
            }
            if let Some(year) = year {
                *textbook.year = year;
            }
            if let Some(price) = price {
                *textbook.price = price;
            }
        });
    }
}
