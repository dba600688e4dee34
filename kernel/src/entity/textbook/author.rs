use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct TextbookAuthor(String);

impl TextbookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}
