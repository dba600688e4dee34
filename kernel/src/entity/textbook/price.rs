use vodca::{AsRefln, Fromln};

// Opaque text, never parsed as a number.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct TextbookPrice(String);

impl TextbookPrice {
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }
}
