use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct TextbookTitle(String);

impl TextbookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}
