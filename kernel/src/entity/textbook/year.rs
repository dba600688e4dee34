use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct TextbookYear(String);

impl TextbookYear {
    pub fn new(year: impl Into<String>) -> Self {
        Self(year.into())
    }
}
