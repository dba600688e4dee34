mod textbook;

pub use self::textbook::*;
