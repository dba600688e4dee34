mod memory;
mod redis;
mod textbook;
mod write_set;

pub use self::{memory::*, redis::*, textbook::*};
