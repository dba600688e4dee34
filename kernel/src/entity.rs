mod msp_id;
mod textbook;

pub use self::{msp_id::*, textbook::*};
