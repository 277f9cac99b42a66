//! Domain value objects

mod question;

pub use question::Question;
