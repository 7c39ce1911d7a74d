mod command;
pub mod dish;
pub mod mealplan;
pub mod user;

pub use command::*;
