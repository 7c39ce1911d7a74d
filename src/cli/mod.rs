mod catalog;
mod generate;

pub use catalog::*;
pub use generate::*;

use clap::{Args, ValueEnum};
use weekmenu_shared::user::Preferences;

#[derive(Args, Clone, Copy, Debug, Default)]
pub struct Filters {
    /// Skip every dish containing lamb
    #[arg(long)]
    pub no_lamb: bool,

    /// Skip every spicy dish
    #[arg(long)]
    pub no_spicy: bool,
}

impl From<Filters> for Preferences {
    fn from(value: Filters) -> Self {
        Preferences::new(value.no_lamb, value.no_spicy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn describe(preferences: &Preferences) -> String {
    match (preferences.exclude_lamb, preferences.exclude_spicy) {
        (false, false) => "no filters".to_owned(),
        (true, false) => "no lamb".to_owned(),
        (false, true) => "no spicy".to_owned(),
        (true, true) => "no lamb, no spicy".to_owned(),
    }
}
