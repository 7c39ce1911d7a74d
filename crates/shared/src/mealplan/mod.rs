use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::dish::Category;

pub const WEEK_LEN: usize = 5;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; WEEK_LEN] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn full_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub main_meat: String,
    pub semi_meat: String,
    pub veggie: String,
}

impl DayPlan {
    pub fn dish(&self, category: Category) -> &str {
        match category {
            Category::MainMeat => &self.main_meat,
            Category::SemiMeat => &self.semi_meat,
            Category::Veggie => &self.veggie,
        }
    }
}

/// Monday to Friday, one entry per weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: [DayPlan; WEEK_LEN],
}

impl WeeklyPlan {
    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter()
    }

    /// Names picked for one category, Monday first
    pub fn column(&self, category: Category) -> Vec<&str> {
        self.days.iter().map(|day| day.dish(category)).collect()
    }
}
