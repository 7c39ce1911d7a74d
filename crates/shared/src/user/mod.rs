use serde::{Deserialize, Serialize};

use crate::dish::Dish;

/// Dietary flags collected for a single planning run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub exclude_lamb: bool,
    #[serde(default)]
    pub exclude_spicy: bool,
}

impl Preferences {
    pub fn new(exclude_lamb: bool, exclude_spicy: bool) -> Self {
        Self {
            exclude_lamb,
            exclude_spicy,
        }
    }

    /// Whether the dish passes every active flag
    pub fn allows(&self, dish: &Dish) -> bool {
        !(self.exclude_lamb && dish.has_lamb) && !(self.exclude_spicy && dish.has_spicy)
    }
}
