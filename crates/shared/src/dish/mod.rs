use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// A dish as listed in the catalog. Names are unique within a category only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub has_lamb: bool,
    #[serde(default)]
    pub has_spicy: bool,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_lamb: false,
            has_spicy: false,
        }
    }

    pub fn lamb(mut self) -> Self {
        self.has_lamb = true;
        self
    }

    pub fn spicy(mut self) -> Self {
        self.has_spicy = true;
        self
    }
}

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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Protein-heavy main dish
    MainMeat,
    /// Lighter secondary protein, mostly eggs and small meat dishes
    SemiMeat,
    Veggie,
}

impl Category {
    /// Slot order of a day, main first.
    pub const ALL: [Category; 3] = [Category::MainMeat, Category::SemiMeat, Category::Veggie];

    pub fn label(&self) -> &'static str {
        match self {
            Category::MainMeat => "Main meat",
            Category::SemiMeat => "Semi meat",
            Category::Veggie => "Veggie",
        }
    }
}

/// Dish lists keyed by category. A category missing from the input is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub main_meat: Vec<Dish>,
    #[serde(default)]
    pub semi_meat: Vec<Dish>,
    #[serde(default)]
    pub veggie: Vec<Dish>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dishes(&self, category: Category) -> &[Dish] {
        match category {
            Category::MainMeat => &self.main_meat,
            Category::SemiMeat => &self.semi_meat,
            Category::Veggie => &self.veggie,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL
            .iter()
            .all(|category| self.dishes(*category).is_empty())
    }
}
