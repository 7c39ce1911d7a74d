use rand::Rng;
use weekmenu_shared::dish::{Catalog, Category, Dish};
use weekmenu_shared::mealplan::{DayPlan, WEEK_LEN, WeeklyPlan, Weekday};
use weekmenu_shared::user::Preferences;

use crate::filter::filter_dishes;
use crate::rotation::Rotation;

/// Result of a planning run.
///
/// `Infeasible` is an expected outcome when the filters leave a category
/// without any dish; callers should ask the user to loosen them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    Planned(WeeklyPlan),
    Infeasible { category: Category },
}

impl PlanOutcome {
    pub fn plan(&self) -> Option<&WeeklyPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::Infeasible { .. } => None,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, PlanOutcome::Infeasible { .. })
    }
}

/// Plans Monday to Friday using the thread-local random generator.
pub fn plan(catalog: &Catalog, preferences: &Preferences) -> PlanOutcome {
    plan_with_rng(catalog, preferences, &mut rand::rng())
}

/// Plans Monday to Friday with one random draw per category per day.
///
/// **Flow:**
/// 1. Filter every category with `preferences`
/// 2. Return `Infeasible` for the first category left empty
/// 3. Walk the weekdays, picking one dish per category from its rotation
#[tracing::instrument(skip(catalog, rng))]
pub fn plan_with_rng<R: Rng>(
    catalog: &Catalog,
    preferences: &Preferences,
    rng: &mut R,
) -> PlanOutcome {
    let pools: [Vec<Dish>; 3] =
        Category::ALL.map(|category| filter_dishes(catalog.dishes(category), preferences));

    let (mut main_meat, mut semi_meat, mut veggie) =
        match pools.each_ref().map(|pool| Rotation::new(pool)) {
            [Some(main_meat), Some(semi_meat), Some(veggie)] => (main_meat, semi_meat, veggie),
            [None, _, _] => return infeasible(Category::MainMeat),
            [_, None, _] => return infeasible(Category::SemiMeat),
            [_, _, None] => return infeasible(Category::Veggie),
        };

    for (category, pool) in Category::ALL.into_iter().zip(pools.iter()) {
        if pool.len() < WEEK_LEN {
            tracing::warn!(
                %category,
                available = pool.len(),
                "not enough dishes for a full week, some will repeat"
            );
        }
    }

    let days = Weekday::ALL.map(|day| DayPlan {
        day,
        main_meat: main_meat.pick(&mut *rng).name.clone(),
        semi_meat: semi_meat.pick(&mut *rng).name.clone(),
        veggie: veggie.pick(&mut *rng).name.clone(),
    });

    tracing::debug!(?days, "weekly plan generated");

    PlanOutcome::Planned(WeeklyPlan { days })
}

fn infeasible(category: Category) -> PlanOutcome {
    tracing::info!(%category, "no dish left after filtering");
    PlanOutcome::Infeasible { category }
}
