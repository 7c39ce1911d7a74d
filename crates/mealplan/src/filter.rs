use weekmenu_shared::dish::{Catalog, Category, Dish};
use weekmenu_shared::user::Preferences;

/// Keeps the dishes allowed by `preferences`, in catalog order.
///
/// An empty result is valid; the planner turns it into an infeasible outcome.
pub fn filter_dishes(dishes: &[Dish], preferences: &Preferences) -> Vec<Dish> {
    dishes
        .iter()
        .filter(|dish| preferences.allows(dish))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSize {
    pub category: Category,
    pub total: usize,
    pub available: usize,
}

/// Dish counts per category before and after filtering
pub fn pool_sizes(catalog: &Catalog, preferences: &Preferences) -> [PoolSize; 3] {
    Category::ALL.map(|category| {
        let dishes = catalog.dishes(category);

        PoolSize {
            category,
            total: dishes.len(),
            available: dishes.iter().filter(|dish| preferences.allows(dish)).count(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dishes() -> Vec<Dish> {
        vec![
            Dish::new("Scallion Stir-Fried Lamb").lamb(),
            Dish::new("Braised Pork Ribs"),
            Dish::new("Kung Pao Chicken").spicy(),
            Dish::new("Spicy Cumin Lamb").lamb().spicy(),
            Dish::new("Soy Braised Beef"),
        ]
    }

    fn names(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_no_flags_keeps_everything() {
        let filtered = filter_dishes(&dishes(), &Preferences::default());
        assert_eq!(filtered, dishes());
    }

    #[test]
    fn test_exclude_lamb_keeps_order() {
        let filtered = filter_dishes(&dishes(), &Preferences::new(true, false));
        assert_eq!(
            names(&filtered),
            vec!["Braised Pork Ribs", "Kung Pao Chicken", "Soy Braised Beef"]
        );
    }

    #[test]
    fn test_exclude_spicy() {
        let filtered = filter_dishes(&dishes(), &Preferences::new(false, true));
        assert_eq!(
            names(&filtered),
            vec![
                "Scallion Stir-Fried Lamb",
                "Braised Pork Ribs",
                "Soy Braised Beef"
            ]
        );
    }

    #[test]
    fn test_both_flags() {
        let filtered = filter_dishes(&dishes(), &Preferences::new(true, true));
        assert_eq!(names(&filtered), vec!["Braised Pork Ribs", "Soy Braised Beef"]);
    }

    #[test]
    fn test_everything_filtered_out_is_empty() {
        let input = vec![Dish::new("Lamb Skewers").lamb(), Dish::new("Mapo Tofu").spicy()];
        let filtered = filter_dishes(&input, &Preferences::new(true, true));

        assert!(filtered.is_empty());
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        for (lamb, spicy) in [(false, false), (true, false), (false, true), (true, true)] {
            let preferences = Preferences::new(lamb, spicy);
            let once = filter_dishes(&dishes(), &preferences);
            let twice = filter_dishes(&once, &preferences);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_pool_sizes() {
        let catalog = Catalog {
            main_meat: dishes(),
            semi_meat: vec![Dish::new("Mapo Tofu").spicy()],
            veggie: vec![],
        };

        let sizes = pool_sizes(&catalog, &Preferences::new(true, true));

        assert_eq!(
            sizes,
            [
                PoolSize {
                    category: Category::MainMeat,
                    total: 5,
                    available: 2
                },
                PoolSize {
                    category: Category::SemiMeat,
                    total: 1,
                    available: 0
                },
                PoolSize {
                    category: Category::Veggie,
                    total: 0,
                    available: 0
                },
            ]
        );
    }
}
