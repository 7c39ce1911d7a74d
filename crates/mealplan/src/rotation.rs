use std::collections::HashSet;

use rand::Rng;
use weekmenu_shared::dish::Dish;

/// Rotation tracks which dishes of one category were served this week.
///
/// Each dish of the pool is served once before any dish repeats. When every
/// dish has been served the cycle resets, and yesterday's dish is held back
/// for that first pick unless it is the only one left.
#[derive(Debug, Clone)]
pub struct Rotation<'a> {
    pool: &'a [Dish],
    used: HashSet<&'a str>,
    yesterday: Option<&'a str>,
    cycle_number: u32,
}

impl<'a> Rotation<'a> {
    /// Returns `None` for an empty pool, which has nothing to rotate.
    pub fn new(pool: &'a [Dish]) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }

        Some(Self {
            pool,
            used: HashSet::new(),
            yesterday: None,
            cycle_number: 1,
        })
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn yesterday(&self) -> Option<&'a str> {
        self.yesterday
    }

    pub fn cycle_number(&self) -> u32 {
        self.cycle_number
    }

    /// True once every dish of the pool was served in the current cycle.
    pub fn is_exhausted(&self) -> bool {
        self.pool.iter().all(|dish| self.is_used(&dish.name))
    }

    /// Dishes the next pick draws from.
    ///
    /// On an exhausted cycle this is the full pool without yesterday's dish,
    /// which is what the next pick sees after the reset.
    pub fn candidates(&self) -> Vec<&'a Dish> {
        let pool = self.pool;

        if !self.is_exhausted() {
            return pool
                .iter()
                .filter(|dish| !self.is_used(&dish.name))
                .collect();
        }

        let available: Vec<&'a Dish> = pool.iter().collect();

        let Some(yesterday) = self.yesterday else {
            return available;
        };

        if available.len() <= 1 {
            return available;
        }

        let without_yesterday: Vec<&'a Dish> = available
            .iter()
            .copied()
            .filter(|dish| dish.name != yesterday)
            .collect();

        if without_yesterday.is_empty() {
            available
        } else {
            without_yesterday
        }
    }

    /// Draws one dish uniformly from the candidates and marks it used.
    pub fn pick<R: Rng>(&mut self, rng: &mut R) -> &'a Dish {
        let candidates = self.candidates();

        if self.is_exhausted() {
            self.reset_cycle();
        }

        let dish = candidates[rng.random_range(0..candidates.len())];
        self.mark_used(dish);

        dish
    }

    fn mark_used(&mut self, dish: &'a Dish) {
        self.used.insert(dish.name.as_str());
        self.yesterday = Some(dish.name.as_str());
    }

    fn reset_cycle(&mut self) {
        self.cycle_number = self.cycle_number.saturating_add(1);
        self.used.clear();

        tracing::debug!(
            cycle = self.cycle_number,
            pool = self.pool.len(),
            "rotation exhausted, starting a new cycle"
        );
    }
}
