use std::io::Write;

use anyhow::Result;
use weekmenu_mealplan::pool_sizes;
use weekmenu_shared::dish::Catalog;
use weekmenu_shared::mealplan::WEEK_LEN;
use weekmenu_shared::user::Preferences;

use super::describe;

/// Prints how many dishes each category offers with the given filters.
pub fn summary(catalog: &Catalog, preferences: &Preferences, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Catalog ({})", describe(preferences))?;

    for size in pool_sizes(catalog, preferences) {
        let note = match size.available {
            0 => " (no dish left, a menu cannot be planned)",
            n if n < WEEK_LEN => " (dishes will repeat during the week)",
            _ => "",
        };

        writeln!(
            out,
            "  {:<10} {:>3} of {:>3} dishes{note}",
            size.category.to_string(),
            size.available,
            size.total
        )?;
    }

    Ok(())
}
