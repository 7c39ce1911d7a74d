use std::io::Write;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use weekmenu_mealplan::PlanOutcome;
use weekmenu_shared::dish::{Catalog, Category};
use weekmenu_shared::mealplan::WeeklyPlan;
use weekmenu_shared::user::Preferences;

use super::{OutputFormat, describe};

/// Plans the week and writes it to `out`.
///
/// Returns `false` when the filters leave a category empty, after writing the
/// guidance for the user.
pub fn generate(
    catalog: &Catalog,
    preferences: &Preferences,
    seed: Option<u64>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let outcome = match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded generator");
            weekmenu_mealplan::plan_with_rng(
                catalog,
                preferences,
                &mut StdRng::seed_from_u64(seed),
            )
        }
        None => weekmenu_mealplan::plan(catalog, preferences),
    };

    match (&outcome, format) {
        (PlanOutcome::Planned(plan), OutputFormat::Text) => render_text(plan, preferences, out)?,
        (PlanOutcome::Planned(plan), OutputFormat::Json) => {
            let value = serde_json::json!({
                "status": "planned",
                "preferences": preferences,
                "days": plan.days,
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
        (PlanOutcome::Infeasible { category }, OutputFormat::Text) => {
            writeln!(out, "{}", infeasible_message(*category, preferences))?;
        }
        (PlanOutcome::Infeasible { category }, OutputFormat::Json) => {
            let value = serde_json::json!({
                "status": "infeasible",
                "category": category,
                "preferences": preferences,
                "message": infeasible_message(*category, preferences),
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
    }

    Ok(!outcome.is_infeasible())
}

pub fn render_text(
    plan: &WeeklyPlan,
    preferences: &Preferences,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Weekly menu ({})", describe(preferences))?;

    for day in plan.iter() {
        writeln!(out)?;
        writeln!(out, "{}", day.day.full_name())?;

        for category in Category::ALL {
            let label = format!("{}:", category.label());
            writeln!(out, "  {label:<11}{}", day.dish(category))?;
        }
    }

    Ok(())
}

pub fn infeasible_message(category: Category, preferences: &Preferences) -> String {
    format!(
        "No {} dish is left with your filters ({}). Try allowing lamb or spicy dishes.",
        category.label().to_lowercase(),
        describe(preferences)
    )
}
