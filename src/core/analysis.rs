use serde::Serialize;

use crate::{
    core::{
        advisory::{ObservedHours, Tip, advise},
        consumption::MonthlyConsumption,
        efficiency::{EcoStatus, ScoreBreakdown, ScoringParameters},
        emission::{AnnualImpact, EmissionEstimate},
        solar::{SolarEstimate, SolarParameters},
        usage::UsageInputs,
        waste::waste,
    },
    prelude::*,
    quantity::ratios::Percentage,
};

/// Complete result set of a single analysis run.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub usage: UsageInputs,
    pub score: ScoreBreakdown,
    pub waste: Percentage,
    pub eco_status: EcoStatus,
    pub emission: EmissionEstimate,
    pub annual_impact: AnnualImpact,
    pub consumption: MonthlyConsumption,
    pub solar: SolarEstimate,
    pub tips: Vec<Tip>,
}

impl Analysis {
    #[instrument(skip_all)]
    pub fn run(
        usage: &UsageInputs,
        scoring_parameters: ScoringParameters,
        solar_parameters: SolarParameters,
    ) -> Self {
        let usage = usage.clamped();

        let score = ScoreBreakdown::calculate(&usage, scoring_parameters);
        let waste = waste(score.final_score);
        debug!(%score.final_score, %waste, "scored");

        let consumption = MonthlyConsumption::estimate(&usage);
        let emission = EmissionEstimate::from_energy(consumption.appliances());
        debug!(%emission.kilograms, %emission.tonnes, "estimated the emission");

        let solar = SolarEstimate::calculate(
            usage.campus_size,
            usage.monthly_bill,
            usage.monthly_units,
            solar_parameters,
        );
        debug!(
            %solar.capacity,
            %solar.yearly_benefit,
            ?solar.payback,
            "estimated the solar system",
        );

        let tips = advise(score.final_score, waste, ObservedHours::from(&usage));
        debug!(n_tips = tips.len(), "advised");

        Self {
            usage,
            score,
            waste,
            eco_status: EcoStatus::from(score.final_score),
            emission,
            annual_impact: AnnualImpact::from(emission),
            consumption,
            solar,
            tips,
        }
    }
}
