use serde::Serialize;

use crate::{
    core::{consumption::MonthlyConsumption, usage::UsageInputs},
    quantity::{
        energy::KilowattHours,
        mass::{Kilograms, KilogramsPerKilowattHour, Tonnes},
    },
};

/// Regional grid emission factor.
const EMISSION_FACTOR: KilogramsPerKilowattHour = KilogramsPerKilowattHour(0.92);

/// Yearly CO₂ absorbed by one mature tree.
const TREE_ABSORPTION_PER_YEAR: Kilograms = Kilograms(21.0);

const MONTHS_PER_YEAR: f64 = 12.0;

/// Estimated monthly CO₂ output.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmissionEstimate {
    pub kilograms: Kilograms,
    pub tonnes: Tonnes,
}

impl EmissionEstimate {
    /// Estimate from AC, lighting, and lab usage. Billed units do not contribute.
    pub fn from_usage(usage: &UsageInputs) -> Self {
        Self::from_energy(MonthlyConsumption::estimate(usage).appliances())
    }

    pub fn from_energy(energy: KilowattHours) -> Self {
        let kilograms = energy.non_negative() * EMISSION_FACTOR;
        Self { kilograms: kilograms.round_to(2), tonnes: Tonnes::from(kilograms).round_to(3) }
    }
}

/// Monthly emission extrapolated to a year.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct AnnualImpact {
    pub kilograms: Kilograms,
    pub tonnes: Tonnes,

    /// Mature trees required to absorb the yearly emission.
    pub trees_needed: u64,
}

impl From<EmissionEstimate> for AnnualImpact {
    fn from(monthly: EmissionEstimate) -> Self {
        let kilograms = monthly.kilograms * MONTHS_PER_YEAR;

        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let trees_needed = (kilograms / TREE_ABSORPTION_PER_YEAR).floor() as u64;

        Self { kilograms, tonnes: (monthly.tonnes * MONTHS_PER_YEAR).round_to(2), trees_needed }
    }
}
