use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::quantity::{
    area::SquareFeet,
    currency::Rupees,
    energy::KilowattHours,
    mass::Tonnes,
    power::Kilowatts,
    rate::RupeesPerKilowattHour,
    ratios::Percentage,
    time::Years,
};

/// Roof area required per kilowatt of installed capacity.
const AREA_PER_KILOWATT: SquareFeet = SquareFeet(100.0);

/// Average monthly yield of one installed kilowatt.
const MONTHLY_YIELD_PER_KILOWATT: f64 = 120.0;

/// Bill offset per installed kilowatt, in percent.
const SAVINGS_PERCENT_PER_KILOWATT: f64 = 0.8;
const MAX_SAVINGS: Percentage = Percentage(50.0);

const INSTALLATION_COST_PER_KILOWATT: Rupees = Rupees(150_000.0);

/// Yearly CO₂ offset per installed kilowatt.
const CO2_REDUCTION_PER_KILOWATT: Tonnes = Tonnes(1.5);

const MONTHS_PER_YEAR: f64 = 12.0;
const PROFIT_HORIZON_YEARS: f64 = 10.0;

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SolarParameters {
    /// Net metering sell rate for the surplus units.
    pub sell_rate: RupeesPerKilowattHour,

    /// Yearly maintenance cost as a fraction of the installation cost.
    pub maintenance_fraction: f64,
}

impl Default for SolarParameters {
    fn default() -> Self {
        Self { sell_rate: RupeesPerKilowattHour(19.0), maintenance_fraction: 0.02 }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SolarRecommendation {
    Rooftop,
    OnGridCommercial,
    HybridLargeScale,
}

impl From<Kilowatts> for SolarRecommendation {
    fn from(capacity: Kilowatts) -> Self {
        if capacity < Kilowatts(10.0) {
            Self::Rooftop
        } else if capacity < Kilowatts(50.0) {
            Self::OnGridCommercial
        } else {
            Self::HybridLargeScale
        }
    }
}

impl Display for SolarRecommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rooftop => write!(f, "Rooftop Solar System Recommended"),
            Self::OnGridCommercial => write!(f, "On-Grid Commercial Solar System Recommended"),
            Self::HybridLargeScale => write!(f, "Hybrid Large-Scale Solar System Recommended"),
        }
    }
}

/// Solar system sizing and payoff, rounded to two decimal places.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SolarEstimate {
    pub capacity: Kilowatts,

    /// Expected monthly generation.
    pub monthly_generation: KilowattHours,

    /// Share of the bill offset by the system.
    pub savings_percent: Percentage,

    pub yearly_bill_savings: Rupees,
    pub installation_cost: Rupees,
    pub yearly_maintenance_cost: Rupees,

    /// Monthly generation in excess of the monthly consumption.
    pub surplus_units: KilowattHours,

    pub net_metering_income: Rupees,

    /// Bill savings minus maintenance plus net metering income.
    ///
    /// Negative when the maintenance outweighs everything else.
    pub yearly_benefit: Rupees,

    /// [`None`] when the yearly benefit is not positive and the system never pays back.
    pub payback: Option<Years>,

    /// Yearly CO₂ offset.
    pub co2_reduction: Tonnes,

    pub ten_year_profit: Rupees,
    pub recommendation: SolarRecommendation,
}

impl SolarEstimate {
    pub fn calculate(
        campus_size: SquareFeet,
        monthly_bill: Rupees,
        monthly_units: KilowattHours,
        parameters: SolarParameters,
    ) -> Self {
        let campus_size = campus_size.non_negative();
        let monthly_bill = monthly_bill.non_negative();
        let monthly_units = monthly_units.non_negative();
        let sell_rate = parameters.sell_rate.non_negative();
        let maintenance_fraction = parameters.maintenance_fraction.max(0.0);

        let capacity = Kilowatts(campus_size / AREA_PER_KILOWATT);
        let monthly_generation = KilowattHours(capacity.0 * MONTHLY_YIELD_PER_KILOWATT);

        let savings_percent =
            Percentage(capacity.0 * SAVINGS_PERCENT_PER_KILOWATT).min(MAX_SAVINGS);
        let yearly_bill_savings = monthly_bill * savings_percent.to_ratio() * MONTHS_PER_YEAR;

        let installation_cost = INSTALLATION_COST_PER_KILOWATT * capacity.0;
        let yearly_maintenance_cost = installation_cost * maintenance_fraction;
        let net_yearly_savings = yearly_bill_savings - yearly_maintenance_cost;

        let surplus_units = (monthly_generation - monthly_units).non_negative().round_to(2);
        let net_metering_income = surplus_units * sell_rate * MONTHS_PER_YEAR;

        let yearly_benefit = net_yearly_savings + net_metering_income;
        let payback = (yearly_benefit.0 > 0.0)
            .then(|| Years(installation_cost / yearly_benefit))
            .filter(|payback| payback.0.is_finite())
            .map(|payback| payback.round_to(2));

        Self {
            capacity: capacity.round_to(2),
            monthly_generation: monthly_generation.round_to(2),
            savings_percent: savings_percent.round_to(2),
            yearly_bill_savings: yearly_bill_savings.round_to(2),
            installation_cost: installation_cost.round_to(2),
            yearly_maintenance_cost: yearly_maintenance_cost.round_to(2),
            surplus_units,
            net_metering_income: net_metering_income.round_to(2),
            yearly_benefit: yearly_benefit.round_to(2),
            payback,
            co2_reduction: (CO2_REDUCTION_PER_KILOWATT * capacity.0).round_to(2),
            ten_year_profit: (yearly_benefit * PROFIT_HORIZON_YEARS - installation_cost)
                .round_to(2),
            recommendation: SolarRecommendation::from(capacity),
        }
    }

    /// Cumulative benefit at the end of each year, starting from the first one.
    pub fn projection(&self, n_years: u32) -> Vec<(u32, Rupees)> {
        (1..=n_years).map(|year| (year, self.yearly_benefit * f64::from(year))).collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn estimate(campus_size: f64, monthly_bill: f64, monthly_units: f64) -> SolarEstimate {
        SolarEstimate::calculate(
            SquareFeet(campus_size),
            Rupees(monthly_bill),
            KilowattHours(monthly_units),
            SolarParameters::default(),
        )
    }

    #[test]
    fn test_medium_campus() {
        let estimate = estimate(1000.0, 100_000.0, 1000.0);
        assert_abs_diff_eq!(estimate.capacity.0, 10.0);
        assert_abs_diff_eq!(estimate.monthly_generation.0, 1200.0);
        assert_abs_diff_eq!(estimate.savings_percent.0, 8.0);
        assert_abs_diff_eq!(estimate.yearly_bill_savings.0, 96_000.0);
        assert_abs_diff_eq!(estimate.installation_cost.0, 1_500_000.0);
        assert_abs_diff_eq!(estimate.yearly_maintenance_cost.0, 30_000.0);
        assert_abs_diff_eq!(estimate.surplus_units.0, 200.0);
        assert_abs_diff_eq!(estimate.net_metering_income.0, 45_600.0);
        assert_abs_diff_eq!(estimate.yearly_benefit.0, 111_600.0);
        assert_abs_diff_eq!(estimate.payback.unwrap().0, 13.44);
        assert_abs_diff_eq!(estimate.co2_reduction.0, 15.0);
        assert_abs_diff_eq!(estimate.ten_year_profit.0, -384_000.0);
        assert_eq!(estimate.recommendation, SolarRecommendation::OnGridCommercial);
    }

    #[test]
    fn test_no_campus() {
        let estimate = estimate(0.0, 100_000.0, 1000.0);
        assert_eq!(estimate.capacity, Kilowatts::ZERO);
        assert_eq!(estimate.co2_reduction, Tonnes::ZERO);
        assert_eq!(estimate.yearly_benefit, Rupees::ZERO);
        assert_eq!(estimate.payback, None);
        assert_eq!(estimate.recommendation, SolarRecommendation::Rooftop);
        assert_eq!(estimate.recommendation.to_string(), "Rooftop Solar System Recommended");
    }

    #[test]
    fn test_maintenance_exceeds_savings() {
        let estimate = estimate(500.0, 0.0, 1_000_000.0);
        assert!(estimate.yearly_benefit < Rupees::ZERO);
        assert_abs_diff_eq!(estimate.yearly_benefit.0, -15_000.0);
        assert_eq!(estimate.payback, None);
    }

    #[test]
    fn test_infinite_campus() {
        let estimate = estimate(f64::INFINITY, 1.0, 1.0);
        assert_eq!(estimate.payback, None);
        assert_eq!(estimate.recommendation, SolarRecommendation::HybridLargeScale);
    }

    #[test]
    fn test_savings_are_capped() {
        let estimate = estimate(100_000.0, 1_000_000.0, 0.0);
        assert_eq!(estimate.savings_percent, MAX_SAVINGS);
        assert_abs_diff_eq!(estimate.yearly_bill_savings.0, 6_000_000.0);
        assert_eq!(estimate.recommendation, SolarRecommendation::HybridLargeScale);
    }

    #[test]
    fn test_recommendation_boundaries() {
        use SolarRecommendation::{HybridLargeScale, OnGridCommercial, Rooftop};

        assert_eq!(SolarRecommendation::from(Kilowatts(9.99)), Rooftop);
        assert_eq!(SolarRecommendation::from(Kilowatts(10.0)), OnGridCommercial);
        assert_eq!(SolarRecommendation::from(Kilowatts(49.99)), OnGridCommercial);
        assert_eq!(SolarRecommendation::from(Kilowatts(50.0)), HybridLargeScale);
    }

    #[test]
    fn test_negative_parameters() {
        let estimate = SolarEstimate::calculate(
            SquareFeet(1000.0),
            Rupees(100_000.0),
            KilowattHours(-10.0),
            SolarParameters { sell_rate: RupeesPerKilowattHour(-19.0), maintenance_fraction: -1.0 },
        );
        assert_eq!(estimate.net_metering_income, Rupees::ZERO);
        assert_eq!(estimate.yearly_maintenance_cost, Rupees::ZERO);
        assert_abs_diff_eq!(estimate.surplus_units.0, 1200.0);
        assert_abs_diff_eq!(estimate.yearly_benefit.0, 96_000.0);
    }

    #[test]
    fn test_projection() {
        let projection = estimate(1000.0, 100_000.0, 1000.0).projection(10);
        assert_eq!(projection.len(), 10);
        assert_eq!(projection[0].0, 1);
        assert_abs_diff_eq!(projection[0].1.0, 111_600.0);
        assert_eq!(projection[9].0, 10);
        assert_abs_diff_eq!(projection[9].1.0, 1_116_000.0);
    }
}
