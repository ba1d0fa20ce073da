use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use ecocampus::{
    core::{
        advisory::Tip,
        analysis::Analysis,
        consumption::MonthlyConsumption,
        efficiency::EcoStatus,
        emission::AnnualImpact,
        solar::SolarEstimate,
    },
    quantity::{currency::Rupees, ratios::Points},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn eco_status_color(eco_status: EcoStatus) -> Color {
    match eco_status {
        EcoStatus::GreenChampion => Color::Green,
        EcoStatus::Improving => Color::DarkYellow,
        EcoStatus::NeedsImprovement => Color::Red,
    }
}

fn points_color(points: Points) -> Color {
    eco_status_color(EcoStatus::from(points))
}

const fn profit_color(amount: Rupees) -> Color {
    if amount.0 > 0.0 { Color::Green } else { Color::Red }
}

pub fn build_score_table(analysis: &Analysis) -> Table {
    let score = &analysis.score;
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Score").fg(points_color(score.final_score)),
            Cell::new("Waste"),
            Cell::new("Monthly\nCO₂"),
            Cell::new("AC"),
            Cell::new("Lights"),
            Cell::new("Bill"),
            Cell::new("Rooms"),
            Cell::new("Labs"),
        ])
        .add_row(vec![
            Cell::new(score.final_score).fg(points_color(score.final_score)),
            Cell::new(analysis.waste),
            Cell::new(analysis.emission.tonnes),
            Cell::new(score.ac_score).fg(points_color(score.ac_score)),
            Cell::new(score.light_score).fg(points_color(score.light_score)),
            Cell::new(score.bill_score).fg(points_color(score.bill_score)),
            Cell::new(score.room_score).fg(points_color(score.room_score)),
            Cell::new(score.lab_score).fg(points_color(score.lab_score)),
        ])
        .add_row(vec![
            Cell::new(analysis.eco_status)
                .fg(eco_status_color(analysis.eco_status))
                .add_attribute(Attribute::Bold),
        ]);
    table
}

pub fn build_annual_impact_table(impact: &AnnualImpact) -> Table {
    let mut table = new_table();
    table
        .set_header(vec!["Yearly CO₂", "Trees to offset"])
        .add_row(vec![
            Cell::new(impact.tonnes).set_alignment(CellAlignment::Right),
            Cell::new(impact.trees_needed).set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("One mature tree absorbs ~21 kg CO₂ per year")
                .add_attribute(Attribute::Dim),
        ]);
    table
}

/// Returns [`None`] when there is nothing to break down.
pub fn build_consumption_table(consumption: &MonthlyConsumption) -> Option<Table> {
    let shares = consumption.shares()?;
    let mut table = new_table();
    table.set_header(vec!["Appliances", "Monthly", "Share"]);
    for ((appliance, energy), (_, share)) in consumption.breakdown().into_iter().zip(shares) {
        table.add_row(vec![
            Cell::new(appliance),
            Cell::new(format!("{energy:.1}")).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", share * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", consumption.total()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    Some(table)
}

pub fn build_solar_table(solar: &SolarEstimate) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Capacity"),
            Cell::new("Yearly\nsavings"),
            Cell::new("Payback"),
            Cell::new("CO₂ reduction\nper year"),
            Cell::new("10-year\nprofit"),
        ])
        .add_row(vec![
            Cell::new(solar.capacity),
            Cell::new(solar.yearly_benefit).fg(profit_color(solar.yearly_benefit)),
            solar.payback.map_or_else(
                || Cell::new("never").fg(Color::Red),
                |payback| Cell::new(payback).set_alignment(CellAlignment::Right),
            ),
            Cell::new(solar.co2_reduction).fg(Color::Green),
            Cell::new(solar.ten_year_profit).fg(profit_color(solar.ten_year_profit)),
        ])
        .add_row(vec![
            Cell::new("Installation").add_attribute(Attribute::Dim),
            Cell::new("Bill savings").add_attribute(Attribute::Dim),
            Cell::new("Maintenance").add_attribute(Attribute::Dim),
            Cell::new("Surplus units").add_attribute(Attribute::Dim),
            Cell::new("Net metering").add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new(solar.installation_cost),
            Cell::new(solar.yearly_bill_savings),
            Cell::new(solar.yearly_maintenance_cost),
            Cell::new(solar.surplus_units),
            Cell::new(solar.net_metering_income),
        ])
        .add_row(vec![Cell::new(solar.recommendation).add_attribute(Attribute::Bold)]);
    table
}

pub fn build_projection_table(solar: &SolarEstimate, n_years: u32) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Year", "Cumulative\nbenefit", "Net of\ninstallation"]);
    for (year, cumulative) in solar.projection(n_years) {
        let net = cumulative - solar.installation_cost;
        table.add_row(vec![
            Cell::new(year).add_attribute(Attribute::Dim),
            Cell::new(cumulative).set_alignment(CellAlignment::Right),
            Cell::new(net).set_alignment(CellAlignment::Right).fg(profit_color(net)),
        ]);
    }
    table
}

pub fn build_tips_table(tips: &[Tip]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Recommendation"]);
    for (index, tip) in tips.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(tip).fg(match tip {
                Tip::ReduceAirConditioning | Tip::SwitchToLedLighting | Tip::ConductEnergyAudit => {
                    Color::DarkYellow
                }
                Tip::InstallSolarPanels | Tip::EncourageEnergySaving => Color::Green,
                Tip::AirConditioningExcess(_) | Tip::LightingExcess(_) | Tip::LabExcess(_) => {
                    Color::Red
                }
            }),
        ]);
    }
    table
}
