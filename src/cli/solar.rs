use clap::Parser;
use ecocampus::{
    core::solar::SolarEstimate,
    prelude::*,
    quantity::{area::SquareFeet, currency::Rupees, energy::KilowattHours},
};
use serde::Serialize;

use crate::{
    cli::{OutputFormat, parameters::SolarParametersArgs},
    tables::{build_projection_table, build_solar_table},
};

#[derive(Parser)]
pub struct SolarArgs {
    /// Campus size in square feet.
    #[clap(long = "campus-size", env = "CAMPUS_SIZE")]
    campus_size: SquareFeet,

    /// Monthly electricity bill in rupees.
    #[clap(long = "monthly-bill", env = "MONTHLY_BILL")]
    monthly_bill: Rupees,

    /// Monthly electricity units in kilowatt-hours.
    #[clap(long = "monthly-units", default_value = "0", env = "MONTHLY_UNITS")]
    monthly_units: KilowattHours,

    #[clap(flatten)]
    parameters: SolarParametersArgs,

    /// Number of years to project the cumulative benefit for.
    #[clap(long = "projection-years", default_value = "10", env = "PROJECTION_YEARS")]
    n_years: u32,

    #[clap(long, value_enum, default_value = "table", env = "OUTPUT_FORMAT")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    estimate: &'a SolarEstimate,
    projection: Vec<(u32, Rupees)>,
}

impl SolarArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let estimate = SolarEstimate::calculate(
            self.campus_size,
            self.monthly_bill,
            self.monthly_units,
            self.parameters.into(),
        );
        info!(
            %estimate.capacity,
            %estimate.yearly_benefit,
            ?estimate.payback,
            %estimate.recommendation,
            "estimated",
        );

        match self.format {
            OutputFormat::Json => {
                let report =
                    Report { estimate: &estimate, projection: estimate.projection(self.n_years) };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Table => {
                println!("{}", build_solar_table(&estimate));
                println!("{}", build_projection_table(&estimate, self.n_years));
            }
        }
        Ok(())
    }
}
