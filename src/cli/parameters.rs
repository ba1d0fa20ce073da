use clap::Parser;
use ecocampus::{
    core::{efficiency::ScoringParameters, solar::SolarParameters},
    quantity::{currency::Rupees, rate::RupeesPerKilowattHour},
};

#[derive(Copy, Clone, Parser)]
pub struct ScoringArgs {
    /// Monthly bill at which the bill score drops to zero.
    #[clap(long = "max-bill", default_value = "500000", env = "MAX_BILL")]
    pub max_bill: Rupees,
}

impl From<ScoringArgs> for ScoringParameters {
    fn from(args: ScoringArgs) -> Self {
        Self { max_bill: args.max_bill }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct SolarParametersArgs {
    /// Net metering sell rate per surplus unit.
    #[clap(long = "sell-rate", default_value = "19", env = "SELL_RATE")]
    pub sell_rate: RupeesPerKilowattHour,

    /// Yearly maintenance cost as a fraction of the installation cost.
    #[clap(long = "maintenance-fraction", default_value = "0.02", env = "MAINTENANCE_FRACTION")]
    pub maintenance_fraction: f64,
}

impl From<SolarParametersArgs> for SolarParameters {
    fn from(args: SolarParametersArgs) -> Self {
        Self { sell_rate: args.sell_rate, maintenance_fraction: args.maintenance_fraction }
    }
}
