use std::{fs, path::PathBuf};

use clap::Parser;
use ecocampus::{
    core::usage::UsageInputs,
    prelude::*,
    quantity::{area::SquareFeet, currency::Rupees, energy::KilowattHours, time::Hours},
};

#[derive(Parser)]
pub struct UsageArgs {
    /// TOML file with the usage inputs. When set, the individual options are ignored.
    #[clap(long = "input", env = "USAGE_INPUT_PATH")]
    pub input_path: Option<PathBuf>,

    /// Daily air conditioning usage in hours.
    #[clap(long = "ac-hours", default_value = "6", env = "AC_HOURS")]
    pub ac_hours: Hours,

    /// Daily lighting usage in hours.
    #[clap(long = "light-hours", default_value = "8", env = "LIGHT_HOURS")]
    pub light_hours: Hours,

    /// Daily computer lab usage in hours.
    #[clap(long = "lab-hours", default_value = "6", env = "LAB_HOURS")]
    pub lab_hours: Hours,

    /// Number of computers in the labs.
    #[clap(long = "lab-computers", default_value = "0", env = "LAB_COMPUTERS")]
    pub lab_computers: u32,

    /// Number of rooms, zero disables the room-based scoring.
    #[clap(long, default_value = "1", env = "ROOMS")]
    pub rooms: u32,

    /// Monthly electricity bill in rupees.
    #[clap(long = "monthly-bill", default_value = "0", env = "MONTHLY_BILL")]
    pub monthly_bill: Rupees,

    /// Campus size in square feet.
    #[clap(long = "campus-size", default_value = "0", env = "CAMPUS_SIZE")]
    pub campus_size: SquareFeet,

    /// Monthly electricity units in kilowatt-hours.
    #[clap(long = "monthly-units", default_value = "0", env = "MONTHLY_UNITS")]
    pub monthly_units: KilowattHours,
}

impl UsageArgs {
    pub fn load(&self) -> Result<UsageInputs> {
        let Some(input_path) = &self.input_path else {
            return Ok(UsageInputs::builder()
                .ac_hours(self.ac_hours)
                .light_hours(self.light_hours)
                .lab_hours(self.lab_hours)
                .lab_computers(self.lab_computers)
                .rooms(self.rooms)
                .monthly_bill(self.monthly_bill)
                .campus_size(self.campus_size)
                .monthly_units(self.monthly_units)
                .build());
        };
        info!(input_path = %input_path.display(), "reading the usage inputs…");
        let contents = fs::read_to_string(input_path)
            .with_context(|| format!("failed to read `{}`", input_path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", input_path.display()))
    }
}
