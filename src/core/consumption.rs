use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::usage::UsageInputs,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

pub const DAYS_PER_MONTH: f64 = 30.0;

const AC_POWER_PER_ROOM: Kilowatts = Kilowatts(1.5);
const LIGHTING_POWER_PER_ROOM: Kilowatts = Kilowatts(0.5);
const POWER_PER_LAB_COMPUTER: Kilowatts = Kilowatts(0.2);

/// Share of the billed units attributed to everything else.
const OTHER_APPLIANCES_SHARE: f64 = 0.15;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Appliance {
    AirConditioning,
    Lighting,
    ComputerLabs,
    Other,
}

impl Display for Appliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirConditioning => write!(f, "AC"),
            Self::Lighting => write!(f, "Lights"),
            Self::ComputerLabs => write!(f, "Computer Labs"),
            Self::Other => write!(f, "Other Appliances"),
        }
    }
}

/// Estimated monthly energy use by appliance group, based on standard power ratings.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct MonthlyConsumption {
    pub air_conditioning: KilowattHours,
    pub lighting: KilowattHours,
    pub computer_labs: KilowattHours,
    pub other: KilowattHours,
}

impl MonthlyConsumption {
    pub fn estimate(usage: &UsageInputs) -> Self {
        let usage = usage.clamped();
        let rooms = f64::from(usage.rooms);
        let lab_computers = f64::from(usage.lab_computers);
        Self {
            air_conditioning: AC_POWER_PER_ROOM * rooms * usage.ac_hours * DAYS_PER_MONTH,
            lighting: LIGHTING_POWER_PER_ROOM * rooms * usage.light_hours * DAYS_PER_MONTH,
            computer_labs: POWER_PER_LAB_COMPUTER
                * lab_computers
                * usage.lab_hours
                * DAYS_PER_MONTH,
            other: if usage.monthly_units > KilowattHours::ZERO {
                usage.monthly_units * OTHER_APPLIANCES_SHARE
            } else {
                KilowattHours::ZERO
            },
        }
    }

    /// Air conditioning, lighting, and computer labs.
    pub fn appliances(&self) -> KilowattHours {
        self.air_conditioning + self.lighting + self.computer_labs
    }

    pub fn total(&self) -> KilowattHours {
        self.appliances() + self.other
    }

    pub const fn breakdown(&self) -> [(Appliance, KilowattHours); 4] {
        [
            (Appliance::AirConditioning, self.air_conditioning),
            (Appliance::Lighting, self.lighting),
            (Appliance::ComputerLabs, self.computer_labs),
            (Appliance::Other, self.other),
        ]
    }

    /// Fraction of the total per appliance group, or [`None`] if nothing is consumed.
    pub fn shares(&self) -> Option<[(Appliance, f64); 4]> {
        let total = self.total();
        if total <= KilowattHours::ZERO {
            return None;
        }
        Some(self.breakdown().map(|(appliance, energy)| (appliance, energy / total)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{area::SquareFeet, currency::Rupees, time::Hours};

    fn usage() -> UsageInputs {
        UsageInputs::builder()
            .ac_hours(Hours(6.0))
            .light_hours(Hours(8.0))
            .lab_hours(Hours(5.0))
            .lab_computers(40)
            .rooms(10)
            .monthly_bill(Rupees(200_000.0))
            .campus_size(SquareFeet(10_000.0))
            .monthly_units(KilowattHours(4000.0))
            .build()
    }

    #[test]
    fn test_estimate() {
        let consumption = MonthlyConsumption::estimate(&usage());
        assert_abs_diff_eq!(consumption.air_conditioning.0, 2700.0, epsilon = 1e-9);
        assert_abs_diff_eq!(consumption.lighting.0, 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(consumption.computer_labs.0, 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(consumption.other.0, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(consumption.appliances().0, 5100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(consumption.total().0, 5700.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shares() {
        let shares = MonthlyConsumption::estimate(&usage()).shares().unwrap();
        assert_eq!(shares[0].0, Appliance::AirConditioning);
        assert_abs_diff_eq!(shares[0].1, 2700.0 / 5700.0, epsilon = 1e-12);
        let total = shares.iter().map(|(_, share)| share).sum::<f64>();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nothing_consumed() {
        let usage = UsageInputs {
            rooms: 0,
            lab_computers: 0,
            monthly_units: KilowattHours::ZERO,
            ..usage()
        };
        let consumption = MonthlyConsumption::estimate(&usage);
        assert_eq!(consumption.total(), KilowattHours::ZERO);
        assert!(consumption.shares().is_none());
    }
}
