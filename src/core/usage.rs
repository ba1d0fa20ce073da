use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{
    area::SquareFeet,
    currency::Rupees,
    energy::KilowattHours,
    time::Hours,
};

/// Snapshot of the campus usage as entered by the user.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Builder)]
pub struct UsageInputs {
    /// Daily air conditioning usage.
    pub ac_hours: Hours,

    /// Daily lighting usage.
    pub light_hours: Hours,

    /// Daily computer lab usage.
    #[serde(default)]
    #[builder(default)]
    pub lab_hours: Hours,

    #[serde(default)]
    #[builder(default)]
    pub lab_computers: u32,

    /// Zero rooms means there is no room-based billing at all.
    pub rooms: u32,

    pub monthly_bill: Rupees,

    pub campus_size: SquareFeet,

    /// Energy units billed per month.
    pub monthly_units: KilowattHours,
}

impl UsageInputs {
    /// Clamp all the real-valued fields to zero from below.
    pub fn clamped(self) -> Self {
        Self {
            ac_hours: self.ac_hours.non_negative(),
            light_hours: self.light_hours.non_negative(),
            lab_hours: self.lab_hours.non_negative(),
            monthly_bill: self.monthly_bill.non_negative(),
            campus_size: self.campus_size.non_negative(),
            monthly_units: self.monthly_units.non_negative(),
            ..self
        }
    }
}
