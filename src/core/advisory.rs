use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::{
    core::{
        efficiency::{IDEAL_AC_HOURS, IDEAL_LIGHT_HOURS},
        usage::UsageInputs,
    },
    quantity::{
        ratios::{Percentage, Points},
        time::Hours,
    },
};

pub const IDEAL_LAB_HOURS: Hours = Hours(6.0);

// Compared as plain `f64`, so that `NaN` never triggers a tip.
const AC_REDUCTION_SCORE: f64 = 70.0;
const LED_LIGHTING_WASTE: f64 = 15.0;
const ENERGY_AUDIT_SCORE: f64 = 50.0;

/// Single improvement tip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tip {
    ReduceAirConditioning,
    SwitchToLedLighting,
    ConductEnergyAudit,
    InstallSolarPanels,
    EncourageEnergySaving,

    /// Daily AC usage in excess of the benchmark.
    AirConditioningExcess(Hours),

    /// Daily lighting usage in excess of the benchmark.
    LightingExcess(Hours),

    /// Daily computer lab usage in excess of the benchmark.
    LabExcess(Hours),
}

impl Display for Tip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReduceAirConditioning => {
                write!(f, "Reduce AC usage by 1–2 hours daily to improve efficiency.")
            }
            Self::SwitchToLedLighting => {
                write!(f, "Switch to LED lighting to reduce energy waste.")
            }
            Self::ConductEnergyAudit => {
                write!(f, "Conduct an energy audit to identify major energy leaks.")
            }
            Self::InstallSolarPanels => {
                write!(f, "Consider installing solar panels for long-term cost savings.")
            }
            Self::EncourageEnergySaving => {
                write!(f, "Encourage students and staff to follow energy-saving practices.")
            }
            Self::AirConditioningExcess(excess) => write!(
                f,
                "Benchmark: reduce AC by {} hour(s) daily to reach the {}-hour ideal.",
                excess.round_to(2).0, IDEAL_AC_HOURS.0,
            ),
            Self::LightingExcess(excess) => write!(
                f,
                "Benchmark: reduce lighting by {} hour(s) daily to reach the {}-hour ideal.",
                excess.round_to(2).0, IDEAL_LIGHT_HOURS.0,
            ),
            Self::LabExcess(excess) => write!(
                f,
                "Benchmark: limit lab usage by {} hour(s) daily to reach the {}-hour ideal.",
                excess.round_to(2).0, IDEAL_LAB_HOURS.0,
            ),
        }
    }
}

impl Serialize for Tip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw daily usage to compare against the benchmarks, if known.
#[must_use]
#[derive(Copy, Clone, Debug, Default)]
pub struct ObservedHours {
    pub ac: Option<Hours>,
    pub lighting: Option<Hours>,
    pub lab: Option<Hours>,
}

impl ObservedHours {
    fn clamped(self) -> Self {
        Self {
            ac: self.ac.map(Hours::non_negative),
            lighting: self.lighting.map(Hours::non_negative),
            lab: self.lab.map(Hours::non_negative),
        }
    }
}

impl From<&UsageInputs> for ObservedHours {
    fn from(usage: &UsageInputs) -> Self {
        Self {
            ac: Some(usage.ac_hours),
            lighting: Some(usage.light_hours),
            lab: Some(usage.lab_hours),
        }
    }
}

/// Build the tips: score- and waste-based ones first, then the general ones,
/// and finally the benchmark comparisons.
#[must_use]
pub fn advise(score: Points, waste: Percentage, observed: ObservedHours) -> Vec<Tip> {
    let mut tips = Vec::new();
    if score.0 < AC_REDUCTION_SCORE {
        tips.push(Tip::ReduceAirConditioning);
    }
    if waste.0 > LED_LIGHTING_WASTE {
        tips.push(Tip::SwitchToLedLighting);
    }
    if score.0 < ENERGY_AUDIT_SCORE {
        tips.push(Tip::ConductEnergyAudit);
    }
    tips.push(Tip::InstallSolarPanels);
    tips.push(Tip::EncourageEnergySaving);
    let observed = observed.clamped();
    if let Some(excess) = observed.ac.and_then(|hours| hours.excess_over(IDEAL_AC_HOURS)) {
        tips.push(Tip::AirConditioningExcess(excess));
    }
    if let Some(excess) = observed.lighting.and_then(|hours| hours.excess_over(IDEAL_LIGHT_HOURS))
    {
        tips.push(Tip::LightingExcess(excess));
    }
    if let Some(excess) = observed.lab.and_then(|hours| hours.excess_over(IDEAL_LAB_HOURS)) {
        tips.push(Tip::LabExcess(excess));
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficient_campus() {
        let tips = advise(Points(80.0), Percentage(5.0), ObservedHours::default());
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);
    }

    #[test]
    fn test_wasteful_campus() {
        let observed = ObservedHours {
            ac: Some(Hours(9.0)),
            lighting: Some(Hours(10.0)),
            lab: Some(Hours(8.0)),
        };
        let tips = advise(Points(40.0), Percentage(20.0), observed);
        assert_eq!(
            tips,
            [
                Tip::ReduceAirConditioning,
                Tip::SwitchToLedLighting,
                Tip::ConductEnergyAudit,
                Tip::InstallSolarPanels,
                Tip::EncourageEnergySaving,
                Tip::AirConditioningExcess(Hours(3.0)),
                Tip::LightingExcess(Hours(2.0)),
                Tip::LabExcess(Hours(2.0)),
            ]
        );
        let messages: Vec<String> = tips.iter().map(ToString::to_string).collect();
        assert_eq!(messages[0], "Reduce AC usage by 1–2 hours daily to improve efficiency.");
        assert!(messages[5].contains("reduce AC by 3 hour(s)"), "{}", messages[5]);
        assert!(messages[6].contains("reduce lighting by 2 hour(s)"), "{}", messages[6]);
        assert!(messages[7].contains("limit lab usage by 2 hour(s)"), "{}", messages[7]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let tips = advise(Points(70.0), Percentage(15.0), ObservedHours::default());
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);

        let tips = advise(Points(50.0), Percentage(50.0), ObservedHours::default());
        assert_eq!(
            tips,
            [
                Tip::ReduceAirConditioning,
                Tip::SwitchToLedLighting,
                Tip::InstallSolarPanels,
                Tip::EncourageEnergySaving,
            ]
        );
    }

    #[test]
    fn test_within_benchmarks() {
        let observed = ObservedHours {
            ac: Some(Hours(6.0)),
            lighting: Some(Hours(8.0)),
            lab: Some(Hours(0.0)),
        };
        let tips = advise(Points(90.0), Percentage(10.0), observed);
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);
    }

    #[test]
    fn test_nan_inputs() {
        let observed = ObservedHours {
            ac: Some(Hours(f64::NAN)),
            lighting: Some(Hours(f64::NAN)),
            lab: Some(Hours(f64::NAN)),
        };
        let tips = advise(Points(90.0), Percentage(f64::NAN), observed);
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);

        let tips = advise(Points(f64::NAN), Percentage(10.0), ObservedHours::default());
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);
    }

    #[test]
    fn test_negative_hours() {
        let observed = ObservedHours { ac: Some(Hours(-9.0)), ..ObservedHours::default() };
        let tips = advise(Points(90.0), Percentage(10.0), observed);
        assert_eq!(tips, [Tip::InstallSolarPanels, Tip::EncourageEnergySaving]);
    }

    #[test]
    fn test_excess_is_rounded() {
        let observed = ObservedHours { ac: Some(Hours(6.1)), ..ObservedHours::default() };
        let tips = advise(Points(90.0), Percentage(10.0), observed);
        assert_eq!(
            tips.last().unwrap().to_string(),
            "Benchmark: reduce AC by 0.1 hour(s) daily to reach the 6-hour ideal."
        );
    }

    #[test]
    fn test_fractional_excess() {
        let observed = ObservedHours { lighting: Some(Hours(9.5)), ..ObservedHours::default() };
        let tips = advise(Points(90.0), Percentage(10.0), observed);
        assert_eq!(
            tips.last().unwrap().to_string(),
            "Benchmark: reduce lighting by 1.5 hour(s) daily to reach the 8-hour ideal."
        );
    }
}
