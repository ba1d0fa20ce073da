use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::usage::UsageInputs,
    quantity::{currency::Rupees, ratios::Points, time::Hours},
};

pub const IDEAL_AC_HOURS: Hours = Hours(6.0);
pub const IDEAL_LIGHT_HOURS: Hours = Hours(8.0);

const AC_PENALTY_PER_HOUR: f64 = 8.0;
const LIGHT_PENALTY_PER_HOUR: f64 = 5.0;

/// Monthly bill per room at which the room score drops to zero.
const MAX_BILL_PER_ROOM: Rupees = Rupees(10_000.0);

const LAB_PENALTY_PER_COMPUTER_HOUR: f64 = 0.5;

const AC_WEIGHT: f64 = 0.30;
const LIGHT_WEIGHT: f64 = 0.20;
const BILL_WEIGHT: f64 = 0.20;
const ROOM_WEIGHT: f64 = 0.20;
const LAB_WEIGHT: f64 = 0.10;

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ScoringParameters {
    /// Monthly bill at which the bill score drops to zero.
    pub max_bill: Rupees,
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self { max_bill: Rupees(500_000.0) }
    }
}

/// Weighted efficiency score along with its components.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub final_score: Points,
    pub ac_score: Points,
    pub light_score: Points,
    pub bill_score: Points,
    pub room_score: Points,
    pub lab_score: Points,
}

impl ScoreBreakdown {
    pub fn calculate(usage: &UsageInputs, parameters: ScoringParameters) -> Self {
        let usage = usage.clamped();
        let ac_score = benchmark_score(usage.ac_hours, IDEAL_AC_HOURS, AC_PENALTY_PER_HOUR);
        let light_score =
            benchmark_score(usage.light_hours, IDEAL_LIGHT_HOURS, LIGHT_PENALTY_PER_HOUR);
        let bill_score = bill_score(usage.monthly_bill, parameters.max_bill);
        let room_score = room_score(usage.monthly_bill, usage.rooms);
        let lab_score = lab_score(usage.lab_hours, usage.lab_computers);
        let final_score = (ac_score * AC_WEIGHT
            + light_score * LIGHT_WEIGHT
            + bill_score * BILL_WEIGHT
            + room_score * ROOM_WEIGHT
            + lab_score * LAB_WEIGHT)
            .bounded()
            .round_to(2);
        Self { final_score, ac_score, light_score, bill_score, room_score, lab_score }
    }
}

/// Flat penalty per hour above the ideal, no bonus below it.
fn benchmark_score(hours: Hours, ideal: Hours, penalty_per_hour: f64) -> Points {
    Points(100.0 - ((hours - ideal).0 * penalty_per_hour).max(0.0)).bounded()
}

fn bill_score(monthly_bill: Rupees, max_bill: Rupees) -> Points {
    let max_bill = max_bill.max(Rupees(1.0));
    Points(100.0 - (monthly_bill / max_bill) * 100.0).bounded()
}

fn room_score(monthly_bill: Rupees, rooms: u32) -> Points {
    if rooms == 0 {
        return Points::ZERO;
    }
    let bill_per_room = monthly_bill / f64::from(rooms);
    Points(100.0 - (bill_per_room / MAX_BILL_PER_ROOM) * 100.0).bounded()
}

fn lab_score(lab_hours: Hours, lab_computers: u32) -> Points {
    Points(100.0 - lab_hours.0 * f64::from(lab_computers) * LAB_PENALTY_PER_COMPUTER_HOUR)
        .bounded()
}

/// Badge shown next to the score.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum EcoStatus {
    GreenChampion,
    Improving,
    NeedsImprovement,
}

impl From<Points> for EcoStatus {
    fn from(score: Points) -> Self {
        if score >= Points(80.0) {
            Self::GreenChampion
        } else if score >= Points(60.0) {
            Self::Improving
        } else {
            Self::NeedsImprovement
        }
    }
}

impl Display for EcoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreenChampion => write!(f, "Green Champion – Excellent Energy Management!"),
            Self::Improving => write!(f, "Improving – Some optimizations needed."),
            Self::NeedsImprovement => write!(f, "Needs Improvement – High Energy Waste Detected."),
        }
    }
}
