use crate::quantity::ratios::{Percentage, Points};

/// Energy waste as the complement of the efficiency score.
pub fn waste(score: Points) -> Percentage {
    Percentage(100.0 - score.bounded().0).round_to(2)
}
