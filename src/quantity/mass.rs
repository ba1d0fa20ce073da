use crate::quantity::energy::KilowattHours;

quantity!(
    /// Kilograms of CO₂.
    Kilograms, suffix: "kg", precision: 2
);

quantity!(
    /// Metric tonnes of CO₂.
    Tonnes, suffix: "t", precision: 3
);

quantity!(
    /// Grid emission factor.
    KilogramsPerKilowattHour, suffix: "kg/kWh", precision: 2
);

implement_mul!(KilowattHours, KilogramsPerKilowattHour, Kilograms);

impl From<Kilograms> for Tonnes {
    fn from(kilograms: Kilograms) -> Self {
        Self(kilograms.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_emission_factor() {
        let kilograms = KilowattHours(3900.0) * KilogramsPerKilowattHour(0.92);
        assert_abs_diff_eq!(kilograms.0, 3588.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Tonnes::from(kilograms).0, 3.588, epsilon = 1e-12);
    }
}
