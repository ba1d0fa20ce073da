#[macro_use]
mod macros;

pub mod area;
pub mod currency;
pub mod energy;
pub mod mass;
pub mod power;
pub mod rate;
pub mod ratios;
pub mod time;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::quantity::{energy::KilowattHours, ratios::Points, time::Hours};

    #[test]
    fn test_round_to() {
        assert_abs_diff_eq!(KilowattHours(3588.004_9).round_to(2).0, 3588.0);
        assert_abs_diff_eq!(KilowattHours(0.001_5).round_to(3).0, 0.002);
    }

    #[test]
    #[expect(clippy::float_cmp)]
    fn test_non_negative() {
        assert_eq!(Hours(-3.0).non_negative().0, 0.0);
        assert_eq!(Hours(f64::NAN).non_negative().0, 0.0);
        assert_eq!(Hours(2.5).non_negative().0, 2.5);
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Points(150.0).clamp(Points::ZERO, Points::MAX), Points::MAX);
        assert_eq!(Points(-5.0).clamp(Points::ZERO, Points::MAX), Points::ZERO);
        assert!(Hours(6.0) < Hours(6.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(3900.0).to_string(), "3900.00 kWh");
        assert_eq!(format!("{:.0}", KilowattHours(3900.4)), "3900 kWh");
        assert_eq!(format!("{:?}", Hours(9.0)), "9.0h");
    }
}
