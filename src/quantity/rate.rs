use crate::quantity::{currency::Rupees, energy::KilowattHours};

quantity!(
    /// Rupees per kilowatt-hour, for example the net metering sell rate.
    RupeesPerKilowattHour, suffix: "PKR/kWh", precision: 2
);

implement_mul!(KilowattHours, RupeesPerKilowattHour, Rupees);
