use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Kilowatts, suffix: "kW", precision: 2);

implement_mul!(Kilowatts, Hours, KilowattHours);
