quantity!(
    /// Pakistani rupees.
    Rupees, suffix: "PKR", precision: 2
);
