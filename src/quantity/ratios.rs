quantity!(
    /// Score points on the `0..=100` scale.
    Points, suffix: "/ 100", precision: 2
);

quantity!(Percentage, suffix: "%", precision: 2);

impl Points {
    pub const MAX: Self = Self(100.0);

    /// Clamp into `0..=100`, treating `NaN` as zero.
    pub fn bounded(self) -> Self {
        self.non_negative().min(Self::MAX)
    }
}

impl Percentage {
    /// Convert the percentage into a ratio, so that `100%` is `1.0`.
    pub const fn to_ratio(self) -> f64 {
        0.01 * self.0
    }
}
