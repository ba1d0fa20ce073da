quantity!(Hours, suffix: "h", precision: 1);
quantity!(Years, suffix: "years", precision: 2);

impl Hours {
    /// Excess over the benchmark, or [`None`] when within it.
    pub fn excess_over(self, benchmark: Self) -> Option<Self> {
        (self.0 > benchmark.0).then_some(self - benchmark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excess_over() {
        assert_eq!(Hours(9.0).excess_over(Hours(6.0)), Some(Hours(3.0)));
        assert_eq!(Hours(6.0).excess_over(Hours(6.0)), None);
        assert_eq!(Hours(2.0).excess_over(Hours(6.0)), None);
        assert_eq!(Hours(f64::NAN).excess_over(Hours(6.0)), None);
    }
}
