/// Closed range of sample values `<low;high>`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ValueRange {
    pub low: f32,
    pub high: f32,
}

impl ValueRange {
    pub fn new(low: f32, high: f32) -> ValueRange {
        ValueRange { low, high }
    }

    /// Smallest range holding every sample.
    /// `None` if there are no samples.
    pub fn from_samples(samples: impl IntoIterator<Item = i16>) -> Option<ValueRange> {
        let mut samples = samples.into_iter();
        let first: f32 = samples.next()?.into();

        let mut range = ValueRange::new(first, first);
        for sample in samples {
            range.extend(sample.into());
        }
        Some(range)
    }

    fn extend(&mut self, val: f32) {
        self.low = self.low.min(val);
        self.high = self.high.max(val);
    }

    /// Maps `val` from `<low;high>` to `<0;1>`.
    /// Values under `low` clamp to zero, values over `high` are not clamped.
    /// Flat range maps everything to zero.
    pub fn normalize(&self, val: f32) -> f32 {
        let span = self.high - self.low;
        if span <= 0.0 {
            return 0.0;
        }
        f32::max((val - self.low) / span, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_samples() {
        let range = ValueRange::from_samples([-1024, 2, 4, 900, 5, 0]);
        assert_eq!(range, Some(ValueRange::new(-1024.0, 900.0)));

        let single = ValueRange::from_samples([7]);
        assert_eq!(single, Some(ValueRange::new(7.0, 7.0)));

        assert_eq!(ValueRange::from_samples(Vec::new()), None);
    }

    #[test]
    fn normalize() {
        let range = ValueRange::new(-1024.0, 900.0);

        assert_eq!(range.normalize(-1024.0), 0.0);
        assert_eq!(range.normalize(900.0), 1.0);
        assert_eq!(range.normalize(-2000.0), 0.0);
        assert!((range.normalize(-62.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn flat_range_is_zero() {
        let range = ValueRange::new(7.0, 7.0);

        assert_eq!(range.normalize(7.0), 0.0);
        assert_eq!(range.normalize(100.0), 0.0);
    }
}
