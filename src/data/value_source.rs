use chrono::NaiveDate;
use rand::Rng;
use std::ops::Range;

/// Supplies one reading per day when a series is built.
pub trait ValueSource {
    fn sample(&mut self, date: NaiveDate) -> f64;
}

/// Closures make handy deterministic sources in tests and tools.
impl<F> ValueSource for F
where
    F: FnMut(NaiveDate) -> f64,
{
    fn sample(&mut self, date: NaiveDate) -> f64 {
        self(date)
    }
}

/// Uniform whole-number reading in a half-open range, independent of the date.
pub struct UniformDailySource<R: Rng> {
    rng: R,
    range: Range<u32>,
}

impl<R: Rng> UniformDailySource<R> {
    pub fn new(rng: R, range: Range<u32>) -> Self {
        Self { rng, range }
    }
}

impl<R: Rng> ValueSource for UniformDailySource<R> {
    fn sample(&mut self, _date: NaiveDate) -> f64 {
        if self.range.is_empty() {
            return f64::from(self.range.start);
        }
        f64::from(self.rng.gen_range(self.range.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uniform_source_stays_in_range() {
        let mut source = UniformDailySource::new(StdRng::seed_from_u64(7), 800..1500);
        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        for _ in 0..1_000 {
            let value = source.sample(day);
            assert!((800.0..1500.0).contains(&value), "{value} out of range");
            assert_eq!(value.fract(), 0.0, "readings are whole numbers");
        }
    }

    #[test]
    fn test_empty_range_yields_its_start() {
        let mut source = UniformDailySource::new(StdRng::seed_from_u64(1), 5..5);
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(source.sample(day), 5.0);
    }

    #[test]
    fn test_closure_is_a_source() {
        let mut source = |date: NaiveDate| f64::from(chrono::Datelike::day(&date));
        let day = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        assert_eq!(source.sample(day), 17.0);
    }
}
