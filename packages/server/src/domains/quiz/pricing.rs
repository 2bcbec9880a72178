//! Package pricing.
//!
//! Each (question count, difficulty) package has a price band; a quote is
//! drawn uniformly from the band. The RNG is injected so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::models::DifficultyLevel;

/// Price band in dollars, `low` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Band used for packages outside the catalogue.
pub const FALLBACK_RANGE: PriceRange = PriceRange::new(10.0, 50.0);

/// A drawn price together with the band it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub calculated_price: f64,
    pub low: f64,
    pub high: f64,
}

/// Look up the price band for a package.
pub fn price_range(number_of_questions: u32, difficulty: DifficultyLevel) -> PriceRange {
    use DifficultyLevel::*;

    match (number_of_questions, difficulty) {
        (10, Easy) => PriceRange::new(8.0, 15.0),
        (10, Medium) => PriceRange::new(12.0, 22.0),
        (10, Hard) => PriceRange::new(18.0, 30.0),
        (20, Easy) => PriceRange::new(15.0, 28.0),
        (20, Medium) => PriceRange::new(22.0, 40.0),
        (20, Hard) => PriceRange::new(35.0, 55.0),
        (30, Easy) => PriceRange::new(20.0, 38.0),
        (30, Medium) => PriceRange::new(32.0, 58.0),
        (30, Hard) => PriceRange::new(48.0, 75.0),
        _ => FALLBACK_RANGE,
    }
}

/// Draw a price for a package, rounded to cents.
pub fn quote<R: Rng + ?Sized>(
    number_of_questions: u32,
    difficulty: DifficultyLevel,
    rng: &mut R,
) -> PriceQuote {
    let range = price_range(number_of_questions, difficulty);
    let raw = rng.gen_range(range.low..range.high);

    PriceQuote {
        calculated_price: round_cents(raw),
        low: range.low,
        high: range.high,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalogue_ranges() {
        assert_eq!(
            price_range(10, DifficultyLevel::Easy),
            PriceRange::new(8.0, 15.0)
        );
        assert_eq!(
            price_range(20, DifficultyLevel::Medium),
            PriceRange::new(22.0, 40.0)
        );
        assert_eq!(
            price_range(30, DifficultyLevel::Hard),
            PriceRange::new(48.0, 75.0)
        );
    }

    #[test]
    fn test_unknown_package_uses_fallback() {
        assert_eq!(price_range(15, DifficultyLevel::Easy), FALLBACK_RANGE);
        assert_eq!(price_range(0, DifficultyLevel::Hard), FALLBACK_RANGE);
    }

    #[test]
    fn test_quote_within_band_and_rounded() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let quote = quote(20, DifficultyLevel::Hard, &mut rng);

            assert!(quote.calculated_price >= 35.0);
            assert!(quote.calculated_price <= 55.0);
            let cents = quote.calculated_price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_seeded_quotes_repeat() {
        let a = quote(10, DifficultyLevel::Medium, &mut StdRng::seed_from_u64(42));
        let b = quote(10, DifficultyLevel::Medium, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
        assert_eq!(a.low, 12.0);
        assert_eq!(a.high, 22.0);
    }

    #[test]
    fn test_quote_wire_format() {
        let quote = PriceQuote {
            calculated_price: 12.5,
            low: 8.0,
            high: 15.0,
        };

        let json = serde_json::to_value(quote).unwrap();

        assert_eq!(json["calculatedPrice"], 12.5);
        assert_eq!(json["low"], 8.0);
    }
}
