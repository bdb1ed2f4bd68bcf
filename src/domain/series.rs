//! Resolved per-year numeric series.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::timeline::Timeline;

/// A fully populated series: one value per timeline year, no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSeries {
    name: String,
    values: IndexMap<String, Decimal>,
}

impl ResolvedSeries {
    /// Series of zeros over the timeline.
    pub fn zeros(name: impl Into<String>, timeline: &Timeline) -> Self {
        Self::broadcast(name, Decimal::ZERO, timeline)
    }

    /// Series repeating `value` for every year.
    pub fn broadcast(name: impl Into<String>, value: Decimal, timeline: &Timeline) -> Self {
        Self {
            name: name.into(),
            values: timeline.iter().map(|y| (y.to_string(), value)).collect(),
        }
    }

    /// Series computed year by year.
    pub fn from_fn(
        name: impl Into<String>,
        timeline: &Timeline,
        mut value: impl FnMut(&str) -> Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            values: timeline.iter().map(|y| (y.to_string(), value(y))).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same values under a different name.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Value for a year label.
    #[must_use]
    pub fn get(&self, year: &str) -> Option<Decimal> {
        self.values.get(year).copied()
    }

    /// `(year, value)` pairs in timeline order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.values.iter().map(|(y, v)| (y.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply `f` to every value.
    #[must_use]
    pub fn map(&self, name: impl Into<String>, f: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            name: name.into(),
            values: self.values.iter().map(|(y, v)| (y.clone(), f(*v))).collect(),
        }
    }

    /// Combine two series over the same years element-wise.
    ///
    /// `f` returns `None` on overflow, which fails the whole series.
    pub fn try_zip_with(
        &self,
        other: &Self,
        name: impl Into<String>,
        f: impl Fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> Result<Self, DomainError> {
        if !self.values.keys().eq(other.values.keys()) {
            return Err(DomainError::TimelineMismatch {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }

        let name = name.into();
        let values = self
            .values
            .iter()
            .zip(other.values.values())
            .map(|((y, a), b)| f(*a, *b).map(|v| (y.clone(), v)))
            .collect::<Option<IndexMap<_, _>>>()
            .ok_or_else(|| DomainError::Overflow {
                series: name.clone(),
            })?;

        Ok(Self { name, values })
    }

    /// Sum over all years.
    pub fn checked_total(&self) -> Result<Decimal, DomainError> {
        self.values
            .values()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
            .ok_or_else(|| DomainError::Overflow {
                series: self.name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn timeline() -> Timeline {
        Timeline::try_new(["2025", "2026", "2027"]).unwrap()
    }

    #[test]
    fn zeros_cover_every_year() {
        let series = ResolvedSeries::zeros("x", &timeline());
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|(_, v)| v.is_zero()));
    }

    #[test]
    fn zip_with_rejects_mismatched_years() {
        let a = ResolvedSeries::broadcast("a", dec!(1), &timeline());
        let b = ResolvedSeries::broadcast("b", dec!(1), &Timeline::try_new(["2025"]).unwrap());
        assert!(matches!(
            a.try_zip_with(&b, "c", Decimal::checked_add),
            Err(DomainError::TimelineMismatch { .. })
        ));
    }

    #[test]
    fn zip_with_and_total() {
        let timeline = timeline();
        let a = ResolvedSeries::from_fn("a", &timeline, |y| {
            if y == "2026" {
                dec!(2)
            } else {
                dec!(1)
            }
        });
        let b = ResolvedSeries::broadcast("b", dec!(10), &timeline);
        let product = a.try_zip_with(&b, "p", Decimal::checked_mul).unwrap();

        assert_eq!(product.name(), "p");
        assert_eq!(product.get("2026"), Some(dec!(20)));
        assert_eq!(product.checked_total(), Ok(dec!(40)));
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        let timeline = timeline();
        let a = ResolvedSeries::broadcast("a", Decimal::MAX, &timeline);
        let b = ResolvedSeries::broadcast("b", dec!(2), &timeline);

        assert_eq!(
            a.try_zip_with(&b, "p", Decimal::checked_mul),
            Err(DomainError::Overflow { series: "p".into() })
        );
        assert_eq!(
            a.checked_total(),
            Err(DomainError::Overflow { series: "a".into() })
        );
    }
}
