//! Date and time strategies
//!
//! std time types are always ordered. With the `chrono` feature the chrono
//! date, time and datetime types are ordered as well; `Option` of any of them
//! is the nullable variant.

use std::time::{Duration, Instant, SystemTime};

use super::Orderable;

macro_rules! impl_ordered_time {
    ([$($ty:ty),+]) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }
        )+
    };
}

impl_ordered_time!([Duration, Instant, SystemTime]);

#[cfg(feature = "chrono")]
impl_ordered_time!([
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::TimeDelta
]);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Orderable for chrono::DateTime<Tz> {
    #[inline]
    fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_duration_ordering() {
        let short = Duration::from_millis(10);
        let long = Duration::from_secs(1);
        assert_eq!(short.compare(&long), Some(Ordering::Less));
    }

    #[test]
    fn test_system_time_ordering() {
        let earlier = SystemTime::UNIX_EPOCH;
        let later = earlier + Duration::from_secs(60);
        assert_eq!(later.compare(&earlier), Some(Ordering::Greater));
        assert_eq!(Some(later).compare(&None), None);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_ordering() {
        let a = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);
        let b = chrono::NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        let utc = chrono::DateTime::from_timestamp(0, 0);
        assert_eq!(utc.compare(&utc), Some(Ordering::Equal));
    }
}
