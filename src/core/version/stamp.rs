// ─── Package Version Stamp ───
// Date based package versions: `YYYYMMDD.N`, N counting builds of the day.

use chrono::{Local, NaiveDate};

use crate::core::error::{ProfileError, ProfileResult};

/// Next package version after `prev`, for builds made on `today`.
///
/// A new day (or no previous version) starts at `.0`; another build on
/// the same day bumps the counter.
pub fn next_package_version(prev: Option<&str>, today: NaiveDate) -> ProfileResult<String> {
    let day = today.format("%Y%m%d").to_string();

    let build = match prev.map(|p| p.split_once('.').unwrap_or((p, ""))) {
        Some((prev_day, minor)) if prev_day == day => {
            if minor.is_empty() {
                0
            } else {
                minor
                    .parse::<u32>()
                    .map_err(|_| ProfileError::InvalidPackageVersion(prev.unwrap_or_default().to_string()))?
                    + 1
            }
        }
        _ => 0,
    };

    Ok(format!("{}.{}", day, build))
}

/// [`next_package_version`] for the local current date.
pub fn next_package_version_now(prev: Option<&str>) -> ProfileResult<String> {
    next_package_version(prev, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn first_version_of_the_day() {
        assert_eq!(next_package_version(None, day()).unwrap(), "20240309.0");
        assert_eq!(
            next_package_version(Some("20240308.4"), day()).unwrap(),
            "20240309.0"
        );
    }

    #[test]
    fn same_day_increments() {
        assert_eq!(
            next_package_version(Some("20240309.0"), day()).unwrap(),
            "20240309.1"
        );
        assert_eq!(
            next_package_version(Some("20240309.9"), day()).unwrap(),
            "20240309.10"
        );
        assert_eq!(next_package_version(Some("20240309"), day()).unwrap(), "20240309.0");
    }

    #[test]
    fn bad_minor_is_rejected() {
        assert!(matches!(
            next_package_version(Some("20240309.x"), day()),
            Err(ProfileError::InvalidPackageVersion(v)) if v == "20240309.x"
        ));
    }
}
