use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parse a `YYYY-MM-DD` publish date as it appears in post front matter.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
}

/// Format `published` relative to `today`, e.g. `June 14, 2023 (3mo ago)`.
///
/// The distance is not an elapsed duration: each calendar field is compared on its own, and the
/// largest unit with a positive difference wins. So December 31st reads as `1y ago` on
/// January 1st, and a date in the future reads as `Today`.
pub fn format_published(published: Date, today: Date) -> String {
    let years = today.year() - published.year();
    let months = i32::from(u8::from(today.month())) - i32::from(u8::from(published.month()));
    let days = i32::from(today.day()) - i32::from(published.day());

    let ago = if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else {
        "Today".to_string()
    };

    format!(
        "{} {}, {} ({})",
        published.month(),
        published.day(),
        published.year(),
        ago
    )
}

/// [`format_published()`] against the current date in UTC.
pub fn format_published_now(published: Date) -> String {
    format_published(published, OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn years() {
        assert_eq!(
            format_published(date!(2021 - 03 - 01), date!(2023 - 01 - 15)),
            "March 1, 2021 (2y ago)"
        );
    }

    #[test]
    fn year_boundary_counts_as_a_year() {
        assert_eq!(
            format_published(date!(2022 - 12 - 31), date!(2023 - 01 - 01)),
            "December 31, 2022 (1y ago)"
        );
    }

    #[test]
    fn months() {
        assert_eq!(
            format_published(date!(2023 - 01 - 20), date!(2023 - 03 - 05)),
            "January 20, 2023 (2mo ago)"
        );
        assert_eq!(
            format_published(date!(2023 - 03 - 28), date!(2023 - 04 - 02)),
            "March 28, 2023 (1mo ago)"
        );
    }

    #[test]
    fn days() {
        assert_eq!(
            format_published(date!(2023 - 03 - 01), date!(2023 - 03 - 05)),
            "March 1, 2023 (4d ago)"
        );
    }

    #[test]
    fn today_and_future() {
        assert_eq!(
            format_published(date!(2023 - 03 - 05), date!(2023 - 03 - 05)),
            "March 5, 2023 (Today)"
        );
        assert_eq!(
            format_published(date!(2023 - 08 - 10), date!(2023 - 03 - 05)),
            "August 10, 2023 (Today)"
        );
    }

    #[test]
    fn parses_front_matter_dates() {
        assert_eq!(parse_date("2023-06-14").unwrap(), date!(2023 - 06 - 14));
        assert_eq!(parse_date(" 2023-06-14\n").unwrap(), date!(2023 - 06 - 14));
        assert!(parse_date("June 14, 2023").is_err());
        assert!(parse_date("2023-02-30").is_err());
    }
}
