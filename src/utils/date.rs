use chrono::{DateTime, NaiveDate};

/// Fecha larga en inglés para mostrar: "Monday, March 18, 2024".
/// Acepta `YYYY-MM-DD` o RFC 3339; si no se puede interpretar se devuelve tal cual.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(day) => day.format("%A, %B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_day() {
        assert_eq!(format_date("2024-03-18"), "Monday, March 18, 2024");
        assert_eq!(format_date("2024-12-01"), "Sunday, December 1, 2024");
    }

    #[test]
    fn formats_timestamp_by_its_own_date() {
        assert_eq!(format_date("2024-02-29T23:30:00+02:00"), "Thursday, February 29, 2024");
    }

    #[test]
    fn leaves_garbage_alone() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date(""), "");
    }
}
