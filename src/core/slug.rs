//! Article slugs: `slugify(judul) + "-" + ddmmyyyy`

use chrono::NaiveDate;
use slug::slugify;

use crate::utils::constants::SLUG_DATE_FORMAT;

/// Slug for a title written on `date`.
///
/// `slugify` lowercases, transliterates non-ASCII letters and collapses every
/// run of other characters into a single dash. An empty title still yields
/// the date suffix.
pub fn artikel_slug(judul: &str, date: NaiveDate) -> String {
    format!("{}-{}", slugify(judul), date.format(SLUG_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_slug_format() {
        assert_eq!(
            artikel_slug("Belajar Rust Itu Seru!", date()),
            "belajar-rust-itu-seru-16102026"
        );
    }

    #[test]
    fn test_slug_collapses_punctuation() {
        assert_eq!(
            artikel_slug("  Tips & Trik:  SEO -- 2026 ", date()),
            "tips-trik-seo-2026-16102026"
        );
    }

    #[test]
    fn test_slug_transliterates() {
        assert_eq!(artikel_slug("Café Déjà Vu", date()), "cafe-deja-vu-16102026");
    }

    #[test]
    fn test_slug_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(artikel_slug("Halo", date), "halo-07032025");
    }

    #[test]
    fn test_empty_title_keeps_date() {
        assert_eq!(artikel_slug("", date()), "-16102026");
    }
}
