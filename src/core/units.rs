// src/core/units.rs
// Imperial → metric conversion and numeric parsing for profile fields.
// Every function is total: anything missing, "--", or non-numeric is `None`.

use super::sanitize::is_placeholder;

const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;
const KG_PER_LB: f64 = 0.453592;

/// Round half away from zero to one decimal.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn usable(raw: &str) -> Option<&str> {
    let t = raw.trim();
    if t.is_empty() || is_placeholder(t) { None } else { Some(t) }
}

/// `6' 2"` → `188.0`
pub fn height_cm(raw: &str) -> Option<f64> {
    let t = usable(raw)?.replace('"', "");
    let (feet, inches) = t.split_once('\'')?;
    let feet: u32 = feet.trim().parse().ok()?;
    let inches: u32 = inches.trim().parse().ok()?;
    Some(round1(feet as f64 * CM_PER_FOOT + inches as f64 * CM_PER_INCH))
}

/// `185 lbs.` → `83.9`
pub fn weight_kg(raw: &str) -> Option<f64> {
    let t = usable(raw)?.replace("lbs.", "");
    let lbs: f64 = t.trim().parse().ok()?;
    Some(round1(lbs * KG_PER_LB))
}

/// `74"` → `188.0`
pub fn reach_cm(raw: &str) -> Option<f64> {
    let t = usable(raw)?.replace('"', "");
    let inches: f64 = t.trim().parse().ok()?;
    Some(round1(inches * CM_PER_INCH))
}

/// `65%` → `65`
pub fn percent(raw: &str) -> Option<i64> {
    let t = usable(raw)?;
    t.trim_end_matches('%').trim().parse().ok()
}

/// `4.52` → `4.52`. `NaN` and `inf` are not rates.
pub fn rate(raw: &str) -> Option<f64> {
    usable(raw)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Birth year is the token after the last comma: `Jul 13, 1978` → 1978.
pub fn age_from_dob(raw: &str, current_year: i32) -> Option<i64> {
    let t = usable(raw)?;
    let (_, year) = t.rsplit_once(',')?;
    let year: i32 = year.trim().parse().ok()?;
    Some((current_year - year) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height() {
        assert_eq!(height_cm("6' 2\""), Some(188.0));
        assert_eq!(height_cm("5'11\""), Some(180.3));
        assert_eq!(height_cm("--"), None);
        assert_eq!(height_cm(""), None);
        assert_eq!(height_cm("tall"), None);
    }

    #[test]
    fn weight() {
        assert_eq!(weight_kg("185 lbs."), Some(83.9));
        assert_eq!(weight_kg("155lbs."), Some(70.3));
        assert_eq!(weight_kg("--"), None);
    }

    #[test]
    fn reach() {
        assert_eq!(reach_cm("74\""), Some(188.0));
        assert_eq!(reach_cm("--"), None);
        assert_eq!(reach_cm("long\""), None);
    }

    #[test]
    fn percents_and_rates() {
        assert_eq!(percent("65%"), Some(65));
        assert_eq!(percent("0%"), Some(0));
        assert_eq!(percent("--"), None);
        assert_eq!(percent("n/a"), None);
        assert_eq!(rate("4.52"), Some(4.52));
        assert_eq!(rate("--"), None);
        assert_eq!(rate("NaN"), None);
        assert_eq!(rate("inf"), None);
        assert_eq!(rate("-infinity"), None);
    }

    #[test]
    fn age() {
        assert_eq!(age_from_dob("Jan 01, 1990", 2024), Some(34));
        assert_eq!(age_from_dob("--", 2024), None);
        assert_eq!(age_from_dob("1990", 2024), None);
    }
}
