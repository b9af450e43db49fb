use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Extract a four-digit year from a raw date-like value.
///
/// Handles full dates ("2019-03-01"), year-month ("2019-03") and bare
/// years ("2019") by taking the leading segment before the first `-`;
/// the segment must be exactly four digits. Anything else is
/// unresolvable.
pub fn extract_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let leading = match trimmed.split_once('-') {
        Some((head, _)) => head,
        None => trimmed,
    };

    if !YEAR_RE.is_match(leading) {
        return None;
    }
    leading.parse().ok()
}

/// An inclusive year window. The normalizer itself is range-agnostic;
/// callers supply whichever window applies to their path.
#[derive(Debug, Clone, Copy)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date() {
        assert_eq!(extract_year("2019-03-01"), Some(2019));
    }

    #[test]
    fn test_year_month() {
        assert_eq!(extract_year("2021-07"), Some(2021));
    }

    #[test]
    fn test_bare_year() {
        assert_eq!(extract_year("2015"), Some(2015));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(extract_year(" 2018-01-01 "), Some(2018));
    }

    #[test]
    fn test_unresolvable_shapes() {
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("March 2019"), None);
        assert_eq!(extract_year("19-03-01"), None);
        assert_eq!(extract_year("20190301"), None);
        assert_eq!(extract_year("n/a"), None);
        assert_eq!(extract_year("20x9-01"), None);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = YearRange::new(2010, 2025);
        assert!(range.contains(2010));
        assert!(range.contains(2025));
        assert!(!range.contains(2009));
        assert!(!range.contains(2026));
    }

    #[test]
    fn test_out_of_range_year_is_not_coerced() {
        let range = YearRange::new(2010, 2025);
        let year = extract_year("2027").unwrap();
        assert!(!range.contains(year));
    }

    #[test]
    fn test_range_iter() {
        let range = YearRange::new(2015, 2017);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![2015, 2016, 2017]);
    }
}
