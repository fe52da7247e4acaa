use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;
use unicode_casefold::UnicodeCaseFold;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// A cell value as seen by the sort comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    /// ISO `yyyy-mm-dd`, ordered lexically.
    Date(String),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

/// Case-insensitive, locale-aware text ordering.
///
/// Both sides are case folded first, so "Straße" and "STRASSE" compare equal
/// and fall through to the caller's tie-break. Folded text that differs is
/// ordered by the Unicode Collation Algorithm (root locale), which keeps
/// accented letters beside their base letter instead of after "z".
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let a: String = a.chars().case_fold().collect();
    let b: String = b.chars().case_fold().collect();
    if a == b {
        return Ordering::Equal;
    }
    COLLATOR.with(|collator| collator.borrow_mut().collate(a.as_str(), b.as_str()))
}

/// NaN orders after every number.
pub fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => compare_numbers(*a, *b),
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Applies `direction` to present values only: missing values always sort
/// last.
pub fn compare_optional(
    a: Option<&SortValue>,
    b: Option<&SortValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(compare_values(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("APPLE", "apple", Ordering::Equal)]
    #[case("Zebra", "ant", Ordering::Greater)]
    #[case("straße", "STRASSE", Ordering::Equal)]
    fn text_compares_case_insensitively(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_text(a, b), expected);
    }

    #[rstest]
    #[case("éclair", "zebra", Ordering::Less)]
    #[case("Éclair", "Zurich", Ordering::Less)]
    #[case("Österreich", "Zug", Ordering::Less)]
    #[case("Ångström", "Banco", Ordering::Less)]
    #[case("eclair", "éclair", Ordering::Less)]
    #[case("ÉCLAIR", "éclair", Ordering::Equal)]
    fn accented_text_sorts_beside_its_base_letter(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_text(a, b), expected);
    }

    #[test]
    fn nan_sorts_after_numbers() {
        assert_eq!(compare_numbers(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(compare_numbers(-5.0, f64::NAN), Ordering::Less);
    }

    #[test]
    fn dates_compare_lexically() {
        let older = SortValue::Date("2023-12-31".into());
        let newer = SortValue::Date("2024-01-02".into());

        assert_eq!(compare_values(&older, &newer), Ordering::Less);
    }

    #[rstest]
    #[case(SortDirection::Ascending)]
    #[case(SortDirection::Descending)]
    fn missing_values_sort_last_in_both_directions(#[case] direction: SortDirection) {
        let present = SortValue::Number(1.0);

        assert_eq!(
            compare_optional(Some(&present), None, direction),
            Ordering::Less
        );
        assert_eq!(
            compare_optional(None, Some(&present), direction),
            Ordering::Greater
        );
    }

    #[test]
    fn descending_reverses_present_values() {
        let low = SortValue::Number(1.0);
        let high = SortValue::Number(2.0);

        assert_eq!(
            compare_optional(Some(&low), Some(&high), SortDirection::Descending),
            Ordering::Greater
        );
    }
}
