//! Parsing of the id path segment.
//!
//! `/api/location/{ids}` accepts a single id (`3`), a comma-separated list
//! (`1,2,3`) or a bracketed list (`[1,2,3]`). Syntax is validated here,
//! before any lookup against the dataset, so a malformed selector never
//! reaches the lookup step.
//!
//! An id is a plain run of ASCII digits. Signs, decimals and whitespace
//! inside a token are not ids. A digit run too large for any record is
//! still an id; it simply matches nothing.

use crate::error::{LocationError, LocationResult};

/// A validated id selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSelector {
    /// One id, answered with a single record
    Single(u64),
    /// Ids in requested order, answered with an array
    List(Vec<u64>),
}

impl IdSelector {
    /// Parse a raw path segment.
    ///
    /// A segment with a comma or a bracket is a list and any syntax problem
    /// in it is a bad array. Anything else is a single id and a non-numeric
    /// value is a bad parameter.
    ///
    /// ```
    /// # use multiverse_core::IdSelector;
    /// assert_eq!(IdSelector::parse("7").unwrap(), IdSelector::Single(7));
    /// assert_eq!(IdSelector::parse("1,2").unwrap(), IdSelector::List(vec![1, 2]));
    /// assert_eq!(IdSelector::parse("[4,5]").unwrap(), IdSelector::List(vec![4, 5]));
    /// assert!(IdSelector::parse("[4,5").is_err());
    /// assert!(IdSelector::parse("+5").is_err());
    /// ```
    pub fn parse(raw: &str) -> LocationResult<Self> {
        let raw = raw.trim();
        if is_list(raw) {
            parse_list(raw).map(IdSelector::List)
        } else {
            parse_id(raw)
                .map(IdSelector::Single)
                .ok_or_else(|| LocationError::BadParam(raw.to_string()))
        }
    }
}

fn is_list(raw: &str) -> bool {
    raw.contains([',', '[', ']'])
}

/// Digits only. Values past `u64::MAX` saturate, which no record can hold.
fn parse_id(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse::<u64>().unwrap_or(u64::MAX))
}

fn parse_list(raw: &str) -> LocationResult<Vec<u64>> {
    let bad = || LocationError::BadArray(raw.to_string());

    let inner = match (raw.strip_prefix('['), raw.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => raw,
        _ => return Err(bad()),
    };

    // Brackets only delimit the whole list
    if inner.contains(['[', ']']) {
        return Err(bad());
    }

    inner
        .split(',')
        .map(|token| parse_id(token.trim()).ok_or_else(bad))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("12345", 12345)]
    #[case(" 42 ", 42)]
    #[case("0", 0)]
    #[case("007", 7)]
    #[case("99999999999", 99_999_999_999)]
    #[case("123456789012345678901234567890", u64::MAX)]
    fn parses_single_id(#[case] raw: &str, #[case] expected: u64) {
        assert_eq!(IdSelector::parse(raw).unwrap(), IdSelector::Single(expected));
    }

    #[rstest]
    #[case("1,2,3,4,5", vec![1, 2, 3, 4, 5])]
    #[case("[1,2,3]", vec![1, 2, 3])]
    #[case("[3]", vec![3])]
    #[case("5,1,3", vec![5, 1, 3])]
    #[case("1, 2 ,3", vec![1, 2, 3])]
    #[case("2,2", vec![2, 2])]
    #[case("1,99999999999", vec![1, 99_999_999_999])]
    fn parses_id_list(#[case] raw: &str, #[case] expected: Vec<u64>) {
        assert_eq!(IdSelector::parse(raw).unwrap(), IdSelector::List(expected));
    }

    #[rstest]
    #[case("asdasd")]
    #[case("-1")]
    #[case("+5")]
    #[case("1.5")]
    #[case("1 2")]
    #[case("")]
    fn non_numeric_single_is_bad_param(#[case] raw: &str) {
        assert!(matches!(
            IdSelector::parse(raw),
            Err(LocationError::BadParam(_))
        ));
    }

    #[rstest]
    #[case("1,2]")]
    #[case("[1,2")]
    #[case("[1,asdasd]")]
    #[case("[+5]")]
    #[case("1,-2")]
    #[case("1,,2")]
    #[case("1,2,")]
    #[case("[]")]
    #[case("[[1,2]]")]
    #[case("[1]2]")]
    #[case("]1,2[")]
    fn malformed_list_is_bad_array(#[case] raw: &str) {
        assert!(matches!(
            IdSelector::parse(raw),
            Err(LocationError::BadArray(_))
        ));
    }
}
