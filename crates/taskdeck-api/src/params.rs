// SPDX-License-Identifier: Apache-2.0

/// Outcome of parsing the `{id}` path segment.
///
/// A non-numeric segment is not a type error: `Invalid` never matches any
/// stored id, so lookups treat it exactly like a well-formed id that does
/// not exist and answer 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIdParam {
    Valid(u64),
    Invalid,
}

impl TaskIdParam {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim().parse::<u64>().map_or(Self::Invalid, Self::Valid)
    }

    #[must_use]
    pub const fn as_valid(self) -> Option<u64> {
        match self {
            Self::Valid(id) => Some(id),
            Self::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_parse_to_valid_ids() {
        assert_eq!(TaskIdParam::parse("7"), TaskIdParam::Valid(7));
        assert_eq!(TaskIdParam::parse(" 42 "), TaskIdParam::Valid(42));
    }

    #[test]
    fn malformed_segments_are_invalid_not_errors() {
        assert_eq!(TaskIdParam::parse("abc"), TaskIdParam::Invalid);
        assert_eq!(TaskIdParam::parse(""), TaskIdParam::Invalid);
        assert_eq!(TaskIdParam::parse("3.5"), TaskIdParam::Invalid);
        assert_eq!(TaskIdParam::parse("-1"), TaskIdParam::Invalid);
    }

    #[test]
    fn invalid_never_yields_an_id() {
        assert_eq!(TaskIdParam::Invalid.as_valid(), None);
        assert_eq!(TaskIdParam::Valid(9).as_valid(), Some(9));
    }
}
