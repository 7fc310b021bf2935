//! Alert condition operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AutomationError;

/// Operators of a comparison condition (`metric <op> threshold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOperator {
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 4] = [
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqualTo,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqualTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::LessThan => "LESS_THAN",
            ComparisonOperator::LessThanOrEqualTo => "LESS_THAN_OR_EQUAL_TO",
            ComparisonOperator::GreaterThan => "GREATER_THAN",
            ComparisonOperator::GreaterThanOrEqualTo => "GREATER_THAN_OR_EQUAL_TO",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = AutomationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComparisonOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AutomationError::UnknownOperator(s.to_string()))
    }
}

/// Operators of a relative condition (how the change is judged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeOperator {
    IncreaseBy,
    DecreaseBy,
    ChangesBy,
}

impl RelativeOperator {
    pub const ALL: [RelativeOperator; 3] = [
        RelativeOperator::IncreaseBy,
        RelativeOperator::DecreaseBy,
        RelativeOperator::ChangesBy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeOperator::IncreaseBy => "INCREASE_BY",
            RelativeOperator::DecreaseBy => "DECREASE_BY",
            RelativeOperator::ChangesBy => "CHANGES_BY",
        }
    }
}

impl fmt::Display for RelativeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelativeOperator {
    type Err = AutomationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RelativeOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AutomationError::UnknownOperator(s.to_string()))
    }
}

/// How the relative measure combines its two operands.
///
/// `Change` is a percentage change, `Difference` an absolute one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArithmeticOperator {
    Difference,
    Change,
}

impl ArithmeticOperator {
    pub const ALL: [ArithmeticOperator; 2] =
        [ArithmeticOperator::Change, ArithmeticOperator::Difference];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticOperator::Difference => "DIFFERENCE",
            ArithmeticOperator::Change => "CHANGE",
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArithmeticOperator {
    type Err = AutomationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ArithmeticOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AutomationError::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_agree() {
        for op in ComparisonOperator::ALL {
            assert_eq!(op.to_string().parse::<ComparisonOperator>().unwrap(), op);
        }
        for op in RelativeOperator::ALL {
            assert_eq!(op.to_string().parse::<RelativeOperator>().unwrap(), op);
        }
        for op in ArithmeticOperator::ALL {
            assert_eq!(op.to_string().parse::<ArithmeticOperator>().unwrap(), op);
        }
    }

    #[test]
    fn serde_uses_screaming_names() {
        let json = serde_json::to_string(&ComparisonOperator::GreaterThanOrEqualTo).unwrap();
        assert_eq!(json, r#""GREATER_THAN_OR_EQUAL_TO""#);
        let op: RelativeOperator = serde_json::from_str(r#""CHANGES_BY""#).unwrap();
        assert_eq!(op, RelativeOperator::ChangesBy);
    }

    #[test]
    fn unknown_operator_is_an_error() {
        let err = "ABOUT".parse::<ComparisonOperator>().unwrap_err();
        assert!(matches!(err, AutomationError::UnknownOperator(s) if s == "ABOUT"));
    }
}
