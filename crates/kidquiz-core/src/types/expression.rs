// Copyright 2026 The kidquiz Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
        }
    }

    /// `None` if the result overflows.
    pub fn apply(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
        }
    }
}

/// A two-operand arithmetic question such as `3 + 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
}

impl Expression {
    pub fn new(left: i64, operator: Operator, right: i64) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    /// The result, or `None` if it doesn't fit in an `i64`.
    pub fn evaluate(&self) -> Option<i64> {
        self.operator.apply(self.left, self.right)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}

/// Parses the `<int> <+|-> <int>` form used in catalog files.
impl FromStr for Expression {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ErrorReport::new(format!("malformed expression: '{s}'"));
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [left, operator, right] = parts.as_slice() else {
            return Err(malformed());
        };
        let operator = match *operator {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            _ => return Err(malformed()),
        };
        let left: i64 = left.parse().map_err(|_| malformed())?;
        let right: i64 = right.parse().map_err(|_| malformed())?;
        Ok(Expression::new(left, operator, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_evaluate() {
        assert_eq!(Expression::new(3, Operator::Add, 4).evaluate(), Some(7));
        assert_eq!(Expression::new(9, Operator::Sub, 5).evaluate(), Some(4));
    }

    #[test]
    fn test_evaluate_overflow() {
        assert_eq!(Expression::new(i64::MAX, Operator::Add, 1).evaluate(), None);
        assert_eq!(Expression::new(i64::MIN, Operator::Sub, 1).evaluate(), None);
        assert_eq!(
            Expression::new(i64::MAX, Operator::Sub, 1).evaluate(),
            Some(i64::MAX - 1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Expression::new(12, Operator::Sub, 3).to_string(), "12 - 3");
    }

    #[test]
    fn test_parse() -> Fallible<()> {
        let expr: Expression = "3 + 4".parse()?;
        assert_eq!(expr, Expression::new(3, Operator::Add, 4));
        let expr: Expression = "10 - 2".parse()?;
        assert_eq!(expr.evaluate(), Some(8));
        Ok(())
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["", "3 +", "3 * 4", "a + 4", "3 + 4 + 5", "3+4"] {
            let result = input.parse::<Expression>();
            assert_eq!(
                result,
                Err(ErrorReport::new(format!("malformed expression: '{input}'")))
            );
        }
    }

    #[test]
    fn test_serialize() -> Fallible<()> {
        let expr = Expression::new(2, Operator::Add, 2);
        let json = serde_json::to_string(&expr)?;
        assert_eq!(json, r#"{"left":2,"operator":"add","right":2}"#);
        Ok(())
    }
}
