use crate::calculator::error::CalcError;

/// The binary operator waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    None,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operation {
    /// Evaluate `lhs op rhs`.
    ///
    /// Returns `Ok(None)` when no operation is pending. Arithmetic wraps on
    /// overflow; division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<Option<i64>, CalcError> {
        let value = match self {
            Operation::None => return Ok(None),
            Operation::Plus => lhs.wrapping_add(rhs),
            Operation::Minus => lhs.wrapping_sub(rhs),
            Operation::Multiply => lhs.wrapping_mul(rhs),
            Operation::Divide => {
                if rhs == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs.wrapping_div(rhs)
            }
        };
        Ok(Some(value))
    }

    /// Symbol shown next to the display while the operation is pending.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operation::None => None,
            Operation::Plus => Some("+"),
            Operation::Minus => Some("-"),
            Operation::Multiply => Some("X"),
            Operation::Divide => Some("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_a_no_op() {
        assert_eq!(Operation::None.apply(4, 2), Ok(None));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Operation::Divide.apply(7, 2), Ok(Some(3)));
        assert_eq!(Operation::Divide.apply(-7, 2), Ok(Some(-3)));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(Operation::Divide.apply(1, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(Operation::Plus.apply(i64::MAX, 1), Ok(Some(i64::MIN)));
        assert_eq!(Operation::Divide.apply(i64::MIN, -1), Ok(Some(i64::MIN)));
    }
}
