/// The numeric kind inferred from a JSON number literal.
///
/// Kinds are ordered from narrowest to widest, so widening two kinds is simply
/// taking the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumType {
    /// An integer that fits in a signed 32-bit range. Rendered as `int`.
    Int,

    /// An integer outside the signed 32-bit range. Rendered as `int64`.
    Int64,

    /// A literal with a decimal point or an exponent. Rendered as `float64`.
    Float64,
}

impl NumType {
    /// Classifies a number by its literal text as it appeared in the input.
    ///
    /// The text matters, not just the value: `42.0` is a `Float64` even though
    /// its magnitude is integral.
    pub fn from_literal(text: &str) -> Self {
        if text.contains(|c| matches!(c, '.' | 'e' | 'E')) {
            return Self::Float64;
        }

        match text.parse::<i64>() {
            Ok(n) if i64::from(i32::MIN) <= n && n <= i64::from(i32::MAX) => Self::Int,
            _ => Self::Int64,
        }
    }

    pub fn widen(self, other: Self) -> Self {
        self.max(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_literal() {
        assert_eq!(NumType::Int, NumType::from_literal("42"));
        assert_eq!(NumType::Int, NumType::from_literal("-7"));
        assert_eq!(NumType::Int, NumType::from_literal("0"));

        // Limits of the narrow integer range are inclusive.
        assert_eq!(NumType::Int, NumType::from_literal("2147483647"));
        assert_eq!(NumType::Int, NumType::from_literal("-2147483648"));
        assert_eq!(NumType::Int64, NumType::from_literal("2147483648"));
        assert_eq!(NumType::Int64, NumType::from_literal("-2147483649"));
        assert_eq!(NumType::Int64, NumType::from_literal("9223372036854775807"));

        // Past the 64-bit range is still an integer literal.
        assert_eq!(NumType::Int64, NumType::from_literal("123456789012345678901234567890"));

        assert_eq!(NumType::Float64, NumType::from_literal("42.0"));
        assert_eq!(NumType::Float64, NumType::from_literal("3.14"));
        assert_eq!(NumType::Float64, NumType::from_literal("1e5"));
        assert_eq!(NumType::Float64, NumType::from_literal("-2E-3"));
    }

    #[test]
    fn widen() {
        assert_eq!(NumType::Int, NumType::Int.widen(NumType::Int));
        assert_eq!(NumType::Int64, NumType::Int.widen(NumType::Int64));
        assert_eq!(NumType::Int64, NumType::Int64.widen(NumType::Int));
        assert_eq!(NumType::Float64, NumType::Int.widen(NumType::Float64));
        assert_eq!(NumType::Float64, NumType::Float64.widen(NumType::Int64));
    }
}
