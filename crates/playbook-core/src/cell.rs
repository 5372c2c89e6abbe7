use calamine::Data;

/// A loosely typed spreadsheet cell reduced to the three shapes the parser
/// cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Absent,
    Integer(i64),
    Text(String),
}

/// Result of coercing a cell to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    Value(T),
    /// The cell was blank or absent.
    Defaulted(T),
    /// The cell held something that is not a usable integer.
    Rejected(T),
}

impl<T: Copy> Coerced<T> {
    pub fn value(self) -> T {
        match self {
            Coerced::Value(v) | Coerced::Defaulted(v) | Coerced::Rejected(v) => v,
        }
    }
}

impl CellValue {
    pub fn from_data(data: Option<&Data>) -> Self {
        let Some(data) = data else {
            return CellValue::Absent;
        };
        match data {
            Data::Empty | Data::Error(_) => CellValue::Absent,
            Data::Int(v) => CellValue::Integer(*v),
            Data::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                CellValue::Integer(*v as i64)
            }
            Data::Float(v) => CellValue::Text(format!("{v}")),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            other => CellValue::Text(other.to_string()),
        }
    }

    /// Blank text counts as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Absent => true,
            CellValue::Integer(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Display string, or `None` when blank.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Absent => None,
            CellValue::Integer(v) => Some(v.to_string()),
            CellValue::Text(s) if s.trim().is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    /// Column-A value of a play row. Blank text and a numeric zero both
    /// end the table.
    pub fn strategy_name(&self) -> Option<String> {
        match self {
            CellValue::Integer(0) => None,
            other => other.as_text(),
        }
    }

    /// Exact match against a text cell; no trimming.
    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, CellValue::Text(s) if s == expected)
    }

    /// Coerce to an integer of type `T`, falling back to `default` when the
    /// cell is blank or the value does not fit.
    pub fn to_int_or<T>(&self, default: T) -> Coerced<T>
    where
        T: TryFrom<i64> + Copy,
    {
        let raw = match self {
            CellValue::Absent => return Coerced::Defaulted(default),
            CellValue::Integer(v) => Some(*v),
            CellValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Coerced::Defaulted(default);
                }
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
        };
        match raw.and_then(|v| T::try_from(v).ok()) {
            Some(v) => Coerced::Value(v),
            None => Coerced::Rejected(default),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_become_integers() {
        assert_eq!(CellValue::from_data(Some(&Data::Float(3.0))), CellValue::Integer(3));
        assert_eq!(
            CellValue::from_data(Some(&Data::Float(2.5))),
            CellValue::Text("2.5".to_string())
        );
    }

    #[test]
    fn missing_and_empty_are_absent() {
        assert_eq!(CellValue::from_data(None), CellValue::Absent);
        assert_eq!(CellValue::from_data(Some(&Data::Empty)), CellValue::Absent);
        assert!(CellValue::Text("   ".to_string()).is_blank());
    }

    #[test]
    fn blank_cells_take_the_default() {
        assert_eq!(CellValue::Absent.to_int_or(999u32), Coerced::Defaulted(999));
        assert_eq!(
            CellValue::Text(" ".to_string()).to_int_or(6u8),
            Coerced::Defaulted(6)
        );
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(CellValue::Text(" 42 ".to_string()).to_int_or(0u32), Coerced::Value(42));
        assert_eq!(CellValue::Text("3.9".to_string()).to_int_or(0u32), Coerced::Value(3));
    }

    #[test]
    fn strategy_name_stops_on_blank_or_zero() {
        assert_eq!(CellValue::Absent.strategy_name(), None);
        assert_eq!(CellValue::Text("  ".to_string()).strategy_name(), None);
        assert_eq!(CellValue::Integer(0).strategy_name(), None);
        assert_eq!(CellValue::Integer(404).strategy_name(), Some("404".to_string()));
        assert_eq!(
            CellValue::Text("0".to_string()).strategy_name(),
            Some("0".to_string())
        );
    }

    #[test]
    fn zero_is_kept_not_defaulted() {
        assert_eq!(CellValue::Integer(0).to_int_or(999u32), Coerced::Value(0));
    }

    #[test]
    fn unusable_values_are_rejected_with_default() {
        assert_eq!(
            CellValue::Text("soon".to_string()).to_int_or(6u8),
            Coerced::Rejected(6)
        );
        assert_eq!(CellValue::Integer(-4).to_int_or(0u32), Coerced::Rejected(0));
        assert_eq!(CellValue::Integer(-4).to_int_or(0u32).value(), 0);
    }

    #[test]
    fn text_rendering() {
        assert_eq!(CellValue::Integer(7).as_text().as_deref(), Some("7"));
        assert_eq!(CellValue::Absent.as_text(), None);
        assert!(CellValue::Text("Strategy / Play".to_string()).is_text("Strategy / Play"));
        assert!(!CellValue::Text("Strategy / Play ".to_string()).is_text("Strategy / Play"));
    }
}
