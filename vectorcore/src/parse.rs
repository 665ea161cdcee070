//! Textual form of the vector types.
//!
//! Vectors are written as comma separated components, optionally wrapped in
//! parentheses: `(1, 2.5)` and `1,2.5` both describe the same [`Vector2`](crate::Vector2).

use core::fmt;

/// Error returned when a vector cannot be parsed from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVectorError {
    kind: ParseVectorErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ParseVectorErrorKind {
    Count { expected: usize, found: usize },
    Number { index: usize },
    Parenthesis,
}

impl ParseVectorError {
    fn count(expected: usize, found: usize) -> Self {
        Self {
            kind: ParseVectorErrorKind::Count { expected, found },
        }
    }

    fn number(index: usize) -> Self {
        Self {
            kind: ParseVectorErrorKind::Number { index },
        }
    }

    fn parenthesis() -> Self {
        Self {
            kind: ParseVectorErrorKind::Parenthesis,
        }
    }
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseVectorErrorKind::Count { expected, found } => write!(
                f,
                "expected {} components, found {}.",
                expected, found
            ),
            ParseVectorErrorKind::Number { index } => {
                write!(f, "component {} is not a number.", index + 1)
            }
            ParseVectorErrorKind::Parenthesis => write!(f, "unbalanced parenthesis."),
        }
    }
}

/// Splits `s` into exactly `N` floating point components.
pub(crate) fn parse_components<const N: usize>(s: &str) -> Result<[f64; N], ParseVectorError> {
    let s = s.trim();
    let s = match (s.strip_prefix('('), s.ends_with(')')) {
        (Some(inner), true) => &inner[..inner.len() - 1],
        (None, false) => s,
        _ => return Err(ParseVectorError::parenthesis()),
    };

    let found = s.split(',').count();
    if found != N {
        return Err(ParseVectorError::count(N, found));
    }

    let mut components = [0.0; N];
    for (index, (component, part)) in components.iter_mut().zip(s.split(',')).enumerate() {
        *component = part
            .trim()
            .parse()
            .map_err(|_| ParseVectorError::number(index))?;
    }
    Ok(components)
}
