// Parser for algebraic symmetry-operator triplets such as "-x+1/2, y, -z+1/2"
//
// Each comma-separated component describes one row of the linear part plus the
// translation constant of that row. Variable coefficients are limited to -1, 0
// and 1; constants may be integers, decimals or simple fractions.

use nalgebra::{Matrix3, Vector3};

use crate::errors::{SymmetryError, SymmetryResult};

const AXIS_COUNT: usize = 3;

/// Parse a full operator string into its linear part and translation.
pub fn parse_xyz(input: &str) -> SymmetryResult<(Matrix3<f64>, Vector3<f64>)> {
    let axes: Vec<&str> = input.split(',').collect();
    if axes.len() != AXIS_COUNT {
        return Err(SymmetryError::parse(
            input,
            format!("expected {} comma-separated axis expressions, found {}", AXIS_COUNT, axes.len()),
        ));
    }

    let mut matrix = Matrix3::zeros();
    let mut translation = Vector3::zeros();
    for (row, expr) in axes.iter().enumerate() {
        let (coefficients, constant) = parse_axis_expression(expr).map_err(|e| match e {
            SymmetryError::Parse { message, .. } => SymmetryError::parse(
                input,
                format!("axis {} ('{}'): {}", row + 1, expr.trim(), message),
            ),
            other => other,
        })?;
        for (col, c) in coefficients.iter().enumerate() {
            matrix[(row, col)] = *c;
        }
        translation[row] = constant;
    }

    Ok((matrix, translation))
}

/// Parse a single axis expression like `-x+1/2` or `x-y`.
///
/// Returns the coefficients of (x, y, z) and the constant term.
pub fn parse_axis_expression(expr: &str) -> SymmetryResult<([f64; 3], f64)> {
    let chars: Vec<char> = expr.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(SymmetryError::parse(expr, "empty expression"));
    }

    let mut coefficients = [0.0f64; 3];
    let mut constant = 0.0f64;
    let mut i = 0;
    let mut first_term = true;

    while i < chars.len() {
        // Sign is optional on the leading term only
        let sign = match chars[i] {
            '+' => {
                i += 1;
                1.0
            }
            '-' => {
                i += 1;
                -1.0
            }
            _ if first_term => 1.0,
            c => {
                return Err(SymmetryError::parse(
                    expr,
                    format!("expected '+' or '-' before '{}'", c),
                ));
            }
        };
        first_term = false;

        if i >= chars.len() {
            return Err(SymmetryError::parse(expr, "dangling sign at end of expression"));
        }

        let c = chars[i];
        if let Some(axis) = axis_index(c) {
            add_variable(&mut coefficients, axis, sign, expr)?;
            i += 1;
        } else if c.is_ascii_digit() || c == '.' {
            let (value, consumed) = parse_number(&chars[i..], expr)?;
            i += consumed;

            // A number directly followed by a variable is an explicit coefficient
            if let Some(axis) = chars.get(i).copied().and_then(axis_index) {
                if (value - 1.0).abs() > f64::EPSILON {
                    return Err(SymmetryError::parse(
                        expr,
                        format!("coefficient {} of '{}' is not -1, 0 or 1", value, chars[i]),
                    ));
                }
                add_variable(&mut coefficients, axis, sign, expr)?;
                i += 1;
            } else {
                constant += sign * value;
            }
        } else {
            return Err(SymmetryError::parse(
                expr,
                format!("unexpected character '{}'", c),
            ));
        }
    }

    Ok((coefficients, constant))
}

fn axis_index(c: char) -> Option<usize> {
    match c {
        'x' | 'X' => Some(0),
        'y' | 'Y' => Some(1),
        'z' | 'Z' => Some(2),
        _ => None,
    }
}

fn add_variable(coefficients: &mut [f64; 3], axis: usize, sign: f64, expr: &str) -> SymmetryResult<()> {
    if coefficients[axis] != 0.0 {
        return Err(SymmetryError::parse(
            expr,
            format!("variable '{}' appears more than once", ['x', 'y', 'z'][axis]),
        ));
    }
    coefficients[axis] = sign;
    Ok(())
}

/// Parse an unsigned integer, decimal or fraction from the start of `chars`.
/// Returns (value, chars_consumed).
fn parse_number(chars: &[char], expr: &str) -> SymmetryResult<(f64, usize)> {
    let mut i = 0;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    let numerator_text: String = chars[..i].iter().collect();
    let numerator: f64 = numerator_text
        .parse()
        .map_err(|_| SymmetryError::parse(expr, format!("invalid number '{}'", numerator_text)))?;

    if i < chars.len() && chars[i] == '/' {
        i += 1;
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let denominator_text: String = chars[start..i].iter().collect();
        let denominator: u32 = denominator_text.parse().map_err(|_| {
            SymmetryError::parse(expr, format!("invalid denominator '{}'", denominator_text))
        })?;
        if denominator == 0 {
            return Err(SymmetryError::parse(expr, "zero denominator"));
        }
        return Ok((numerator / denominator as f64, i));
    }

    Ok((numerator, i))
}
