use crate::rpneval::CalcErr;
use std::fmt;
use std::str::FromStr;

/// Rounding applied to the final result of every evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecimalMode {
    /// Round to the nearest integer.
    Zero,
    /// Round to two decimal places.
    Two,
    /// Leave the result untouched.
    Full,
}

impl DecimalMode {
    /// Round half away from zero. Infinities, NaN and values without a
    /// fractional part come back as they went in.
    pub fn round(self, value: f64) -> f64 {
        if !value.is_finite() || value.fract() == 0.0 {
            return value;
        }
        match self {
            DecimalMode::Zero => value.round(),
            DecimalMode::Two => round_half_up(value, 100.0) / 100.0,
            DecimalMode::Full => value,
        }
    }
}

// Scaling can land just short of a decimal half (1.005 * 100 = 100.4999..),
// so bump the rounded value when the half step back still reaches the input.
fn round_half_up(value: f64, scale: f64) -> f64 {
    let mut f = (value * scale).round();
    if value > 0.0 && (f + 0.5) / scale <= value {
        f += 1.0;
    } else if value < 0.0 && (f - 0.5) / scale >= value {
        f -= 1.0;
    }
    f
}

impl FromStr for DecimalMode {
    type Err = CalcErr;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match &selector.to_ascii_lowercase()[..] {
            "zero" | "d_0" | "0" => Ok(DecimalMode::Zero),
            "two" | "d_2" | "2" => Ok(DecimalMode::Two),
            "full" | "d_float" | "float" => Ok(DecimalMode::Full),
            _ => Err(CalcErr::UnsupportedDecimalSelector(selector.to_string())),
        }
    }
}

impl fmt::Display for DecimalMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecimalMode::Zero => write!(f, "zero"),
            DecimalMode::Two => write!(f, "two"),
            DecimalMode::Full => write!(f, "full"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
