use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;
use serde::Serialize;

use crate::app::error::CalcError;

/// Largest day count whose table still fits one worksheet (header row included).
pub const MAX_DAYS: u32 = 1_048_574;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Principal,
    Rate,
    Days,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Principal => write!(f, "principal"),
            Field::Rate => write!(f, "rate"),
            Field::Days => write!(f, "days"),
        }
    }
}

/// Form contents exactly as typed.
#[derive(Clone, Debug, Default)]
pub struct RawInput {
    pub principal: String,
    /// Percent, not a fraction.
    pub rate: String,
    pub days: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CalculationInput {
    pub principal: Decimal,
    /// Fraction per day, e.g. 0.05 for 5%.
    pub daily_rate: Decimal,
    pub days: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub balance: Decimal,
    pub interest: Decimal,
    pub formula: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    records: Vec<DayRecord>,
}

impl ResultTable {
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }
}

/// Parses every field first, then checks ranges, so a non-numeric field always
/// wins over an out-of-range one.
pub fn parse_input(raw: &RawInput) -> Result<CalculationInput, CalcError> {
    let principal = parse_decimal(Field::Principal, &raw.principal)?;
    let rate = parse_decimal(Field::Rate, &raw.rate)?;
    let days = raw
        .days
        .trim()
        .parse::<i64>()
        .map_err(|_| CalcError::Parse {
            field: Field::Days,
            value: raw.days.clone(),
        })?;

    if principal <= Decimal::ZERO {
        return Err(CalcError::Range {
            field: Field::Principal,
            value: principal.to_string(),
        });
    }
    if rate < Decimal::ZERO {
        return Err(CalcError::Range {
            field: Field::Rate,
            value: rate.to_string(),
        });
    }
    let days = u32::try_from(days)
        .ok()
        .filter(|d| (1..=MAX_DAYS).contains(d))
        .ok_or_else(|| CalcError::Range {
            field: Field::Days,
            value: days.to_string(),
        })?;

    Ok(CalculationInput {
        principal,
        daily_rate: rate / Decimal::ONE_HUNDRED,
        days,
    })
}

/// Well-formed numbers beyond what `Decimal` holds are `TooLarge`, not `Parse`.
fn parse_decimal(field: Field, value: &str) -> Result<Decimal, CalcError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f.abs() >= 1.0 => CalcError::TooLarge {
                field,
                value: value.to_owned(),
            },
            _ => CalcError::Parse {
                field,
                value: value.to_owned(),
            },
        })
}

/// Daily compounding. The running balance is never rounded; only the values
/// copied into each record are.
pub fn compound(input: &CalculationInput) -> Result<ResultTable, CalcError> {
    let rate_percent = input
        .daily_rate
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(display_number)
        .ok_or(CalcError::Overflow { day: 0 })?;

    let mut records = Vec::with_capacity(input.days as usize + 1);
    let mut balance = input.principal;
    records.push(record(0, balance, Decimal::ZERO, balance, &rate_percent));

    for day in 1..=input.days {
        let prior = balance;
        let interest = prior
            .checked_mul(input.daily_rate)
            .ok_or(CalcError::Overflow { day })?;
        balance = prior
            .checked_add(interest)
            .ok_or(CalcError::Overflow { day })?;
        records.push(record(day, balance, interest, prior, &rate_percent));
    }

    Ok(ResultTable { records })
}

fn record(
    day: u32,
    balance: Decimal,
    interest: Decimal,
    prior: Decimal,
    rate_percent: &str,
) -> DayRecord {
    DayRecord {
        day,
        balance: round_cents(balance),
        interest: round_cents(interest),
        formula: format!("{} * {}%", display_number(round_cents(prior)), rate_percent),
    }
}

/// Rounds half away from zero to two places and pads to exactly two.
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Shortest form with at least one fractional digit: `1000` -> `1000.0`.
pub fn display_number(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{value}.0")
    } else {
        value.to_string()
    }
}
