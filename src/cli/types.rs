//! Parsers for query predicates given on the command line.

use crate::core::Sorting;
use std::fmt;
use std::str::FromStr;

fn split_field(s: &str) -> Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((field, rest)) if !field.is_empty() => Ok((field, rest)),
        _ => Err(format!("expected FIELD=VALUE, got '{}'", s)),
    }
}

/// `--filter field=a,b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub field: String,
    pub values: Vec<String>,
}

impl FromStr for FilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, values) = split_field(s)?;
        Ok(Self {
            field: field.to_string(),
            values: values
                .split(',')
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// `--search field=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArg {
    pub field: String,
    pub value: String,
}

impl FromStr for SearchArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = split_field(s)?;
        Ok(Self {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// `--range field=lower,upper`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeArg {
    pub field: String,
    pub lower: String,
    pub upper: String,
}

impl FromStr for RangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, bounds) = split_field(s)?;
        let (lower, upper) = bounds
            .split_once(',')
            .ok_or_else(|| format!("expected FIELD=LOWER,UPPER, got '{}'", s))?;
        Ok(Self {
            field: field.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        })
    }
}

/// `--sort field` (ascending) or `--sort -field` (descending)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    pub field: String,
    pub direction: Sorting,
}

impl FromStr for SortArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = Sorting::parse_token(s);
        if field.is_empty() {
            return Err("sort field must not be empty".to_string());
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.direction.for_field(&self.field))
    }
}
