//! Chart specification parsing.
//!
//! A chart spec is the text inside `@chart {...}`:
//!
//! ```text
//! Categories: Q1,Q2,Q3; Revenue: 10,20,30; Costs: 8,12,15
//! ```
//!
//! Clauses are separated by `;`, each clause is `name: v1,v2,...`. The clause
//! named exactly `Categories` holds the category labels, every other clause is
//! a numeric series.

use crate::error::ChartParseError;
use serde::{Deserialize, Serialize};

/// Name of the clause that holds category labels. Case-sensitive.
pub const CATEGORIES_KEY: &str = "Categories";

/// Parsed chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Category labels (X-axis), in order.
    pub categories: Vec<String>,

    /// Data series in the order they were written.
    pub series: Vec<ChartSeries>,
}

/// A named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series name (legend label).
    pub name: String,

    /// One value per category.
    pub values: Vec<f64>,
}

impl ChartSpec {
    /// Parse a raw chart spec.
    pub fn parse(raw: &str) -> Result<Self, ChartParseError> {
        parse_chart_spec(raw)
    }

    /// Check if there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }
}

/// Parse the text of a `@chart {...}` directive into categories and series.
///
/// Every clause, including a blank one left by a stray or trailing `;`, must
/// contain a `:`. A later clause with the same name replaces an earlier one.
/// Every series must have exactly one value per category.
pub fn parse_chart_spec(raw: &str) -> Result<ChartSpec, ChartParseError> {
    let mut categories: Vec<String> = Vec::new();
    let mut series: Vec<ChartSeries> = Vec::new();

    for clause in raw.split(';') {
        let clause = clause.trim();
        let (key, values) =
            clause
                .split_once(':')
                .ok_or_else(|| ChartParseError::MissingSeparator {
                    clause: clause.to_string(),
                })?;
        let key = key.trim();
        let tokens = values.split(',').map(str::trim);

        if key == CATEGORIES_KEY {
            categories = tokens.map(str::to_string).collect();
            continue;
        }

        let values = tokens
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| ChartParseError::InvalidNumber {
                        series: key.to_string(),
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match series.iter_mut().find(|s| s.name == key) {
            Some(existing) => existing.values = values,
            None => series.push(ChartSeries {
                name: key.to_string(),
                values,
            }),
        }
    }

    if let Some(bad) = series.iter().find(|s| s.values.len() != categories.len()) {
        return Err(ChartParseError::LengthMismatch {
            series: bad.name.clone(),
            expected: categories.len(),
            found: bad.values.len(),
        });
    }

    Ok(ChartSpec { categories, series })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_spec() {
        let chart = parse_chart_spec("Categories: A,B; S1: 1,2").unwrap();
        assert_eq!(chart.categories, vec!["A", "B"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_multiple_series_keeps_order() {
        let chart =
            ChartSpec::parse("Categories: A,B,C; Series1: 10,20,30; Series2: 15.5, 25 ,35")
                .unwrap();
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Series1", "Series2"]);
        assert_eq!(chart.series[1].values, vec![15.5, 25.0, 35.0]);
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_categories_key_is_case_sensitive() {
        let err = parse_chart_spec("categories: A,B; S1: 1,2").unwrap_err();
        assert_eq!(
            err,
            ChartParseError::InvalidNumber {
                series: "categories".to_string(),
                token: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_chart_spec("Categories: A; S1 1").unwrap_err();
        assert_eq!(
            err,
            ChartParseError::MissingSeparator {
                clause: "S1 1".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse_chart_spec("Categories: A,B; S1: 1,two").unwrap_err();
        assert!(matches!(err, ChartParseError::InvalidNumber { ref token, .. } if token == "two"));
    }

    #[test]
    fn test_empty_value_is_not_a_number() {
        let err = parse_chart_spec("Categories: A,B,C; S1: 1,,3").unwrap_err();
        assert!(matches!(err, ChartParseError::InvalidNumber { ref token, .. } if token.is_empty()));
    }

    #[test]
    fn test_length_mismatch() {
        let err = parse_chart_spec("Categories: A,B; S1: 1,2,3").unwrap_err();
        assert_eq!(
            err,
            ChartParseError::LengthMismatch {
                series: "S1".to_string(),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn test_blank_clause_is_missing_separator() {
        let blank = ChartParseError::MissingSeparator {
            clause: String::new(),
        };
        assert_eq!(parse_chart_spec("Categories: A; S1: 4;").unwrap_err(), blank);
        assert_eq!(parse_chart_spec("Categories: A;; S1: 4").unwrap_err(), blank);
        assert_eq!(parse_chart_spec("").unwrap_err(), blank);
    }

    #[test]
    fn test_duplicate_series_replaces() {
        let chart = parse_chart_spec("Categories: A; S1: 1; S1: 2").unwrap();
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![2.0]);
    }

    #[test]
    fn test_categories_only() {
        let chart = parse_chart_spec("Categories: A,B").unwrap();
        assert_eq!(chart.categories, vec!["A", "B"]);
        assert!(chart.is_empty());
    }
}
