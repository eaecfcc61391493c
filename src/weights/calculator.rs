#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use serde::Serialize;
use tracing::debug;

use crate::error::WeightError;
use crate::models::{Direction, IngredientWeights};

/// One ingredient's share of a cooked portion, in grams.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortionShare {
    pub name: String,
    pub weight: f64,
}

/// Result record of a single-ingredient conversion.
///
/// Fields:
/// - `direction`: which side was known
/// - `portion`: the known portion as given by the caller (g)
/// - `converted`: the equivalent weight on the other side (g)
/// - `raw_total` / `cooked_total`: the totals the ratio was taken from (g)
#[derive(Serialize, Debug, Clone)]
pub struct ConversionSummary {
    pub direction: Direction,
    pub portion: f64,
    pub converted: f64,
    pub raw_total: f64,
    pub cooked_total: f64,
}

/// Result record of a multi-ingredient portion breakdown.
#[derive(Serialize, Debug, Clone)]
pub struct PortionBreakdown {
    pub cooked_total: f64,
    pub portion_weight: f64,
    pub ingredients: Vec<PortionShare>,
}

/// Scale a known portion onto the other side of a raw/cooked pair.
///
/// Returns `known_portion * other_total / known_total`. Works in both
/// directions: pass the raw total as `known_total` to get a cooked weight,
/// or the cooked total to get a raw weight.
///
/// Parameters:
/// - `known_portion`: portion weight on the known side (g)
/// - `known_total`: total weight on the known side (g), must be non-zero
/// - `other_total`: total weight on the side being converted to (g)
///
/// Errors: `WeightError::InvalidArgument` if `known_total` is zero.
pub fn convert(known_portion: f64, known_total: f64, other_total: f64) -> Result<f64, WeightError> {
    if known_total == 0.0 {
        return Err(WeightError::InvalidArgument("known total must be non-zero"));
    }
    Ok(known_portion * other_total / known_total)
}

/// Split a cooked portion of a mixed dish into per-ingredient weights.
///
/// The cooked dish is assumed to keep the raw proportions of its
/// ingredients: each ingredient's cooked weight is its raw weight times
/// `cooked_total / total_raw`, and the portion takes the fraction
/// `portion_weight / cooked_total` of every cooked weight.
///
/// The returned shares follow the input order and contain every input
/// ingredient exactly once; their sum equals `portion_weight` up to
/// floating-point rounding.
///
/// Errors: `WeightError::InvalidArgument` if the raw weights sum to zero
/// (this includes an empty mapping), if their sum overflows to infinity, or
/// if `cooked_total` is zero.
pub fn apportion(
    raw_weights: &IngredientWeights,
    cooked_total: f64,
    portion_weight: f64,
) -> Result<Vec<PortionShare>, WeightError> {
    let total_raw = raw_weights.total_raw();
    if total_raw == 0.0 {
        return Err(WeightError::InvalidArgument("total raw weight must be non-zero"));
    }
    if !total_raw.is_finite() {
        return Err(WeightError::InvalidArgument("total raw weight is not finite"));
    }
    if cooked_total == 0.0 {
        return Err(WeightError::InvalidArgument("cooked total must be non-zero"));
    }

    let cooked_per_raw_unit = cooked_total / total_raw;
    let portion_ratio = portion_weight / cooked_total;
    debug!(total_raw, cooked_per_raw_unit, portion_ratio, "apportioning portion");

    Ok(raw_weights
        .iter()
        .map(|i| {
            let cooked_weight = i.raw_weight * cooked_per_raw_unit;
            PortionShare {
                name: i.name.clone(),
                weight: cooked_weight * portion_ratio,
            }
        })
        .collect())
}

/// Convert a portion in the given direction and wrap the result.
///
/// `RawToCooked` scales by `cooked_total / raw_total`, `CookedToRaw` by the
/// inverse. Zero on the known side is rejected by `convert`.
pub fn convert_portion(
    direction: Direction,
    portion: f64,
    raw_total: f64,
    cooked_total: f64,
) -> Result<ConversionSummary, WeightError> {
    let converted = match direction {
        Direction::RawToCooked => convert(portion, raw_total, cooked_total)?,
        Direction::CookedToRaw => convert(portion, cooked_total, raw_total)?,
    };
    debug!(?direction, portion, converted, "converted portion");

    Ok(ConversionSummary {
        direction,
        portion,
        converted,
        raw_total,
        cooked_total,
    })
}

pub fn portion_breakdown(
    raw_weights: &IngredientWeights,
    cooked_total: f64,
    portion_weight: f64,
) -> Result<PortionBreakdown, WeightError> {
    let ingredients = apportion(raw_weights, cooked_total, portion_weight)?;
    Ok(PortionBreakdown {
        cooked_total,
        portion_weight,
        ingredients,
    })
}
