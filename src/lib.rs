#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adapters;
pub mod error;
pub mod models;
pub mod weights;

#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::error::{IngredientFault, WeightError};
pub use crate::models::{Direction, Ingredient, IngredientWeights, parse_ingredients};
pub use crate::weights::calculator::{
    ConversionSummary, PortionBreakdown, PortionShare, apportion, convert, convert_portion,
    portion_breakdown,
};
