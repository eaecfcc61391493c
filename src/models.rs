#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::str::FromStr;

use serde::Serialize;

use crate::error::{IngredientFault, WeightError};

/// Which way a single-ingredient conversion runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    RawToCooked,
    CookedToRaw,
}

impl Direction {
    /// Labels for the known and the converted side, e.g. `("raw", "cooked")`.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Direction::RawToCooked => ("raw", "cooked"),
            Direction::CookedToRaw => ("cooked", "raw"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub raw_weight: f64,
}

/// Parses `NAME:WEIGHT`. Only the first `:` separates, so the weight part
/// may not contain another one; surrounding whitespace around the weight is
/// ignored, the name is taken verbatim.
impl FromStr for Ingredient {
    type Err = WeightError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, weight) = token
            .split_once(':')
            .ok_or_else(|| WeightError::malformed(token, IngredientFault::MissingSeparator))?;
        if name.is_empty() {
            return Err(WeightError::malformed(token, IngredientFault::EmptyName));
        }
        let raw_weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| WeightError::malformed(token, IngredientFault::InvalidWeight))?;
        if !raw_weight.is_finite() {
            return Err(WeightError::malformed(token, IngredientFault::InvalidWeight));
        }
        if raw_weight < 0.0 {
            return Err(WeightError::malformed(token, IngredientFault::NegativeWeight));
        }

        Ok(Self {
            name: String::from(name),
            raw_weight,
        })
    }
}

/// Ingredient name -> raw weight, kept in insertion order with unique names.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IngredientWeights {
    items: Vec<Ingredient>,
}

impl IngredientWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ingredient: Ingredient) -> Result<(), WeightError> {
        if self.get(&ingredient.name).is_some() {
            return Err(WeightError::malformed(
                &ingredient.name,
                IngredientFault::DuplicateName,
            ));
        }
        self.items.push(ingredient);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.raw_weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_raw(&self) -> f64 {
        self.items.iter().map(|i| i.raw_weight).sum()
    }
}

/// Build the mapping from command-line tokens, failing on the first bad one.
pub fn parse_ingredients<I, S>(tokens: I) -> Result<IngredientWeights, WeightError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut weights = IngredientWeights::new();
    for token in tokens {
        let token = token.as_ref();
        let ingredient: Ingredient = token.parse()?;
        // push only fails on a repeated name; report the whole token
        weights
            .push(ingredient)
            .map_err(|_| WeightError::malformed(token, IngredientFault::DuplicateName))?;
    }
    Ok(weights)
}
