// std: thiserror-Fehler inkl. CLI-Varianten; no_std: nur Rechenfehler mit manuellem Display
#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Why a `NAME:WEIGHT` token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientFault {
    MissingSeparator,
    EmptyName,
    InvalidWeight,
    NegativeWeight,
    DuplicateName,
}

impl fmt::Display for IngredientFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            IngredientFault::MissingSeparator => "must be in name:weight format",
            IngredientFault::EmptyName => "ingredient name is empty",
            IngredientFault::InvalidWeight => "weight is not a finite number",
            IngredientFault::NegativeWeight => "weight must not be negative",
            IngredientFault::DuplicateName => "ingredient name given more than once",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Malformed ingredient '{token}': {reason}")]
    MalformedIngredient {
        token: String,
        reason: IngredientFault,
    },
}

#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    InvalidArgument(&'static str),
    MalformedIngredient {
        token: String,
        reason: IngredientFault,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            WeightError::MalformedIngredient { token, reason } => {
                write!(f, "Malformed ingredient '{token}': {reason}")
            }
        }
    }
}

impl WeightError {
    pub(crate) fn malformed(token: &str, reason: IngredientFault) -> Self {
        WeightError::MalformedIngredient {
            token: token.into(),
            reason,
        }
    }
}

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Weight(#[from] WeightError),

    #[cfg(feature = "cli")]
    #[error("Missing required flag: provide exactly one of --raw or --cooked")]
    MissingRequiredFlag,

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },
}
