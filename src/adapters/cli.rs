use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{Direction, IngredientWeights, parse_ingredients};
use crate::weights::calculator::{
    ConversionSummary, PortionBreakdown, convert_portion, portion_breakdown,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calculate raw/cooked food weights", long_about = None)]
pub struct Args {
    #[arg(long, global = true, help = "Print the result as JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        help = "Log intermediate totals and ratios to stderr"
    )]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Single ingredient conversions
    Single {
        /// Total raw weight cooked
        raw_total: f64,
        /// Total cooked weight
        cooked_total: f64,
        /// Raw portion to convert to cooked
        #[arg(long, value_name = "GRAMS")]
        raw: Option<f64>,
        /// Cooked portion to convert to raw
        #[arg(long, value_name = "GRAMS")]
        cooked: Option<f64>,
    },
    /// Multiple ingredient portions
    Multi {
        /// Ingredient as name:weight (repeatable)
        #[arg(
            short = 'i',
            long = "ingredient",
            value_name = "NAME:WEIGHT",
            required = true
        )]
        ingredients: Vec<String>,
        /// Total cooked weight of the mixed dish
        cooked_total: f64,
        /// Portion weight of cooked dish
        portion_weight: f64,
    },
}

/// What a subcommand produced, ready for printing.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Output {
    Conversion(ConversionSummary),
    Breakdown(PortionBreakdown),
}

/// Exactly one of `--raw` / `--cooked` selects the direction.
pub fn resolve_direction(
    raw: Option<f64>,
    cooked: Option<f64>,
) -> Result<(Direction, f64), AppError> {
    match (raw, cooked) {
        (Some(r), None) => Ok((Direction::RawToCooked, r)),
        (None, Some(c)) => Ok((Direction::CookedToRaw, c)),
        _ => Err(AppError::MissingRequiredFlag),
    }
}

pub fn compute(command: &Command) -> Result<Output, AppError> {
    match command {
        Command::Single {
            raw_total,
            cooked_total,
            raw,
            cooked,
        } => {
            let (direction, portion) = resolve_direction(*raw, *cooked)?;
            let summary = convert_portion(direction, portion, *raw_total, *cooked_total)?;
            Ok(Output::Conversion(summary))
        }
        Command::Multi {
            ingredients,
            cooked_total,
            portion_weight,
        } => {
            let weights: IngredientWeights = parse_ingredients(ingredients)?;
            let breakdown = portion_breakdown(&weights, *cooked_total, *portion_weight)?;
            Ok(Output::Breakdown(breakdown))
        }
    }
}

/// Text rendering, one line per result.
pub fn render_text(out: &Output) -> Vec<String> {
    match out {
        Output::Conversion(s) => {
            let (from, to) = s.direction.labels();
            vec![format!(
                "{:?}g {} -> {:.2}g {}",
                s.portion, from, s.converted, to
            )]
        }
        Output::Breakdown(b) => b
            .ingredients
            .iter()
            .map(|share| format!("{}: {:.2}g", share.name, share.weight))
            .collect(),
    }
}

pub fn print_output(out: &Output, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        for line in render_text(out) {
            println!("{}", line);
        }
    }

    Ok(())
}
