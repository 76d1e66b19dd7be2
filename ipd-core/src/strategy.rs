//! Strategy contract and registry
//!
//! The engine only ever sees `Box<dyn Strategy>`; it never branches on the
//! concrete kind behind the handle.

use rand::RngCore;

use crate::action::{Action, History};
use crate::error::ConfigError;
use crate::strategies::{
    AllCooperate, AllDefect, Alternate, Contrite, Grim, Pavlov, Prober, RandomChoice,
    SuspiciousTitForTat, TitForTat,
};

/// A stateful decision rule consulted once per round.
///
/// `own` and `opponent` contain the actions actually played so far in the
/// current match (after noise), oldest first. Strategies that need
/// randomness draw from `rng`, the run's single shared generator.
pub trait Strategy {
    /// Choose the intended action for the next round
    fn decide(&mut self, own: &History, opponent: &History, rng: &mut dyn RngCore) -> Action;

    /// Return to the initial state; called before every match
    fn reset(&mut self) {}

    /// Identifier used in results
    fn name(&self) -> &str;
}

/// Identifiers understood by [`create_strategy`]
pub const STRATEGY_IDS: [&str; 10] = [
    "ALLC",
    "ALLD",
    "TFT",
    "GRIM",
    "PAVLOV",
    "CONTRITE",
    "PROBER",
    "SUS_TFT",
    "ALTERNATE",
    "RND",
];

/// Strategies used when none are specified
pub const DEFAULT_STRATEGIES: [&str; 5] = ["ALLC", "ALLD", "TFT", "GRIM", "PAVLOV"];

/// Build a fresh strategy instance from its identifier (case-insensitive)
pub fn create_strategy(id: &str) -> Result<Box<dyn Strategy>, ConfigError> {
    let strategy: Box<dyn Strategy> = match id.trim().to_ascii_uppercase().as_str() {
        "ALLC" => Box::new(AllCooperate),
        "ALLD" => Box::new(AllDefect),
        "TFT" => Box::new(TitForTat),
        "GRIM" => Box::new(Grim::default()),
        "PAVLOV" => Box::new(Pavlov),
        "CONTRITE" => Box::new(Contrite),
        "PROBER" => Box::new(Prober::default()),
        "SUS_TFT" => Box::new(SuspiciousTitForTat),
        "ALTERNATE" => Box::new(Alternate),
        "RND" => Box::new(RandomChoice),
        _ => return Err(ConfigError::UnknownStrategy(id.to_string())),
    };
    Ok(strategy)
}

/// All registered identifiers
pub fn available_strategies() -> &'static [&'static str] {
    &STRATEGY_IDS
}

/// One-line summary of a registered strategy's behavior
pub fn describe_strategy(id: &str) -> Option<&'static str> {
    let description = match id.trim().to_ascii_uppercase().as_str() {
        "ALLC" => "always cooperate",
        "ALLD" => "always defect",
        "TFT" => "cooperate first, then copy the opponent's last move",
        "GRIM" => "cooperate until the opponent defects once, then defect forever",
        "PAVLOV" => "win-stay, lose-shift",
        "CONTRITE" => "tit-for-tat that makes amends after its own lapse",
        "PROBER" => "open C,D,C,C; exploit unconditional cooperators, else tit-for-tat",
        "SUS_TFT" => "tit-for-tat that opens with defection",
        "ALTERNATE" => "cooperate on even rounds, defect on odd rounds",
        "RND" => "cooperate with probability 0.5",
        _ => return None,
    };
    Some(description)
}
