//! Strategy catalog - the classic fixed decision rules

use rand::{Rng, RngCore};

use crate::action::{Action, History};
use crate::strategy::Strategy;

use Action::{Cooperate, Defect};

/// Always cooperate
#[derive(Clone, Copy, Debug, Default)]
pub struct AllCooperate;

impl Strategy for AllCooperate {
    fn decide(&mut self, _own: &History, _opponent: &History, _rng: &mut dyn RngCore) -> Action {
        Cooperate
    }

    fn name(&self) -> &str {
        "ALLC"
    }
}

/// Always defect
#[derive(Clone, Copy, Debug, Default)]
pub struct AllDefect;

impl Strategy for AllDefect {
    fn decide(&mut self, _own: &History, _opponent: &History, _rng: &mut dyn RngCore) -> Action {
        Defect
    }

    fn name(&self) -> &str {
        "ALLD"
    }
}

/// Cooperate first, then copy the opponent's last action
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, _own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        opponent.last().copied().unwrap_or(Cooperate)
    }

    fn name(&self) -> &str {
        "TFT"
    }
}

/// Tit-for-tat that opens with a defection
#[derive(Clone, Copy, Debug, Default)]
pub struct SuspiciousTitForTat;

impl Strategy for SuspiciousTitForTat {
    fn decide(&mut self, _own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        opponent.last().copied().unwrap_or(Defect)
    }

    fn name(&self) -> &str {
        "SUS_TFT"
    }
}

/// Cooperate until the opponent defects once, then defect forever
#[derive(Clone, Copy, Debug, Default)]
pub struct Grim {
    triggered: bool,
}

impl Strategy for Grim {
    fn decide(&mut self, _own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        if !self.triggered && opponent.last() == Some(&Defect) {
            self.triggered = true;
        }
        if self.triggered {
            Defect
        } else {
            Cooperate
        }
    }

    fn reset(&mut self) {
        self.triggered = false;
    }

    fn name(&self) -> &str {
        "GRIM"
    }
}

/// Win-stay, lose-shift
///
/// Keeps its last action after a round where the opponent cooperated
/// (payoff R or T), switches otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn decide(&mut self, own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        match (own.last(), opponent.last()) {
            (Some(&mine), Some(&Cooperate)) => mine,
            (Some(&mine), Some(&Defect)) => mine.flipped(),
            _ => Cooperate,
        }
    }

    fn name(&self) -> &str {
        "PAVLOV"
    }
}

/// Contrite tit-for-tat
///
/// Behaves like TFT, but when its own cooperation slipped into a defection
/// and the opponent answered with a defection, it cooperates to end the feud.
#[derive(Clone, Copy, Debug, Default)]
pub struct Contrite;

impl Strategy for Contrite {
    fn decide(&mut self, own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        let Some(&their_last) = opponent.last() else {
            return Cooperate;
        };
        if let [.., Cooperate, Defect] = own {
            if their_last == Defect {
                return Cooperate;
            }
        }
        their_last
    }

    fn name(&self) -> &str {
        "CONTRITE"
    }
}

/// Opening sequence of the prober: C, D, C, C
const PROBE_SEQUENCE: [Action; 4] = [Cooperate, Defect, Cooperate, Cooperate];

/// Probe with C, D, C, C; exploit an opponent that never retaliated, else play TFT
#[derive(Clone, Copy, Debug, Default)]
pub struct Prober {
    probe_complete: bool,
    exploitable: bool,
}

impl Strategy for Prober {
    fn decide(&mut self, own: &History, opponent: &History, _rng: &mut dyn RngCore) -> Action {
        let round = own.len();
        if round < PROBE_SEQUENCE.len() {
            return PROBE_SEQUENCE[round];
        }

        if !self.probe_complete {
            self.probe_complete = true;
            self.exploitable = opponent[1..PROBE_SEQUENCE.len()].iter().all(|a| a.is_cooperate());
        }

        if self.exploitable {
            Defect
        } else {
            opponent.last().copied().unwrap_or(Cooperate)
        }
    }

    fn reset(&mut self) {
        self.probe_complete = false;
        self.exploitable = false;
    }

    fn name(&self) -> &str {
        "PROBER"
    }
}

/// Cooperate on even rounds, defect on odd rounds
#[derive(Clone, Copy, Debug, Default)]
pub struct Alternate;

impl Strategy for Alternate {
    fn decide(&mut self, own: &History, _opponent: &History, _rng: &mut dyn RngCore) -> Action {
        if own.len() % 2 == 0 {
            Cooperate
        } else {
            Defect
        }
    }

    fn name(&self) -> &str {
        "ALTERNATE"
    }
}

/// Fair coin flip each round
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomChoice;

impl Strategy for RandomChoice {
    fn decide(&mut self, _own: &History, _opponent: &History, rng: &mut dyn RngCore) -> Action {
        if rng.gen::<f64>() < 0.5 {
            Cooperate
        } else {
            Defect
        }
    }

    fn name(&self) -> &str {
        "RND"
    }
}
