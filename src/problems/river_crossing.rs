//! The wolf/goat/cabbage river-crossing puzzle.

use std::fmt;

use crate::{
    error::{Result, SearchError},
    search::problem::SearchProblem,
};

/// Which side of the river something is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    fn across(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }

    fn letter(self) -> char {
        match self {
            Bank::Left => 'L',
            Bank::Right => 'R',
        }
    }
}

/// Positions of the farmer and the three passengers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverState {
    pub farmer: Bank,
    pub wolf: Bank,
    pub goat: Bank,
    pub cabbage: Bank,
}

impl RiverState {
    pub fn all_on(bank: Bank) -> Self {
        Self {
            farmer: bank,
            wolf: bank,
            goat: bank,
            cabbage: bank,
        }
    }

    /// Nothing gets eaten: the goat may not share a bank with the wolf or
    /// the cabbage unless the farmer is there too.
    pub fn is_safe(&self) -> bool {
        if self.goat == self.wolf && self.farmer != self.goat {
            return false;
        }
        if self.goat == self.cabbage && self.farmer != self.goat {
            return false;
        }
        true
    }

    /// Parses four `L`/`R` letters (farmer, wolf, goat, cabbage).
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim().to_ascii_uppercase();
        let banks: Vec<Bank> = text
            .chars()
            .map(|ch| match ch {
                'L' => Ok(Bank::Left),
                'R' => Ok(Bank::Right),
                other => Err(SearchError::MalformedInput(format!(
                    "river state may only contain L or R, got {other:?}"
                ))),
            })
            .collect::<Result<_, _>>()?;
        let &[farmer, wolf, goat, cabbage] = banks.as_slice() else {
            return Err(SearchError::MalformedInput(
                "river state must be exactly 4 letters, e.g. LLLL".into(),
            )
            .into());
        };
        Ok(Self {
            farmer,
            wolf,
            goat,
            cabbage,
        })
    }
}

/// One boat trip. The farmer always crosses; a passenger may ride along if
/// it is on the farmer's bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    Alone,
    TakeWolf,
    TakeGoat,
    TakeCabbage,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Crossing::Alone => "Cross alone",
            Crossing::TakeWolf => "Move Wolf",
            Crossing::TakeGoat => "Move Goat",
            Crossing::TakeCabbage => "Move Cabbage",
        };
        f.write_str(label)
    }
}

/// The river-crossing domain: get everyone from one bank to the other
/// without leaving the goat unsupervised with the wolf or the cabbage.
#[derive(Debug, Clone)]
pub struct RiverCrossing {
    start: RiverState,
    goal: RiverState,
}

impl RiverCrossing {
    pub fn new(start: RiverState, goal: RiverState) -> Self {
        Self { start, goal }
    }

    /// The classical instance: everyone starts on the left bank and must
    /// reach the right bank.
    pub fn classic() -> Self {
        Self::new(
            RiverState::all_on(Bank::Left),
            RiverState::all_on(Bank::Right),
        )
    }

    pub fn from_start(start: RiverState) -> Self {
        Self::new(start, RiverState::all_on(Bank::Right))
    }
}

impl SearchProblem for RiverCrossing {
    type State = RiverState;
    type Action = Crossing;

    fn start(&self) -> RiverState {
        self.start
    }

    fn actions(&self, state: &RiverState) -> Vec<Crossing> {
        let mut actions = vec![Crossing::Alone];
        if state.farmer == state.wolf {
            actions.push(Crossing::TakeWolf);
        }
        if state.farmer == state.goat {
            actions.push(Crossing::TakeGoat);
        }
        if state.farmer == state.cabbage {
            actions.push(Crossing::TakeCabbage);
        }
        actions
    }

    fn transition(&self, state: &RiverState, action: &Crossing) -> Result<RiverState> {
        let mut next = *state;
        next.farmer = state.farmer.across();
        match action {
            Crossing::Alone => {}
            Crossing::TakeWolf if state.wolf == state.farmer => {
                next.wolf = state.wolf.across();
            }
            Crossing::TakeGoat if state.goat == state.farmer => {
                next.goat = state.goat.across();
            }
            Crossing::TakeCabbage if state.cabbage == state.farmer => {
                next.cabbage = state.cabbage.across();
            }
            other => {
                return Err(SearchError::InvalidAction {
                    state: self.format_state(state),
                    action: other.to_string(),
                }
                .into())
            }
        }
        Ok(next)
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        *state == self.goal
    }

    fn is_valid(&self, state: &RiverState) -> bool {
        state.is_safe()
    }

    fn format_state(&self, state: &RiverState) -> String {
        format!(
            "({},{},{},{})",
            state.farmer.letter(),
            state.wolf.letter(),
            state.goat.letter(),
            state.cabbage.letter()
        )
    }
}
