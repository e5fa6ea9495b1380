use ndarray::{s, Array4, ArrayView1};

/// Bins per discretized state dimension.
const BINS: usize = 100;
/// Number of selectable actions.
const ACTIONS: usize = 3;

/// Discrete R&D investment recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Low,
    Medium,
    High,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Low => "Low R&D Investment",
            Action::Medium => "Medium R&D Investment",
            Action::High => "High R&D Investment",
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => Action::Low,
            1 => Action::Medium,
            _ => Action::High,
        }
    }
}

/// Placeholder decision table: 100x100x100 discretized states, one score per
/// action. Allocated zero-filled and never trained, so every lookup ties and
/// arg-max resolves to the lowest action index (`Action::Low`). Kept as-is
/// until a trained policy replaces it.
#[derive(Debug)]
pub struct PolicyTable {
    q: Array4<f64>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self {
            q: Array4::zeros((BINS, BINS, BINS, ACTIONS)),
        }
    }

    /// Maps a raw input onto a table index: integer-divide by 2, clamp into
    /// [0, 99]. Negative inputs land on bin 0, inputs >= 198 on bin 99.
    pub fn discretize(value: f64) -> usize {
        let bin = (value / 2.0).floor() as i64;
        bin.clamp(0, BINS as i64 - 1) as usize
    }

    pub fn recommend(&self, market_value: f64, r_and_d: f64, competitor_threat: f64) -> Action {
        let i = Self::discretize(market_value);
        let j = Self::discretize(r_and_d);
        let k = Self::discretize(competitor_threat);

        Action::from_index(argmax(self.q.slice(s![i, j, k, ..])))
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the maximum score, ties broken by lowest index.
fn argmax(scores: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = index;
        }
    }
    best
}
