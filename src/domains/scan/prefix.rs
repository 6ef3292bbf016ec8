use crate::common::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Hoof,
    Paper,
    Scissors,
}

impl Gesture {
    pub fn parse(token: &str) -> DomainResult<Self> {
        match token {
            "H" => Ok(Gesture::Hoof),
            "P" => Ok(Gesture::Paper),
            "S" => Ok(Gesture::Scissors),
            other => Err(DomainError::invalid_input(format!("unknown gesture '{}'", other))),
        }
    }

    fn slot(self) -> usize {
        match self {
            Gesture::Hoof => 0,
            Gesture::Paper => 1,
            Gesture::Scissors => 2,
        }
    }
}

/// Most games won against a known sequence of gestures when we may switch
/// our own gesture at most once.
///
/// Matching a gesture count is enough: whichever gesture the opponent plays
/// most often in a stretch, the one beating it wins that many games.
pub fn hoof_paper_scissors(opponent: &[Gesture]) -> usize {
    let n = opponent.len();
    // counts[i][g]: occurrences of gesture g among the first i games
    let mut counts = vec![[0usize; 3]; n + 1];
    for (i, g) in opponent.iter().enumerate() {
        counts[i + 1] = counts[i];
        counts[i + 1][g.slot()] += 1;
    }

    let total = counts[n];
    (0..=n)
        .map(|split| {
            let before = counts[split];
            let head = before.iter().copied().max().unwrap_or(0);
            let tail = (0..3).map(|g| total[g] - before[g]).max().unwrap_or(0);
            head + tail
        })
        .max()
        .unwrap_or(0)
}
