use crate::types::Position;

/// A legal square paired with its heuristic score for one selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub position: Position,
    pub score: i32,
}

impl MoveCandidate {
    pub fn new(position: Position, score: i32) -> Self {
        Self { position, score }
    }
}

/// Highest score wins; ties keep the earliest candidate.
pub fn pick_best(candidates: impl IntoIterator<Item = MoveCandidate>) -> Option<MoveCandidate> {
    candidates
        .into_iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(x: usize, y: usize, score: i32) -> MoveCandidate {
        MoveCandidate::new(Position::new(x, y).unwrap(), score)
    }

    #[test]
    fn pick_best_prefers_first_of_equal_scores() {
        let best = pick_best([candidate(0, 0, 5), candidate(1, 0, 9), candidate(2, 0, 9)]);

        assert_eq!(best, Some(candidate(1, 0, 9)));
    }

    #[test]
    fn pick_best_of_nothing_is_none() {
        assert_eq!(pick_best(Vec::new()), None);
    }
}
