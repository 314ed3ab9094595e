//! Minimax search with alpha-beta pruning.
//!
//! The engine recurses over one board, applying a candidate, scoring the
//! child and undoing it before looking at the next sibling. An inverse move
//! rejected by the board means the generator and the board disagree; search
//! panics rather than continue on a corrupted position.

use super::{
    Board, EngineError, EngineErrorKind, Evaluator, Move, MoveGenerator, Symbol, candidates, first_legal,
    opponent_of,
};
use tracing::{debug, info, instrument};

/// Base score of a forced win. Shallower wins add their remaining depth.
pub const WIN_BONUS: i32 = 1_000_000;

/// Bound applied to every heuristic score.
pub const MAX_HEURISTIC: i32 = WIN_BONUS / 10;

const INFINITY: i32 = i32::MAX;

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move.
    pub best: Move,
    /// Minimax score of the chosen move from the mover's point of view.
    pub score: i32,
    /// Nodes entered below the root.
    pub nodes: u64,
    /// True when the node budget cut the search short.
    pub budget_exhausted: bool,
}

/// Anything that can pick a move for `own` on a board.
pub trait Strategy<B: ?Sized> {
    /// Chooses a move for `own`. The board is restored before returning.
    fn choose(&self, board: &mut B, own: Symbol) -> Result<SearchOutcome, EngineError>;
}

#[derive(Debug, Default)]
struct Walk {
    nodes: u64,
    exhausted: bool,
}

/// Depth-limited minimax searcher.
///
/// `max_depth` counts plies including the root move, so a depth of 1 scores
/// each candidate by looking only at the position it produces.
#[derive(Debug, Clone)]
pub struct Searcher<G, E> {
    generator: G,
    evaluator: E,
    opponent: fn(Symbol) -> Symbol,
    max_depth: u32,
    node_budget: Option<u64>,
}

impl<G, E> Searcher<G, E> {
    /// Creates a searcher with the X/O opponent resolver and no node budget.
    pub fn new(generator: G, evaluator: E, max_depth: u32) -> Self {
        Self {
            generator,
            evaluator,
            opponent: opponent_of,
            max_depth: max_depth.max(1),
            node_budget: None,
        }
    }

    /// Caps the nodes entered per top-level search.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    fn opponent(&self, own: Symbol) -> Symbol {
        (self.opponent)(own)
    }
}

impl<G, E> Searcher<G, E> {
    /// Picks the best move for `own` with alpha-beta pruning.
    ///
    /// Every root candidate is searched with fresh bounds; ties keep the
    /// first candidate in enumeration order. The board is restored on return.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::NoLegalMove`] when `own` has no candidate.
    #[instrument(skip(self, board), fields(depth = self.max_depth))]
    pub fn choose_move<B>(&self, board: &mut B, own: Symbol) -> Result<SearchOutcome, EngineError>
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
        E: Evaluator<B>,
    {
        let opp = self.opponent(own);
        let mut walk = Walk::default();
        let mut best: Option<(Move, i32)> = None;

        for mv in candidates(&self.generator, board, own) {
            if !board.apply(&mv) {
                debug!(%mv, "board refused generated candidate");
                continue;
            }
            let score = self.search(board, false, own, opp, -INFINITY, INFINITY, self.max_depth - 1, &mut walk);
            self.undo(board, &mv);
            debug!(%mv, score, "root candidate scored");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((mv, score));
            }
        }

        let (best, score) = match best {
            Some(found) => found,
            None => {
                let mv = first_legal(&self.generator, board, own)
                    .filter(|mv| self.accepts(board, mv))
                    .ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove(own)))?;
                (mv, self.heuristic(board, own, opp))
            }
        };

        info!(
            %best,
            score,
            nodes = walk.nodes,
            budget_exhausted = walk.exhausted,
            "search finished"
        );
        Ok(SearchOutcome {
            best,
            score,
            nodes: walk.nodes,
            budget_exhausted: walk.exhausted,
        })
    }

    /// Unpruned minimax score of every root candidate, in enumeration order.
    ///
    /// Ignores the node budget. Intended for checking the pruned search.
    pub fn exhaustive_scores<B>(&self, board: &mut B, own: Symbol) -> Vec<(Move, i32)>
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
        E: Evaluator<B>,
    {
        let opp = self.opponent(own);
        let mut scores = Vec::new();
        for mv in candidates(&self.generator, board, own) {
            if !board.apply(&mv) {
                continue;
            }
            let score = self.minimax(board, false, own, opp, self.max_depth - 1);
            self.undo(board, &mv);
            scores.push((mv, score));
        }
        scores
    }

    #[allow(clippy::too_many_arguments)]
    fn search<B>(
        &self,
        board: &mut B,
        maximizing: bool,
        own: Symbol,
        opp: Symbol,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        walk: &mut Walk,
    ) -> i32
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
        E: Evaluator<B>,
    {
        walk.nodes += 1;
        if let Some(score) = self.decided(board, own, opp, depth) {
            return score;
        }
        if self.node_budget.is_some_and(|cap| walk.nodes > cap) {
            walk.exhausted = true;
            return self.heuristic(board, own, opp);
        }
        if depth == 0 {
            return self.heuristic(board, own, opp);
        }

        let mover = if maximizing { own } else { opp };
        let moves = candidates(&self.generator, board, mover);
        if moves.is_empty() {
            return self.heuristic(board, own, opp);
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            if !board.apply(&mv) {
                continue;
            }
            let score = self.search(board, !maximizing, own, opp, alpha, beta, depth - 1, walk);
            self.undo(board, &mv);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    fn minimax<B>(&self, board: &mut B, maximizing: bool, own: Symbol, opp: Symbol, depth: u32) -> i32
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
        E: Evaluator<B>,
    {
        if let Some(score) = self.decided(board, own, opp, depth) {
            return score;
        }
        if depth == 0 {
            return self.heuristic(board, own, opp);
        }
        let mover = if maximizing { own } else { opp };
        let mut scores = Vec::new();
        for mv in candidates(&self.generator, board, mover) {
            if !board.apply(&mv) {
                continue;
            }
            scores.push(self.minimax(board, !maximizing, own, opp, depth - 1));
            self.undo(board, &mv);
        }
        let folded = if maximizing {
            scores.into_iter().max()
        } else {
            scores.into_iter().min()
        };
        folded.unwrap_or_else(|| self.heuristic(board, own, opp))
    }

    /// Score of a finished game: own win, opponent win, then draw.
    fn decided<B: Board + ?Sized>(&self, board: &B, own: Symbol, opp: Symbol, depth: u32) -> Option<i32> {
        if board.is_win(own) {
            Some(WIN_BONUS + depth as i32)
        } else if board.is_win(opp) {
            Some(-WIN_BONUS - depth as i32)
        } else if board.is_draw(own) {
            Some(0)
        } else {
            None
        }
    }

    fn heuristic<B>(&self, board: &B, own: Symbol, opp: Symbol) -> i32
    where
        B: Board + ?Sized,
        E: Evaluator<B>,
    {
        self.evaluator
            .evaluate(board, own, opp)
            .clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
    }

    /// True when the board takes `mv`. The board is left unchanged.
    fn accepts<B>(&self, board: &mut B, mv: &Move) -> bool
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
    {
        if !board.apply(mv) {
            return false;
        }
        self.undo(board, mv);
        true
    }

    fn undo<B>(&self, board: &mut B, applied: &Move)
    where
        B: Board + ?Sized,
        G: MoveGenerator<B>,
    {
        let inverse = self.generator.inverse(board, applied);
        if !board.apply(&inverse) {
            let err = EngineError::new(EngineErrorKind::UndoRejected(inverse));
            panic!("{err}");
        }
    }
}

impl<B, G, E> Strategy<B> for Searcher<G, E>
where
    B: Board + ?Sized,
    G: MoveGenerator<B>,
    E: Evaluator<B>,
{
    fn choose(&self, board: &mut B, own: Symbol) -> Result<SearchOutcome, EngineError> {
        self.choose_move(board, own)
    }
}
