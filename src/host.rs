//! Glue between pointer input, the running game and the score store.

use crate::core::{ActiveGame, Game};
use crate::input::Gesture;
use crate::portal::HighScores;
use crate::term::GridLayout;
use crate::types::{GameAction, GameKind};

/// Turn a mouse gesture into a game action.
///
/// 2048 reads drags as swipes. The puzzles take a drag between two cells as
/// drag-and-drop; Chain Reaction and Schulte treat a drag as a click on the
/// cell where it started.
pub fn gesture_action(kind: GameKind, gesture: Gesture, layout: &GridLayout) -> Option<GameAction> {
    if kind == GameKind::Twenty48 {
        return gesture.swipe().map(GameAction::Move);
    }
    if !kind.is_pointer_game() {
        return None;
    }
    match gesture {
        Gesture::Click(pos) => layout.hit_test(pos).map(GameAction::Select),
        Gesture::Drag { from, to } => {
            let from = layout.hit_test(from)?;
            let puzzle = matches!(kind, GameKind::SlidingPuzzle | GameKind::SwapPuzzle);
            match layout.hit_test(to) {
                Some(to) if puzzle && to != from => Some(GameAction::Drag { from, to }),
                _ => Some(GameAction::Select(from)),
            }
        }
    }
}

/// Store the game's score if it beats the saved best; true when it did
pub fn record_score(scores: &mut HighScores, game: &ActiveGame) -> bool {
    match (game.kind().highscore_key(), game.score()) {
        (Some(key), Some(score)) => scores.record(key, score),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameOptions;
    use crate::types::Direction;

    fn layout() -> GridLayout {
        GridLayout {
            x: 0,
            y: 0,
            cols: 3,
            rows: 3,
            cell_w: 6,
            cell_h: 3,
        }
    }

    #[test]
    fn swipes_steer_2048_only() {
        let swipe = Gesture::Drag {
            from: (10, 5),
            to: (2, 5),
        };
        assert_eq!(
            gesture_action(GameKind::Twenty48, swipe, &layout()),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(gesture_action(GameKind::TetrisClassic, swipe, &layout()), None);
        assert_eq!(
            gesture_action(GameKind::Twenty48, Gesture::Click((1, 1)), &layout()),
            None
        );
    }

    #[test]
    fn clicks_select_cells() {
        let click = Gesture::Click((8, 5));
        assert_eq!(
            gesture_action(GameKind::Schulte, click, &layout()),
            Some(GameAction::Select((1, 1)))
        );
        assert_eq!(gesture_action(GameKind::Schulte, Gesture::Click((0, 0)), &layout()), None);
    }

    #[test]
    fn drags_between_cells() {
        let drag = Gesture::Drag {
            from: (2, 2),
            to: (14, 8),
        };
        assert_eq!(
            gesture_action(GameKind::SwapPuzzle, drag, &layout()),
            Some(GameAction::Drag {
                from: (0, 0),
                to: (2, 2)
            })
        );
        assert_eq!(
            gesture_action(GameKind::ChainReaction, drag, &layout()),
            Some(GameAction::Select((0, 0)))
        );
        // dropped outside the grid: treated as a click on the source
        let off = Gesture::Drag {
            from: (2, 2),
            to: (60, 2),
        };
        assert_eq!(
            gesture_action(GameKind::SlidingPuzzle, off, &layout()),
            Some(GameAction::Select((0, 0)))
        );
    }

    #[test]
    fn only_scored_games_are_recorded() {
        let mut scores = HighScores::in_memory();
        let options = GameOptions::default();

        let mut tetris = ActiveGame::new(GameKind::TetrisMarathon, &options);
        tetris.apply_action(GameAction::HardDrop);
        assert!(record_score(&mut scores, &tetris));
        assert!(scores.get("tetris-marathon-highscore") > 0);
        assert!(!record_score(&mut scores, &tetris));

        let chain = ActiveGame::new(GameKind::ChainReaction, &options);
        assert!(!record_score(&mut scores, &chain));
    }
}
