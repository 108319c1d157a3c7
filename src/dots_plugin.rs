use bevy::prelude::*;
use tracing::{debug, warn};

use crate::dots::{GameModel, GameSnapshot};

use self::events::{DotMovedEvent, MoveRejectedEvent, MoveRequest, PuzzleSolvedEvent};

/// Drives a [`GameModel`] from [`MoveRequest`] events and reports what
/// happened through the other events in [`events`].
pub struct DotsPlugin {
    pub game: GameModel,
}

impl Plugin for DotsPlugin {
    fn build(&self, app: &mut App) {
        let snapshot = self.game.snapshot();

        app.insert_resource(snapshot)
            .insert_resource(self.game.clone())
            .add_event::<MoveRequest>()
            .add_event::<DotMovedEvent>()
            .add_event::<PuzzleSolvedEvent>()
            .add_event::<MoveRejectedEvent>()
            .add_system(play.label("play"));
    }
}

fn play(
    mut requests: EventReader<MoveRequest>,
    mut game: ResMut<GameModel>,
    mut snapshot: ResMut<GameSnapshot>,
    mut dot_moved_event_writer: EventWriter<DotMovedEvent>,
    mut puzzle_solved_event_writer: EventWriter<PuzzleSolvedEvent>,
    mut move_rejected_event_writer: EventWriter<MoveRejectedEvent>,
) {
    for request in requests.iter() {
        // Whoever listens for the win ends the session, later input is noise
        if snapshot.solved {
            debug!("already solved, ignoring {:?}", request);
            continue;
        }

        debug!("request {:?}", request);

        let result = match request {
            MoveRequest::Step(direction) => game.apply_move(*direction),
            MoveRequest::Toward(target) => game
                .direction_to(target)
                .and_then(|direction| game.apply_move(direction)),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!("{:?} rejected: {}", request, error);
                move_rejected_event_writer.send(MoveRejectedEvent { error });
                continue;
            }
        };

        for moved in outcome.moves {
            dot_moved_event_writer.send(DotMovedEvent(moved));
        }
        if outcome.solved() {
            puzzle_solved_event_writer.send(PuzzleSolvedEvent {
                steps: outcome.snapshot.steps,
            });
        }

        *snapshot = outcome.snapshot;
    }
}

pub mod events {
    use crate::dots::{Direction, DotMoved, GameError, Position};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MoveRequest {
        /// Move the primary dot this way.
        Step(Direction),
        /// Move the primary dot onto this neighbouring cell.
        Toward(Position),
    }

    /// Sent twice per accepted move, primary dot first.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DotMovedEvent(pub DotMoved);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PuzzleSolvedEvent {
        pub steps: usize,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MoveRejectedEvent {
        pub error: GameError,
    }
}
