use std::{env, error::Error};

use bevy::{ecs::event::Events, prelude::*};
use tracing::{info, warn};

use inverse_dots::{
    dots::{Direction, GameModel, GameSnapshot},
    events::{DotMovedEvent, MoveRejectedEvent, MoveRequest, PuzzleSolvedEvent},
    resources::ScoreResource,
    score::PlayerName,
    setup_logging, LogFormat, MainPlugin,
};

fn main() -> Result<(), Box<dyn Error>> {
    let format = match env::var("INVERSE_DOTS_LOG_FORMAT") {
        Ok(name) => name.parse::<LogFormat>()?,
        Err(_) => LogFormat::Text,
    };
    setup_logging("OFF,inverse_dots=INFO", format);

    let game: GameModel = include_str!("../levels/1.level").parse()?;
    let directions = env::args()
        .skip(1)
        .map(|arg| arg.parse::<Direction>())
        .collect::<Result<Vec<_>, _>>()?;
    let player = env::var("INVERSE_DOTS_PLAYER")
        .map(PlayerName)
        .unwrap_or_default();

    let mut app = create_app(game, player);

    for direction in directions {
        app.world
            .resource_mut::<Events<MoveRequest>>()
            .send(MoveRequest::Step(direction));
        app.update();
    }

    let snapshot = app.world.resource::<GameSnapshot>();
    println!("{}", serde_json::to_string_pretty(snapshot)?);

    if let Some(score) = &app.world.resource::<ScoreResource>().latest {
        println!("{}", serde_json::to_string(&[score])?);
    }

    Ok(())
}

fn create_app(game: GameModel, player: PlayerName) -> App {
    let mut app = App::new();
    app.add_plugin(MainPlugin { game, player })
        .add_system(log_events.after("play"));

    app
}

fn log_events(
    mut dot_moved_event_reader: EventReader<DotMovedEvent>,
    mut puzzle_solved_event_reader: EventReader<PuzzleSolvedEvent>,
    mut move_rejected_event_reader: EventReader<MoveRejectedEvent>,
) {
    for DotMovedEvent(moved) in dot_moved_event_reader.iter() {
        info!("{} moved {} -> {}", moved.dot, moved.from, moved.to);
    }
    for event in puzzle_solved_event_reader.iter() {
        info!("puzzle solved in {} steps", event.steps);
    }
    for event in move_rejected_event_reader.iter() {
        warn!("move rejected: {}", event.error);
    }
}

#[cfg(test)]
mod tests {
    use bevy::{ecs::event::Events, prelude::*};

    use inverse_dots::{
        dots::{Direction, GameModel, GameSnapshot, Position},
        events::{DotMovedEvent, MoveRequest},
        score::PlayerName,
    };

    use super::create_app;

    #[test]
    fn test_events_are_logged_and_left_for_other_readers() {
        let mut app = create_app(GameModel::canonical().unwrap(), PlayerName::default());

        for direction in [Direction::Down, Direction::Up, Direction::Down] {
            app.world
                .resource_mut::<Events<MoveRequest>>()
                .send(MoveRequest::Step(direction));
            app.update();
        }

        let snapshot = app.world.resource::<GameSnapshot>();
        assert_eq!(snapshot.primary, Position::new(1, 4));
        assert_eq!(snapshot.steps, 3);

        let events = app.world.resource::<Events<DotMovedEvent>>();
        let mut reader = events.get_reader();
        assert!(reader.iter(events).count() > 0);
    }
}
