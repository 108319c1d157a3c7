use bevy::prelude::*;
use dots::GameModel;
use dots_plugin::events::PuzzleSolvedEvent;
use resources::ScoreResource;
use score::{PlayerName, Score};
use tracing::info;
use tracing_log::LogTracer;
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

pub mod configuration;
pub mod dots;
mod dots_plugin;
pub mod score;

pub use dots_plugin::{events, DotsPlugin};

/// A whole play session: the puzzle plus who is playing it.
pub struct MainPlugin {
    pub game: GameModel,
    pub player: PlayerName,
}

impl Plugin for MainPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.player.clone())
            .insert_resource(ScoreResource::default())
            .add_plugin(DotsPlugin {
                game: self.game.clone(),
            })
            .add_system(record_score.after("play"));
    }
}

fn record_score(
    mut puzzle_solved_event_reader: EventReader<PuzzleSolvedEvent>,
    player: Res<PlayerName>,
    mut score: ResMut<ScoreResource>,
) {
    for event in puzzle_solved_event_reader.iter() {
        info!("Congratulations {}, you won in {} steps!", player.0, event.steps);
        score.latest = Some(Score::new(&player, event.steps));
    }
}

/// How log lines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {:?}", other)),
        }
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over
/// `default_filter`. Calling it again is a no-op.
pub fn setup_logging(default_filter: &str, format: LogFormat) {
    if LogTracer::init().is_err() {
        return;
    }

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (text_layer, json_layer) = match format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::Layer::default()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::Layer::default().json())),
    };
    let subscriber = Registry::default()
        .with(filter_layer)
        .with(text_layer)
        .with(json_layer);

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot install the log subscriber: {}", error);
    }
}

pub mod resources {
    use crate::score::Score;

    /// Score of the session, filled in once the puzzle is solved.
    #[derive(Debug, Default)]
    pub struct ScoreResource {
        pub latest: Option<Score>,
    }
}
