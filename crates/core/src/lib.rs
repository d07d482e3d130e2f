pub mod config;
pub mod content;
pub mod engine;
pub mod host;
pub mod rewards;
pub mod rotation;
pub mod state;
pub mod state_file;
pub mod types;

pub use config::{EngineConfig, RotationOverride};
pub use content::ContentCatalog;
pub use engine::{AdvanceError, BattleScaling, DialogKind, DungeonEngine, EnterError, SetupError};
pub use host::{ChaChaRandom, Clock, FixedClock, PresentationSink, RandomSource, RecordingSink};
pub use state::{RotationState, RunState};
pub use state_file::{SaveData, StateLoadError, load_state, load_state_lenient, save_state};
pub use types::*;
