pub mod models;

pub use models::{EventType, FetchProgress, MatchDescriptor, PassData, Player, RawEvent, ShotData, Team};
