//! Level registry for the Hedy transpiler.
//!
//! Maps a proficiency level to its active command set and rendering
//! configuration. The table is static data built once at startup; every
//! other stage consults it instead of branching on level numbers, so
//! adding a level is a data change, not a logic change.

mod registry;

pub use registry::{
    registry, CommandDef, CommandKind, LevelDef, Registry, RenderConfig, MAX_LEVEL,
};
