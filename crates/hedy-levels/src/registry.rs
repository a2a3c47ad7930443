//! The level → (command set, rendering rules) table.

use std::sync::LazyLock;

use hedy_types::HedyError;

/// Highest level with a registry entry.
pub const MAX_LEVEL: u32 = 22;

/// Discriminates the command kinds the emitter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Print,
    Ask,
    Echo,
    Forward,
    Turn,
}

/// A single keyword's definition: its kind, argument requirement, and the
/// level range in which it is active.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    pub keyword: &'static str,
    pub kind: CommandKind,
    /// A command with this flag fails as incomplete when its line carries
    /// no argument.
    pub needs_argument: bool,
    /// First level at which the keyword is active.
    pub min_level: u32,
    /// Last level at which the keyword is active; `None` means up to the
    /// current maximum.
    pub max_level: Option<u32>,
}

impl CommandDef {
    fn active_at(&self, level: u32) -> bool {
        level >= self.min_level && self.max_level.is_none_or(|max| level <= max)
    }
}

/// Rendering configuration for one level.
///
/// These are the named constants behind the emitter's output. A later
/// level that re-renders existing keywords gets its own block; the emitter
/// logic itself stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Fixed variable bound by the input-capture command.
    pub input_variable: &'static str,
    /// Distance used when `forward` has no usable numeric argument.
    pub default_forward_distance: u32,
    /// Fixed rotation angle for `turn`.
    pub turn_angle: u32,
    /// Pause emitted after every motion statement, in seconds.
    pub forward_pause_seconds: &'static str,
}

/// One level's view of the registry: its active commands and rendering
/// rules.
#[derive(Debug, Clone)]
pub struct LevelDef {
    pub level: u32,
    commands: Vec<CommandDef>,
    pub render: RenderConfig,
}

impl LevelDef {
    /// Exact, case-sensitive keyword lookup.
    pub fn command(&self, keyword: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.keyword == keyword)
    }

    /// Command definitions active at this level, in definition order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Keywords active at this level, in definition order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.keyword)
    }
}

const LEVEL_1_RENDER: RenderConfig = RenderConfig {
    input_variable: "answer",
    default_forward_distance: 50,
    turn_angle: 90,
    forward_pause_seconds: "0.1",
};

/// Every command definition across all levels.
///
/// Adding a level is a pure data change: append entries carrying the new
/// `min_level`, or close an existing entry's `max_level` when the new
/// level retires or redefines its keyword.
const COMMANDS: &[CommandDef] = &[
    CommandDef {
        keyword: "print",
        kind: CommandKind::Print,
        needs_argument: true,
        min_level: 1,
        max_level: None,
    },
    CommandDef {
        keyword: "ask",
        kind: CommandKind::Ask,
        needs_argument: false,
        min_level: 1,
        max_level: None,
    },
    CommandDef {
        keyword: "echo",
        kind: CommandKind::Echo,
        needs_argument: false,
        min_level: 1,
        max_level: None,
    },
    CommandDef {
        keyword: "forward",
        kind: CommandKind::Forward,
        needs_argument: false,
        min_level: 1,
        max_level: None,
    },
    CommandDef {
        keyword: "turn",
        kind: CommandKind::Turn,
        needs_argument: false,
        min_level: 1,
        max_level: None,
    },
];

/// The full level table.
#[derive(Debug)]
pub struct Registry {
    levels: Vec<LevelDef>,
}

impl Registry {
    /// Build the table for levels `1..=MAX_LEVEL`.
    fn new() -> Self {
        let levels = (1..=MAX_LEVEL)
            .map(|level| LevelDef {
                level,
                commands: COMMANDS
                    .iter()
                    .copied()
                    .filter(|c| c.active_at(level))
                    .collect(),
                render: LEVEL_1_RENDER,
            })
            .collect();
        Self { levels }
    }

    /// Look up the definition for a requested level.
    pub fn level(&self, level: u32) -> Result<&LevelDef, HedyError> {
        level
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx as usize))
            .ok_or(HedyError::InvalidLevel { level })
    }
}

/// Process-wide registry instance.
///
/// Built on first use, read-only thereafter; concurrent compiles share it
/// without locking.
pub fn registry() -> &'static Registry {
    static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);
    &REGISTRY
}
