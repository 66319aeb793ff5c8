//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be shared by
//! the engine core, the event loop, the key map and the terminal renderer.
//!
//! # Field Dimensions
//!
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Columns**: 11 (indexed 0-10, left to right)
//! - **Piece window**: 5x5 around the anchor; also the size of the next-piece preview
//! - **Spawn anchor**: row -5 (above the visible field), column 5
//!
//! # Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LEVEL_CAP` | 10 | Highest reachable level |
//! | `ROWS_PER_LEVEL` | 5 | Cleared rows needed per level |
//! | `SCORE_PER_ROW` | 100 | Base points, multiplied by rows² in one cascade |
//! | `GHOST_OFF_BONUS` | 2 | Score multiplier when the ghost preview is off |
//! | `BASE_FALL_MS` | 800 | Fall interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//!
//! # Examples
//!
//! ```
//! use tui_pentris_types::{Cell, GameInput, PieceKind, Rotation, FIELD_COLS, FIELD_ROWS};
//!
//! assert_eq!(PieceKind::from_str("w"), Some(PieceKind::W));
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(GameInput::from_str("space"), Some(GameInput::Space));
//! assert_eq!(Cell::Ghost.tag(), 16);
//! assert_eq!((FIELD_ROWS, FIELD_COLS), (22, 11));
//! ```

/// Number of rows of the main field
pub const FIELD_ROWS: usize = 22;

/// Number of columns of the main field
pub const FIELD_COLS: usize = 11;

/// Maximum number of cells of a piece; also the side of the square window
/// the shape offsets live in and of the next-piece preview grid.
pub const PIECE_WINDOW: usize = 5;

/// Anchor row new pieces are created at (fully above the field)
pub const SPAWN_ROW: i16 = -(PIECE_WINDOW as i16);

/// Anchor column new pieces are created at
pub const SPAWN_COL: i16 = (FIELD_COLS / 2) as i16;

/// Anchor of the piece drawn in the preview grid
pub const PREVIEW_ANCHOR: (i16, i16) = ((PIECE_WINDOW / 2) as i16, (PIECE_WINDOW / 2) as i16);

/// Highest reachable level
pub const LEVEL_CAP: u32 = 10;

/// Completed rows required to level up
pub const ROWS_PER_LEVEL: u32 = 5;

/// Score for a single completed row
pub const SCORE_PER_ROW: u32 = 100;

/// Score multiplier granted when the ghost preview is disabled
pub const GHOST_OFF_BONUS: u32 = 2;

/// Fall interval at level 1 (milliseconds)
pub const BASE_FALL_MS: u32 = 800;

/// Fall interval reduction per level (milliseconds)
pub const FALL_STEP_MS: u32 = 50;


/// The fifteen solid piece kinds
///
/// Fourteen of them are five-cell pentominoes (the asymmetric ones come with
/// their mirror image); `IShort` is the four-cell bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    F,
    FMirror,
    I,
    L,
    LMirror,
    N,
    NMirror,
    P,
    PMirror,
    T,
    U,
    W,
    Y,
    YMirror,
    IShort,
}

impl PieceKind {
    /// Number of spawnable kinds
    pub const COUNT: usize = 15;

    /// All kinds, in table order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::F,
        PieceKind::FMirror,
        PieceKind::I,
        PieceKind::L,
        PieceKind::LMirror,
        PieceKind::N,
        PieceKind::NMirror,
        PieceKind::P,
        PieceKind::PMirror,
        PieceKind::T,
        PieceKind::U,
        PieceKind::W,
        PieceKind::Y,
        PieceKind::YMirror,
        PieceKind::IShort,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from its short name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pentris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("f"), Some(PieceKind::F));
    /// assert_eq!(PieceKind::from_str("F'"), Some(PieceKind::FMirror));
    /// assert_eq!(PieceKind::from_str("i4"), Some(PieceKind::IShort));
    /// assert_eq!(PieceKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|k| k.as_str() == lower)
    }

    /// Lowercase short name; mirrored kinds carry a trailing `'`
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::F => "f",
            PieceKind::FMirror => "f'",
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::LMirror => "l'",
            PieceKind::N => "n",
            PieceKind::NMirror => "n'",
            PieceKind::P => "p",
            PieceKind::PMirror => "p'",
            PieceKind::T => "t",
            PieceKind::U => "u",
            PieceKind::W => "w",
            PieceKind::Y => "y",
            PieceKind::YMirror => "y'",
            PieceKind::IShort => "i4",
        }
    }
}

/// Rotation states, one quarter turn clockwise apart
///
/// The numeric rotation index used by the shape table is
/// North = 0, East = 1, South = 2, West = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°), i.e. `(index + 1) mod 4`
    ///
    /// ```
    /// use tui_pentris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an arbitrary index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Translation directions for a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(d_row, d_col)` of a single step
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// A cell of a grid
///
/// The semantic kind of a settled or falling block is kept apart from the
/// ghost marker; renderers decide colours from these, the core never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Part of the drop-position preview; never blocks movement
    Ghost,
    Block(PieceKind),
}

impl Cell {
    /// Tag written for ghost cells in [`Cell::tag`]
    pub const GHOST_TAG: u8 = PieceKind::COUNT as u8 + 1;

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Whether the cell holds a block (settled or active), as opposed to
    /// being empty or showing the ghost
    pub fn is_block(&self) -> bool {
        matches!(self, Cell::Block(_))
    }

    /// Integer tag for external consumers: 0 = empty, 1..=15 = kind, 16 = ghost
    pub fn tag(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Block(kind) => kind.index() as u8 + 1,
            Cell::Ghost => Self::GHOST_TAG,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Cell::Empty),
            Self::GHOST_TAG => Some(Cell::Ghost),
            t => PieceKind::from_index(t as usize - 1).map(Cell::Block),
        }
    }
}

/// Discrete input symbols, already decoded from raw key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    /// Rotate while playing; move the cursor up in menus
    Up,
    /// Step down while playing; move the cursor down in menus
    Down,
    Left,
    Right,
    /// Drop the piece to its resting row
    Space,
    /// Open the pause menu
    Menu,
    /// Confirm the selected menu entry
    Enter,
}

impl GameInput {
    /// Parse input from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameInput::Up),
            "down" => Some(GameInput::Down),
            "left" => Some(GameInput::Left),
            "right" => Some(GameInput::Right),
            "space" => Some(GameInput::Space),
            "menu" => Some(GameInput::Menu),
            "enter" => Some(GameInput::Enter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameInput::Up => "up",
            GameInput::Down => "down",
            GameInput::Left => "left",
            GameInput::Right => "right",
            GameInput::Space => "space",
            GameInput::Menu => "menu",
            GameInput::Enter => "enter",
        }
    }
}

/// Status of a round; decides which input map applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Running,
    /// Paused, with the pause menu open
    Menu,
    GameOver,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Running => "running",
            RoundStatus::Menu => "menu",
            RoundStatus::GameOver => "game_over",
        }
    }
}

/// Entries of the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PauseChoice {
    #[default]
    Play,
    Restart,
    Back,
}

impl PauseChoice {
    pub const ALL: [PauseChoice; 3] = [PauseChoice::Play, PauseChoice::Restart, PauseChoice::Back];

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PauseChoice::Play => "Play",
            PauseChoice::Restart => "Restart",
            PauseChoice::Back => "Back",
        }
    }
}

/// Entries of the game-over menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOverChoice {
    #[default]
    Restart,
    Back,
}

impl GameOverChoice {
    pub const ALL: [GameOverChoice; 2] = [GameOverChoice::Restart, GameOverChoice::Back];

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        self.next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameOverChoice::Restart => "Restart",
            GameOverChoice::Back => "Back",
        }
    }
}
