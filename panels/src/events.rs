//! Input event types consumed by the state machines.

use crate::geometry::Point;

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Only shift held
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };
}

/// Pointer event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved (button state unchanged)
    Move,
    /// Primary button released
    Up,
    /// Pointer left the viewport or the gesture was aborted
    Leave,
}

/// Pointer event in list coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Type of event
    pub kind: PointerKind,
    /// Pointer position
    pub position: Point,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn leave(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Leave, x, y)
    }
}

/// Checkbox click on a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEvent<I> {
    /// Row the checkbox belongs to
    pub id: I,
    /// New checkbox value
    pub value: bool,
    /// Modifier keys held during the click
    pub modifiers: Modifiers,
}
