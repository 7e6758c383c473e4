// Chunk: docs/chunks/keydown_events - Shared input types crate
//!
//! Input event types for keyboard and scroll handling.
//!
//! These types abstract over browser `KeyboardEvent` and `scroll` details and
//! provide a clean Rust-native interface for the keyboard interceptor. Host
//! glue converts DOM events with [`Key::from_dom_key`] and applies the returned
//! [`EventResponse`] flags (`preventDefault`, `stopPropagation`) to the
//! original event.

/// A keyboard event (keydown).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a named key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent from a DOM `KeyboardEvent.key` value.
    ///
    /// Returns `None` for keys the editor has no use for (function keys,
    /// media keys, dead keys).
    pub fn from_dom(key: &str, modifiers: Modifiers) -> Option<Self> {
        Key::from_dom_key(key).map(|key| Self { key, modifiers })
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt / Option key
    pub alt: bool,
    /// Meta key (Cmd on macOS, Windows key elsewhere)
    pub meta: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.meta
    }

    /// Returns true if a shortcut modifier (control or meta) is held.
    ///
    /// Keystrokes with these held are shortcuts, not text input.
    pub fn is_shortcut(&self) -> bool {
        self.control || self.meta
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Tab key
    Tab,
    /// Return / Enter
    Return,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Backspace
    Backspace,
    /// Forward delete
    Delete,
    /// Escape key
    Escape,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` string to a `Key`.
    ///
    /// Single-character values map to [`Key::Char`]; named keys use the names
    /// from the UI Events KeyboardEvent key values list.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let named = match key {
            "Tab" => Key::Tab,
            "Enter" => Key::Return,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Escape" | "Esc" => Key::Escape,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => {
                let mut chars = key.chars();
                return match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Key::Char(ch)),
                    _ => None,
                };
            }
        };
        Some(named)
    }

    /// Returns the legacy DOM `keyCode` for keys that have a stable one.
    pub fn key_code(&self) -> Option<u32> {
        match self {
            Key::Backspace => Some(8),
            Key::Tab => Some(9),
            Key::Return => Some(13),
            Key::Escape => Some(27),
            Key::PageUp => Some(33),
            Key::PageDown => Some(34),
            Key::End => Some(35),
            Key::Home => Some(36),
            Key::Left => Some(37),
            Key::Up => Some(38),
            Key::Right => Some(39),
            Key::Down => Some(40),
            Key::Delete => Some(46),
            Key::Char(_) => None,
        }
    }
}

// Chunk: docs/chunks/scroll_mirroring - Scroll offsets of the input surface
/// Scroll offsets of the input surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    /// Horizontal scroll (`scrollLeft`)
    pub left: f32,
    /// Vertical scroll (`scrollTop`)
    pub top: f32,
}

impl ScrollPosition {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// What the host must do with the original DOM event after the editor has
/// seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Call `preventDefault()`: the browser must not apply its native behavior
    pub prevent_default: bool,
    /// Call `stopPropagation()`: no other listener may see the event
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the native behavior proceed untouched.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Suppress the native behavior but let the event bubble.
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    /// Suppress the native behavior and stop the event from propagating.
    pub fn consume() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }

    /// Returns true if the native behavior will run.
    pub fn lets_native_through(&self) -> bool {
        !self.prevent_default
    }
}
