//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking and
//! the drag flag) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::ViewerEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewerCommand;
use crate::molecule::MoleculeKind;

/// Maps physical key strings to [`ViewerCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"Digit1"`, etc.
///
/// Only *discrete* commands make sense as key bindings; `Rotate` and
/// `Zoom` come from mouse gestures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag. Entries read from config
    /// are layered over the defaults.
    #[serde(deserialize_with = "merge_over_defaults")]
    bindings: HashMap<String, KeyCommandTag>,
}

fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, KeyCommandTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<String, KeyCommandTag>::deserialize(deserializer)?;
    let mut bindings = KeyBindings::default().bindings;
    bindings.extend(overrides);
    Ok(bindings)
}

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Put camera and rotation back to their starting state.
    ResetView,
    /// Toggle wireframe rendering.
    ToggleWireframe,
    /// Toggle the idle spin.
    ToggleAnimation,
    /// Show C60.
    SelectC60,
    /// Show C70.
    SelectC70,
    /// Show C84.
    SelectC84,
}

impl KeyCommandTag {
    /// Convert to the corresponding [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        match self {
            Self::ResetView => ViewerCommand::ResetView,
            Self::ToggleWireframe => ViewerCommand::ToggleWireframe,
            Self::ToggleAnimation => ViewerCommand::ToggleAnimation,
            Self::SelectC60 => ViewerCommand::SelectMolecule(MoleculeKind::C60),
            Self::SelectC70 => ViewerCommand::SelectMolecule(MoleculeKind::C70),
            Self::SelectC84 => ViewerCommand::SelectMolecule(MoleculeKind::C84),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyCommandTag::ResetView),
            ("KeyW".into(), KeyCommandTag::ToggleWireframe),
            ("Space".into(), KeyCommandTag::ToggleAnimation),
            ("Digit1".into(), KeyCommandTag::SelectC60),
            ("Digit2".into(), KeyCommandTag::SelectC70),
            ("Digit3".into(), KeyCommandTag::SelectC84),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`, returning the tag it had.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyW") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position, `None` until the cursor enters the viewport.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    dragging: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether a drag-rotate is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// End any drag without waiting for a button release (e.g. the window
    /// lost focus mid-drag).
    pub fn release_mouse_state(&mut self) {
        self.dragging = false;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::CursorLeft => {
                self.last_cursor = None;
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.dragging = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                (delta != 0.0).then_some(ViewerCommand::Zoom { delta })
            }
        }
    }

    /// Track the cursor; mid-drag movement becomes a rotate command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let current = Vec2::new(x, y);
        let previous = self.last_cursor.replace(current)?;
        let delta = current - previous;

        if self.dragging && delta != Vec2::ZERO {
            return Some(ViewerCommand::Rotate { delta });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn moving_without_button_does_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 9.0 }),
            None
        );
    }

    #[test]
    fn drag_produces_rotate_deltas() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let _ = input.handle_event(press(true));
        assert!(input.is_dragging());

        let cmd = input.handle_event(InputEvent::CursorMoved { x: 13.0, y: 6.0 });
        assert_eq!(
            cmd,
            Some(ViewerCommand::Rotate {
                delta: Vec2::new(3.0, -4.0)
            })
        );

        let _ = input.handle_event(press(false));
        assert!(!input.is_dragging());
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 20.0 }),
            None
        );
    }

    #[test]
    fn first_move_after_leaving_does_not_jump() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(press(true));
        let _ = input.handle_event(InputEvent::CursorLeft);
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 0.0 }),
            None
        );
    }

    #[test]
    fn right_button_does_not_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.is_dragging());
    }

    #[test]
    fn scroll_maps_to_zoom() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -1.0 }),
            Some(ViewerCommand::Zoom { delta: -1.0 })
        );
        assert_eq!(input.handle_event(InputEvent::Scroll { delta: 0.0 }), None);
    }

    #[test]
    fn rebinding_keys() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("Space"),
            Some(ViewerCommand::ToggleAnimation)
        );
        assert_eq!(
            input.key_bindings_mut().unbind("Space"),
            Some(KeyCommandTag::ToggleAnimation)
        );
        input
            .key_bindings_mut()
            .bind("KeyA", KeyCommandTag::ToggleAnimation);
        assert_eq!(input.handle_key_press("Space"), None);
        assert_eq!(
            input.handle_key_press("KeyA"),
            Some(ViewerCommand::ToggleAnimation)
        );
    }

    #[test]
    fn key_bindings_deserialize_from_toml() {
        let bindings: KeyBindings = toml::from_str(
            r#"
[bindings]
KeyX = "toggle_wireframe"
"#,
        )
        .unwrap();
        assert_eq!(bindings.lookup("KeyX"), Some(ViewerCommand::ToggleWireframe));
        assert_eq!(bindings.lookup("KeyW"), Some(ViewerCommand::ToggleWireframe));
    }

    #[test]
    fn partial_bindings_table_keeps_other_defaults() {
        let bindings: KeyBindings = toml::from_str(
            r#"
[bindings]
Digit1 = "select_c84"
"#,
        )
        .unwrap();
        assert_eq!(
            bindings.lookup("Digit1"),
            Some(ViewerCommand::SelectMolecule(MoleculeKind::C84))
        );
        assert_eq!(
            bindings.lookup("Digit2"),
            Some(ViewerCommand::SelectMolecule(MoleculeKind::C70))
        );
        assert_eq!(
            bindings.lookup("Digit3"),
            Some(ViewerCommand::SelectMolecule(MoleculeKind::C84))
        );
        assert_eq!(bindings.lookup("Space"), Some(ViewerCommand::ToggleAnimation));
    }
}
