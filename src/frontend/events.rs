//! Frontend-agnostic input events.
//!
//! The terminal frontend translates crossterm's event stream into this enum
//! so the event loop only handles one event shape.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// Events emitted by the frontend, converted to a unified format
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input at a terminal cell
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Bracketed paste
    Paste { text: String },
}

impl FrontendEvent {
    /// Convert a crossterm event. Key releases and repeats, focus changes and
    /// other events we do not act on map to `None`.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Self::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Mouse(mouse_event) => Some(Self::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            Event::Paste(text) => Some(Self::Paste { text }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseButton, MouseEvent};

    #[test]
    fn test_key_press_converts() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(
            FrontendEvent::from_crossterm(event),
            Some(FrontendEvent::Key {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::NONE
            })
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(FrontendEvent::from_crossterm(event), None);
    }

    #[test]
    fn test_mouse_and_resize_convert() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            FrontendEvent::from_crossterm(event),
            Some(FrontendEvent::Mouse {
                kind: MouseEventKind::Down(MouseButton::Left),
                x: 12,
                y: 3
            })
        );

        assert!(matches!(
            FrontendEvent::from_crossterm(Event::Resize(120, 40)),
            Some(FrontendEvent::Resize {
                width: 120,
                height: 40
            })
        ));
        assert_eq!(FrontendEvent::from_crossterm(Event::FocusGained), None);
    }
}
