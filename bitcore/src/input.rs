//! Keyboard handling that has to run before the text area sees the frame's
//! events: editor shortcuts and tab expansion.

use egui::{Event, Key, Modifiers};

/// Actions bound to Ctrl (Cmd on macOS) + key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NewWindow,
    Open,
    Update,
}

impl Shortcut {
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.command || modifiers.shift || modifiers.alt {
            return None;
        }
        match key {
            Key::N => Some(Shortcut::NewWindow),
            Key::O => Some(Shortcut::Open),
            Key::U => Some(Shortcut::Update),
            _ => None,
        }
    }

    /// Key hint for button captions.
    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::NewWindow => "Ctrl+N",
            Shortcut::Open => "Ctrl+O",
            Shortcut::Update => "Ctrl+U",
        }
    }
}

/// Split shortcut presses out of `events`. Releases of a shortcut key are
/// dropped too so nothing downstream sees half a chord.
pub fn split_shortcuts(events: Vec<Event>) -> (Vec<Shortcut>, Vec<Event>) {
    let mut shortcuts = Vec::new();
    let mut remaining = Vec::with_capacity(events.len());
    for event in events {
        let shortcut = match &event {
            Event::Key { key, modifiers, .. } => Shortcut::from_key(*key, *modifiers),
            _ => None,
        };
        match shortcut {
            Some(shortcut) => {
                if matches!(event, Event::Key { pressed: true, repeat: false, .. }) {
                    shortcuts.push(shortcut);
                }
            }
            None => remaining.push(event),
        }
    }
    (shortcuts, remaining)
}

/// Rewrite tab input as `tab_width` spaces and drop zoom chords.
///
/// egui lays out `\t` at a fixed width, so tab stops are honoured by
/// inserting spaces instead.
pub fn expand_tabs(events: Vec<Event>, tab_width: usize) -> Vec<Event> {
    let spaces = " ".repeat(tab_width);
    let mut out = Vec::with_capacity(events.len());
    for event in events {
        match event {
            Event::Key { key: Key::Tab, pressed, modifiers, .. } => {
                if pressed && modifiers.is_none() {
                    out.push(Event::Text(spaces.clone()));
                }
            }
            Event::Text(text) if text.contains('\t') => {
                out.push(Event::Text(text.replace('\t', &spaces)));
            }
            Event::Paste(text) if text.contains('\t') => {
                out.push(Event::Paste(text.replace('\t', &spaces)));
            }
            Event::Key { key, modifiers, .. }
                if modifiers.command
                    && matches!(key, Key::Plus | Key::Minus | Key::Equals) => {}
            other => out.push(other),
        }
    }
    out
}

/// Take this frame's shortcut presses out of the input queue.
pub fn take_shortcuts(ctx: &egui::Context) -> Vec<Shortcut> {
    ctx.input_mut(|i| {
        let (shortcuts, remaining) = split_shortcuts(std::mem::take(&mut i.events));
        i.events = remaining;
        shortcuts
    })
}

/// Apply [`expand_tabs`] to this frame's input.
///
/// egui moves focus on Tab before `update()` runs, so focus is handed back
/// to whatever held it when Tab was pressed.
pub fn consume_tab_keys(ctx: &egui::Context, tab_width: usize) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| matches!(e, Event::Key { key: Key::Tab, pressed: true, .. }))
    });
    let focused_before = if tab_pressed {
        ctx.memory(|mem| mem.focused())
    } else {
        None
    };

    ctx.input_mut(|i| {
        i.events = expand_tabs(std::mem::take(&mut i.events), tab_width);
    });

    if let Some(id) = focused_before {
        ctx.memory_mut(|mem| mem.request_focus(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, pressed: bool, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: Some(key),
            pressed,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Shortcut::from_key(Key::N, Modifiers::COMMAND), Some(Shortcut::NewWindow));
        assert_eq!(Shortcut::from_key(Key::O, Modifiers::COMMAND), Some(Shortcut::Open));
        assert_eq!(Shortcut::from_key(Key::U, Modifiers::COMMAND), Some(Shortcut::Update));
        assert_eq!(Shortcut::from_key(Key::U, Modifiers::NONE), None);
        assert_eq!(Shortcut::from_key(Key::S, Modifiers::COMMAND), None);
        assert_eq!(
            Shortcut::from_key(Key::N, Modifiers { shift: true, ..Modifiers::COMMAND }),
            None
        );
    }

    #[test]
    fn test_split_shortcuts() {
        let events = vec![
            Event::Text("a".to_string()),
            key(Key::U, true, Modifiers::COMMAND),
            key(Key::U, false, Modifiers::COMMAND),
            key(Key::ArrowLeft, true, Modifiers::NONE),
        ];
        let (shortcuts, remaining) = split_shortcuts(events);
        assert_eq!(shortcuts, vec![Shortcut::Update]);
        assert_eq!(
            remaining,
            vec![Event::Text("a".to_string()), key(Key::ArrowLeft, true, Modifiers::NONE)]
        );
    }

    #[test]
    fn test_expand_tab_key() {
        let events = vec![
            key(Key::Tab, true, Modifiers::NONE),
            key(Key::Tab, false, Modifiers::NONE),
        ];
        assert_eq!(expand_tabs(events, 4), vec![Event::Text("    ".to_string())]);
    }

    #[test]
    fn test_expand_tab_text() {
        let events = vec![Event::Text("a\tb".to_string())];
        assert_eq!(expand_tabs(events, 2), vec![Event::Text("a  b".to_string())]);
    }

    #[test]
    fn test_expand_tab_paste() {
        let events = vec![
            Event::Paste("a\tb".to_string()),
            Event::Paste("plain".to_string()),
        ];
        assert_eq!(
            expand_tabs(events, 4),
            vec![Event::Paste("a    b".to_string()), Event::Paste("plain".to_string())]
        );
    }

    #[test]
    fn test_zoom_keys_dropped() {
        let events = vec![
            key(Key::Plus, true, Modifiers::COMMAND),
            key(Key::Minus, true, Modifiers::COMMAND),
            key(Key::Minus, true, Modifiers::NONE),
        ];
        assert_eq!(expand_tabs(events, 4), vec![key(Key::Minus, true, Modifiers::NONE)]);
    }
}
