use crate::components::common::Msg;
use crate::config;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event for global shortcuts.
#[derive(MockComponent, Default)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    // While a text input screen is focused, printable keys belong to it
    text_input_active: bool,
}

impl GlobalKeyWatcher {
    pub fn new(text_input_active: bool) -> Self {
        Self {
            component: Phantom::default(),
            text_input_active,
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if !self.text_input_active && c == config::get_config_or_panic().keys().quit() {
                    Some(Msg::AppClose)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_key_is_ignored_while_typing() {
        let mut watcher = GlobalKeyWatcher::new(true);
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::from(Key::Char('q')))),
            None
        );

        let mut watcher = GlobalKeyWatcher::new(false);
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::from(Key::Char('q')))),
            Some(Msg::AppClose)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut watcher = GlobalKeyWatcher::new(true);
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::new(
                Key::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Msg::AppClose)
        );
    }
}
