use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use crate::app::model::Screen;
use crate::components::common::Msg;
use crate::theme::ThemeManager;

/// Help bar that shows keyboard shortcuts for the current screen
pub struct HelpBar {
    screen: Screen,
}

impl HelpBar {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    /// Shortcut pairs: (key, true) renders highlighted, (text, false) plain
    fn shortcuts(&self) -> Vec<(&'static str, bool)> {
        let mut shortcuts = match self.screen {
            Screen::MainMenu => vec![
                ("[j/k]", true),
                (" Move ", false),
                ("[Enter]", true),
                (" Open ", false),
            ],
            Screen::FormDemo => vec![
                ("[Tab]", true),
                (" Next field ", false),
                ("[Enter]", true),
                (" Verify ", false),
            ],
            Screen::BadgeDemo => vec![
                ("[+/-]", true),
                (" Count ", false),
                ("[d]", true),
                (" Dot ", false),
                ("[r]", true),
                (" Clear ", false),
            ],
            Screen::DialogDemo => vec![("[Enter]", true), (" Open dialog ", false)],
            Screen::ProgressDemo => vec![
                ("[Space]", true),
                (" Start/Pause ", false),
                ("[r]", true),
                (" Reset ", false),
            ],
            Screen::SwitchDemo => vec![("[Space]", true), (" Toggle ", false)],
        };

        if self.screen != Screen::MainMenu {
            shortcuts.push(("[Esc]", true));
            shortcuts.push((" Back ", false));
        }
        shortcuts.push(("[q]", true));
        shortcuts.push((" Quit", false));
        shortcuts
    }
}

impl MockComponent for HelpBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let spans: Vec<Span> = self
            .shortcuts()
            .into_iter()
            .map(|(text, is_key)| {
                let style = if is_key {
                    Style::default().fg(ThemeManager::shortcut_key())
                } else {
                    Style::default().fg(ThemeManager::shortcut_description())
                };
                Span::styled(text, style)
            })
            .collect();

        let text = Text::from(Line::from(spans));
        let paragraph = tuirealm::ratatui::widgets::Paragraph::new(text);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        tuirealm::command::CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for HelpBar {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_screens_offer_a_way_back() {
        for screen in Screen::DESTINATIONS {
            let bar = HelpBar::new(screen);
            assert!(bar.shortcuts().iter().any(|(text, _)| *text == "[Esc]"));
        }
    }

    #[test]
    fn the_menu_does_not_show_back() {
        let bar = HelpBar::new(Screen::MainMenu);
        assert!(bar.shortcuts().iter().all(|(text, _)| *text != "[Esc]"));
    }
}
