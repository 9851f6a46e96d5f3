use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::widgets::{Block, Borders, List, ListItem};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use super::common::{Msg, NavigationMsg};
use crate::app::model::Screen;
use crate::theme::ThemeManager;
use widgets::picker::Picker;

/// Entry screen: a wheel over every demo destination.
pub struct MainMenu {
    destinations: Picker<Screen>,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            destinations: Picker::new(Screen::DESTINATIONS.to_vec()),
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for MainMenu {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .destinations
            .items()
            .iter()
            .enumerate()
            .map(|(i, screen)| {
                let mut item = ListItem::new(screen.title());
                if i == self.destinations.selected_index() {
                    item = item.style(Style::default().add_modifier(TextModifiers::REVERSED));
                }
                item
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ThemeManager::primary_accent()))
                    .title(" Pick a widget demo ")
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().fg(ThemeManager::title_accent()))
            .highlight_symbol("> ");
        frame.render_widget(list, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.destinations.selected_index()))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for MainMenu {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down | Key::Char('j'),
                ..
            }) => {
                self.destinations.select_next();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Up | Key::Char('k'),
                ..
            }) => {
                self.destinations.select_previous();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self
                .destinations
                .selected()
                .map(|screen| Msg::Navigation(NavigationMsg::NavigateTo(*screen))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_navigates_to_the_selected_destination() {
        let mut menu = MainMenu::new();
        menu.on(Event::Keyboard(KeyEvent::from(Key::Down)));

        let msg = menu.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert_eq!(
            msg,
            Some(Msg::Navigation(NavigationMsg::NavigateTo(
                Screen::DESTINATIONS[1]
            )))
        );
    }

    #[test]
    fn selection_wraps_at_the_top() {
        let mut menu = MainMenu::new();
        menu.on(Event::Keyboard(KeyEvent::from(Key::Up)));

        let msg = menu.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert_eq!(
            msg,
            Some(Msg::Navigation(NavigationMsg::NavigateTo(
                Screen::DESTINATIONS[Screen::DESTINATIONS.len() - 1]
            )))
        );
    }
}
