use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use super::common::{Msg, NavigationMsg};
use crate::config;
use crate::theme::ThemeManager;
use widgets::progress::Progress;

/// Progress demo: a bar advancing on tick events while running.
pub struct ProgressScreen {
    progress: Progress,
    running: bool,
    step: u32,
}

impl ProgressScreen {
    pub fn new() -> Self {
        let config = config::get_config_or_panic();
        Self {
            progress: Progress::new(),
            running: false,
            step: config.demo().progress_step_percent(),
        }
    }

    fn status_line(&self) -> &'static str {
        if self.progress.is_complete() {
            "Complete"
        } else if self.running {
            "Running"
        } else {
            "Paused"
        }
    }
}

impl Default for ProgressScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for ProgressScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ThemeManager::primary_accent()))
            .title(" Progress ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(inner);

        let bar_color = if self.progress.is_complete() {
            ThemeManager::status_success()
        } else {
            ThemeManager::primary_accent()
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(bar_color))
            .percent(u16::from(self.progress.percent()))
            .label(self.progress.label());
        frame.render_widget(gauge, chunks[0]);

        let status = Paragraph::new(self.status_line()).alignment(Alignment::Center);
        frame.render_widget(status, chunks[1]);

        let keys = config::get_config_or_panic().keys();
        let hints = Paragraph::new(Line::from(vec![
            Span::styled(
                "[Space]",
                Style::default()
                    .fg(ThemeManager::shortcut_key())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start/Pause  "),
            Span::styled(
                format!("[{}]", keys.reset()),
                Style::default()
                    .fg(ThemeManager::shortcut_key())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Reset"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[2]);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.progress.value() as usize))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ProgressScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_panic().keys();
        match ev {
            Event::Tick => {
                if !self.running {
                    return None;
                }
                self.progress.advance(self.step);
                if self.progress.is_complete() {
                    self.running = false;
                }
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Navigation(NavigationMsg::BackToMenu))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(' '),
                ..
            }) => {
                if self.progress.is_complete() {
                    self.progress.reset();
                }
                self.running = !self.running;
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == keys.reset() => {
                self.progress.reset();
                self.running = false;
                Some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_advance_while_running() {
        let mut screen = ProgressScreen::new();

        assert_eq!(screen.on(Event::Tick), None);
        assert_eq!(screen.state(), State::One(StateValue::Usize(0)));

        screen.on(Event::Keyboard(KeyEvent::from(Key::Char(' '))));
        assert_eq!(screen.on(Event::Tick), Some(Msg::ForceRedraw));
        assert_eq!(screen.state(), State::One(StateValue::Usize(screen.step as usize)));
    }

    #[test]
    fn completion_stops_the_run() {
        let mut screen = ProgressScreen::new();
        screen.on(Event::Keyboard(KeyEvent::from(Key::Char(' '))));

        // Drive well past the end; the bar clamps and the run stops
        for _ in 0..200 {
            screen.on(Event::Tick);
        }
        assert_eq!(screen.state(), State::One(StateValue::Usize(100)));
        assert!(!screen.running);
    }

    #[test]
    fn reset_returns_to_zero_and_pauses() {
        let mut screen = ProgressScreen::new();
        screen.on(Event::Keyboard(KeyEvent::from(Key::Char(' '))));
        screen.on(Event::Tick);

        screen.on(Event::Keyboard(KeyEvent::from(Key::Char('r'))));
        assert_eq!(screen.state(), State::One(StateValue::Usize(0)));
        assert!(!screen.running);
    }
}
