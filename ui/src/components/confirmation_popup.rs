use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::config;
use crate::theme::ThemeManager;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    event::{Key, KeyEvent, KeyModifiers},
    props::{Alignment, BorderType, Borders, TextModifiers, TextSpan},
    ratatui::{
        Frame,
        layout::Rect,
        text::{Line, Span, Text},
        widgets::{Block, Paragraph as RatatuiParagraph, Wrap},
    },
};

pub struct ConfirmationPopup {
    component: Paragraph,
    title: String,
    message: String,
    is_mounted: bool,
}

impl ConfirmationPopup {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            component: Paragraph::default()
                .borders(
                    Borders::default()
                        .color(ThemeManager::primary_accent())
                        .modifiers(BorderType::Rounded),
                )
                .title(format!(" {} ", title), Alignment::Center)
                .foreground(ThemeManager::popup_text())
                .modifiers(TextModifiers::BOLD)
                .alignment(Alignment::Center)
                .text([TextSpan::from(message)]),
            title: title.to_string(),
            message: message.to_string(),
            is_mounted: false,
        }
    }
}

impl MockComponent for ConfirmationPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(tuirealm::ratatui::widgets::Borders::ALL)
            .border_type(tuirealm::ratatui::widgets::BorderType::Rounded)
            .border_style(
                tuirealm::ratatui::style::Style::default().fg(ThemeManager::primary_accent()),
            )
            .title(format!(" {} ", self.title))
            .title_alignment(tuirealm::ratatui::layout::Alignment::Center);

        let mut lines = Vec::new();
        lines.push(Line::from(""));
        for line in self.message.lines() {
            lines.push(Line::from(line));
        }
        lines.push(Line::from(""));

        let keys = config::get_config_or_panic().keys();
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] Yes", keys.confirm_yes().to_uppercase()),
                tuirealm::ratatui::style::Style::default()
                    .fg(ThemeManager::status_success())
                    .add_modifier(tuirealm::ratatui::style::Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("[{}] No", keys.confirm_no().to_uppercase()),
                tuirealm::ratatui::style::Style::default()
                    .fg(ThemeManager::status_error())
                    .add_modifier(tuirealm::ratatui::style::Modifier::BOLD),
            ),
        ]));

        let paragraph = RatatuiParagraph::new(Text::from(lines))
            .block(block)
            .alignment(tuirealm::ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                tuirealm::ratatui::style::Style::default()
                    .fg(ThemeManager::popup_text())
                    .add_modifier(tuirealm::ratatui::style::Modifier::BOLD),
            );

        frame.render_widget(paragraph, area);
    }

    fn query(&self, attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: tuirealm::Attribute, value: tuirealm::AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> tuirealm::State {
        self.component.state()
    }

    fn perform(&mut self, cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        self.component.perform(cmd)
    }
}

impl Component<Msg, NoUserEvent> for ConfirmationPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_panic().keys();
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(true))),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(false)))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if c == keys.confirm_yes() {
                    Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(true)))
                } else if c == keys.confirm_no() {
                    Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(false)))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl ComponentState for ConfirmationPopup {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting ConfirmationPopup component");

        if self.is_mounted {
            log::warn!("ConfirmationPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        Ok(())
    }
}

impl Drop for ConfirmationPopup {
    fn drop(&mut self) {
        log::debug!("Dropping ConfirmationPopup component");
        self.is_mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_and_no_keys_resolve_the_confirmation() {
        let mut popup = ConfirmationPopup::new("Confirm", "Proceed?");

        assert_eq!(
            popup.on(Event::Keyboard(KeyEvent::from(Key::Char('y')))),
            Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(true)))
        );
        assert_eq!(
            popup.on(Event::Keyboard(KeyEvent::from(Key::Char('n')))),
            Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(false)))
        );
        assert_eq!(
            popup.on(Event::Keyboard(KeyEvent::from(Key::Esc))),
            Some(Msg::Popup(PopupActivityMsg::ConfirmationResult(false)))
        );
    }
}
