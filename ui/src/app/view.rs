use crate::app::model::Model;
use crate::components::common::ComponentId;
use crate::error::{AppError, AppResult};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::terminal::TerminalAdapter;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 10;

// Center a popup box inside the full frame area
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Draw the current screen, with any open popup rendered on top
    pub fn view(&mut self) -> AppResult<()> {
        let screen = self.screen;

        self.terminal
            .draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(
                        [
                            Constraint::Length(3), // Title
                            Constraint::Min(8),    // Screen content
                            Constraint::Length(1), // Help bar
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                self.app.view(&ComponentId::Label, f, chunks[0]);
                self.app.view(&screen.component_id(), f, chunks[1]);
                self.app.view(&ComponentId::HelpBar, f, chunks[2]);

                // Popups draw over the screen; error wins over the rest
                let overlay = popup_area(f.area(), POPUP_WIDTH, POPUP_HEIGHT);
                if self.app.mounted(&ComponentId::ErrorPopup) {
                    self.app.view(&ComponentId::ErrorPopup, f, overlay);
                } else if self.app.mounted(&ComponentId::SuccessPopup) {
                    self.app.view(&ComponentId::SuccessPopup, f, overlay);
                } else if self.app.mounted(&ComponentId::ConfirmationPopup) {
                    self.app.view(&ComponentId::ConfirmationPopup, f, overlay);
                }
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 60, 10);

        assert_eq!(popup, Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn popup_area_never_exceeds_the_frame() {
        let area = Rect::new(0, 0, 40, 6);
        let popup = popup_area(area, 60, 10);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 6);
        assert_eq!((popup.x, popup.y), (0, 0));
    }
}
