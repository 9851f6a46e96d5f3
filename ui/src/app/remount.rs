use crate::app::model::{Model, Screen};
use crate::components::badge_screen::BadgeScreen;
use crate::components::common::ComponentId;
use crate::components::confirmation_popup::ConfirmationPopup;
use crate::components::dialog_screen::DialogScreen;
use crate::components::error_popup::ErrorPopup;
use crate::components::form_screen::FormScreen;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::help_bar::HelpBar;
use crate::components::main_menu::MainMenu;
use crate::components::progress_screen::ProgressScreen;
use crate::components::state::ComponentStateMount;
use crate::components::success_popup::SuccessPopup;
use crate::components::switch_screen::SwitchScreen;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount the component backing `screen`, replacing any previous instance
    pub fn remount_screen(&mut self, screen: Screen) -> AppResult<()> {
        let result = match screen {
            Screen::MainMenu => self.app.remount(
                ComponentId::MainMenu,
                Box::new(MainMenu::new()),
                Vec::default(),
            ),
            Screen::FormDemo => self.app.remount(
                ComponentId::FormDemo,
                Box::new(FormScreen::new()?),
                Vec::default(),
            ),
            Screen::BadgeDemo => self.app.remount(
                ComponentId::BadgeDemo,
                Box::new(BadgeScreen::new()),
                Vec::default(),
            ),
            Screen::DialogDemo => self.app.remount(
                ComponentId::DialogDemo,
                Box::new(DialogScreen::new()),
                Vec::default(),
            ),
            // The progress demo advances on tick events
            Screen::ProgressDemo => self.app.remount(
                ComponentId::ProgressDemo,
                Box::new(ProgressScreen::new()),
                vec![Sub::new(SubEventClause::Tick, SubClause::Always)],
            ),
            Screen::SwitchDemo => self.app.remount(
                ComponentId::SwitchDemo,
                Box::new(SwitchScreen::new()),
                Vec::default(),
            ),
        };
        result.map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn remount_help_bar(&mut self, screen: Screen) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::HelpBar,
                Box::new(HelpBar::new(screen)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn remount_global_key_watcher(&mut self, text_input_active: bool) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::GlobalKeyWatcher,
                Box::new(GlobalKeyWatcher::new(text_input_active)),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)],
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error),
            Vec::default(),
        )?;
        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn mount_success_popup(&mut self, message: &str) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::SuccessPopup,
            SuccessPopup::new(message),
            Vec::default(),
        )?;
        self.app
            .active(&ComponentId::SuccessPopup)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn mount_confirmation_popup(&mut self, title: &str, message: &str) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::ConfirmationPopup,
            ConfirmationPopup::new(title, message),
            Vec::default(),
        )?;
        self.app
            .active(&ComponentId::ConfirmationPopup)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Unmount a popup and hand focus back to the current screen
    pub fn close_popup(&mut self, id: ComponentId) {
        if let Err(e) = self.app.umount(&id) {
            log::warn!("Failed to umount popup {id:?}: {e}");
        }
        if let Err(e) = self.app.active(&self.screen.component_id()) {
            self.error_reporter
                .report_activation_error(self.screen.title(), e);
        }
        self.redraw = true;
    }
}
