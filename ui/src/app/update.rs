use crate::app::model::{Model, Screen};
use crate::components::common::{
    ComponentId, FormActivityMsg, Msg, NavigationMsg, PopupActivityMsg,
};
use crate::error::AppError;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        match msg? {
            Msg::AppClose => {
                self.shutdown();
                None
            }
            Msg::ForceRedraw => {
                self.redraw = true;
                None
            }
            Msg::Navigation(msg) => self.update_navigation(msg),
            Msg::Form(msg) => self.update_form(msg),
            Msg::Popup(msg) => self.update_popup(msg),
            Msg::Error(e) => {
                self.error_reporter
                    .report_simple(e, "Application", "update");
                None
            }
        }
    }

    fn update_navigation(&mut self, msg: NavigationMsg) -> Option<Msg> {
        match msg {
            NavigationMsg::NavigateTo(screen) => self.navigate_to(screen),
            NavigationMsg::BackToMenu => self.navigate_to(Screen::MainMenu),
        }
    }

    /// Switch to another screen.
    ///
    /// The target component is remounted fresh so every visit starts from
    /// its initial state.
    pub fn navigate_to(&mut self, screen: Screen) -> Option<Msg> {
        log::debug!("Navigating to {screen:?}");

        if let Err(e) = self.remount_screen(screen) {
            self.error_reporter
                .report_mount_error(screen.title(), "remount", e);
            return None;
        }
        let previous = self.screen;
        self.screen = screen;

        if let Err(e) = self.remount_help_bar(screen) {
            self.error_reporter.report_mount_error("HelpBar", "remount", e);
        }

        // While the form is focused, printable keys belong to it
        if let Err(e) = self.remount_global_key_watcher(screen == Screen::FormDemo) {
            self.error_reporter
                .report_mount_error("GlobalKeyWatcher", "remount", e);
        }

        if let Err(e) = self.app.active(&screen.component_id()) {
            self.error_reporter
                .report_activation_error(screen.title(), e);
        }

        // Drop the screen we left so its subscriptions stop firing
        if previous != screen && self.app.mounted(&previous.component_id()) {
            if let Err(e) = self.app.umount(&previous.component_id()) {
                log::warn!("Failed to umount {previous:?}: {e}");
            }
        }
        self.redraw = true;
        None
    }

    fn update_form(&mut self, msg: FormActivityMsg) -> Option<Msg> {
        match msg {
            FormActivityMsg::Submitted { passed } => {
                log::info!("Form submitted, verification passed: {passed}");
                if passed {
                    Some(Msg::Popup(PopupActivityMsg::ShowSuccess(
                        "Verification passed.\nAll fields are valid.".to_string(),
                    )))
                } else {
                    Some(Msg::Popup(PopupActivityMsg::ShowError(
                        AppError::Validation(
                            "Fix the highlighted fields and try again.".to_string(),
                        ),
                    )))
                }
            }
        }
    }

    fn update_popup(&mut self, msg: PopupActivityMsg) -> Option<Msg> {
        match msg {
            PopupActivityMsg::ShowError(error) => {
                if let Err(e) = self.mount_error_popup(&error) {
                    log::error!("Failed to mount error popup: {e}");
                }
                self.redraw = true;
                None
            }
            PopupActivityMsg::CloseError => {
                self.close_popup(ComponentId::ErrorPopup);
                None
            }
            PopupActivityMsg::ShowSuccess(message) => {
                if let Err(e) = self.mount_success_popup(&message) {
                    log::error!("Failed to mount success popup: {e}");
                }
                self.redraw = true;
                None
            }
            PopupActivityMsg::CloseSuccess => {
                self.close_popup(ComponentId::SuccessPopup);
                None
            }
            PopupActivityMsg::ShowConfirmation {
                title,
                message,
                on_confirm,
            } => {
                self.pending_confirmation_action = Some(on_confirm);
                if let Err(e) = self.mount_confirmation_popup(&title, &message) {
                    log::error!("Failed to mount confirmation popup: {e}");
                }
                self.redraw = true;
                None
            }
            PopupActivityMsg::ConfirmationResult(confirmed) => {
                self.close_popup(ComponentId::ConfirmationPopup);
                let pending = self.pending_confirmation_action.take();
                if confirmed {
                    pending.map(|action| *action)
                } else {
                    log::debug!("Confirmation declined, dropping pending action");
                    None
                }
            }
        }
    }
}
