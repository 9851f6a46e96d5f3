use crate::app::model::Screen;
use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Label,
    HelpBar,
    MainMenu,
    FormDemo,
    BadgeDemo,
    DialogDemo,
    ProgressDemo,
    SwitchDemo,
    ErrorPopup,
    SuccessPopup,
    ConfirmationPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    Navigation(NavigationMsg),
    Form(FormActivityMsg),
    Popup(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum NavigationMsg {
    NavigateTo(Screen),
    BackToMenu,
}

#[derive(Debug, PartialEq)]
pub enum FormActivityMsg {
    /// The form was submitted; `passed` is the whole-form verification result
    Submitted { passed: bool },
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    CloseError,
    ShowSuccess(String),
    CloseSuccess,
    ShowConfirmation {
        title: String,
        message: String,
        on_confirm: Box<Msg>,
    },
    ConfirmationResult(bool),
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
