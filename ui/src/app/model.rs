use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::help_bar::HelpBar;
use crate::components::main_menu::MainMenu;
use crate::components::text_label::TextLabel;
use crate::config;
use crate::error::{AppError, AppResult, ErrorReporter};
use std::sync::mpsc::{self, Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause, Update};

/// The destinations a user can visit.
///
/// This is the whole navigation table: every screen is listed here and
/// reached through [`Model::navigate_to`], never by name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    FormDemo,
    BadgeDemo,
    DialogDemo,
    ProgressDemo,
    SwitchDemo,
}

impl Screen {
    /// Demo destinations offered by the main menu, in display order
    pub const DESTINATIONS: [Screen; 5] = [
        Screen::FormDemo,
        Screen::BadgeDemo,
        Screen::DialogDemo,
        Screen::ProgressDemo,
        Screen::SwitchDemo,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "Main menu",
            Screen::FormDemo => "Input form",
            Screen::BadgeDemo => "Badge",
            Screen::DialogDemo => "Dialog",
            Screen::ProgressDemo => "Progress",
            Screen::SwitchDemo => "Switch button",
        }
    }

    /// The component carrying this screen's content
    pub fn component_id(&self) -> ComponentId {
        match self {
            Screen::MainMenu => ComponentId::MainMenu,
            Screen::FormDemo => ComponentId::FormDemo,
            Screen::BadgeDemo => ComponentId::BadgeDemo,
            Screen::DialogDemo => ComponentId::DialogDemo,
            Screen::ProgressDemo => ComponentId::ProgressDemo,
            Screen::SwitchDemo => ComponentId::SwitchDemo,
        }
    }
}

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Screen currently shown
    pub screen: Screen,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    /// Centralized error reporting
    pub error_reporter: ErrorReporter,

    /// Action to replay when the open confirmation popup is accepted
    pub pending_confirmation_action: Option<Box<Msg>>,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new() -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        let mut model = Self {
            app: Self::init_app()?,
            screen: Screen::MainMenu,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            tx_to_main,
            rx_to_main,
            error_reporter,
            pending_confirmation_action: None,
        };

        model
            .app
            .active(&ComponentId::MainMenu)
            .map_err(|e| AppError::Component(e.to_string()))?;
        Ok(model)
    }

    fn init_app() -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let config = config::get_config_or_panic();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount(
            ComponentId::Label,
            Box::new(TextLabel::new(
                "Vitrine, a little terminal widget showcase".to_string(),
            )),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::HelpBar,
            Box::new(HelpBar::new(Screen::MainMenu)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::MainMenu,
            Box::new(MainMenu::new()),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::new(false)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Handle messages sent from outside the tuirealm event flow
    pub fn update_outside_msg(&mut self) {
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
