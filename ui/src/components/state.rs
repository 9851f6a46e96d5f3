use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};

/// Trait for managing component lifecycle and state
pub trait ComponentState {
    /// Initialize component and prepare it for use
    fn mount(&mut self) -> AppResult<()>;
}

/// Extension trait for our Application type to mount components with ComponentState automatically
pub trait ComponentStateMount {
    /// Remount a component that implements ComponentState, calling mount() automatically
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<tuirealm::Sub<ComponentId, tuirealm::NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState
            + tuirealm::MockComponent
            + tuirealm::Component<Msg, tuirealm::NoUserEvent>
            + 'static;
}

impl ComponentStateMount for tuirealm::Application<ComponentId, Msg, tuirealm::NoUserEvent> {
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<tuirealm::Sub<ComponentId, tuirealm::NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState
            + tuirealm::MockComponent
            + tuirealm::Component<Msg, tuirealm::NoUserEvent>
            + 'static,
    {
        // Initialize component using ComponentState pattern
        component.mount()?;

        self.remount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
