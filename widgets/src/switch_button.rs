//! Two-state toggle with change notification.

/// Callback invoked with the new checked state.
pub type ChangeListener = Box<dyn FnMut(bool)>;

/// On/off switch state.
///
/// The listener fires only when the value actually flips; setting the
/// current value again is a no-op.
#[derive(Default)]
pub struct Switch {
    checked: bool,
    listener: Option<ChangeListener>,
}

impl Switch {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            listener: None,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn on_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            if let Some(listener) = self.listener.as_mut() {
                listener(checked);
            }
        }
    }

    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toggle_flips_state() {
        let mut switch = Switch::new(false);

        switch.toggle();
        assert!(switch.is_checked());
        switch.toggle();
        assert!(!switch.is_checked());
    }

    #[test]
    fn listener_fires_only_on_actual_change() {
        let mut switch = Switch::new(false);
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = Rc::clone(&seen);
        switch.on_change(move |checked| sink.borrow_mut().push(checked));

        switch.set_checked(true);
        switch.set_checked(true);
        switch.set_checked(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
