//! Timer-backed debounce for browser event handlers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::util::Debouncer;

/// Runs `callback` once `wait_ms` has passed since the most recent call.
///
/// Each call replaces the pending [`Timeout`]; dropping the old one clears it,
/// and the [`Debouncer`] ticket keeps a late-firing timer from delivering.
pub struct Debounced<T: 'static> {
    state: Rc<RefCell<Debouncer<T>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    callback: Rc<dyn Fn(T)>,
    wait_ms: u32,
}

impl<T: 'static> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            timer: Rc::clone(&self.timer),
            callback: Rc::clone(&self.callback),
            wait_ms: self.wait_ms,
        }
    }
}

impl<T: 'static> Debounced<T> {
    pub fn new(wait_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(Debouncer::new())),
            timer: Rc::new(RefCell::new(None)),
            callback: Rc::new(callback),
            wait_ms,
        }
    }

    pub fn call(&self, args: T) {
        let ticket = self.state.borrow_mut().call(args);
        let state = Rc::clone(&self.state);
        let callback = Rc::clone(&self.callback);
        let timeout = Timeout::new(self.wait_ms, move || {
            let ready = state.borrow_mut().fire(ticket);
            if let Some(args) = ready {
                callback(args);
            }
        });
        self.timer.borrow_mut().replace(timeout);
    }
}
