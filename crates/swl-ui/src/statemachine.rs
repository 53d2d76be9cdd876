use std::collections::HashMap;
use std::hash::Hash;

/// Callback run on a state change. `C` is whatever the owner lets actions edit.
pub type Action<C> = Box<dyn FnMut(&mut C)>;

/// A current state, a pending next state and per-state entry actions.
///
/// Changing state is two-step: [`set_next_state`](Self::set_next_state)
/// only records the request and [`update_state`](Self::update_state)
/// applies it, running the update action first and then the new state's
/// own action.
pub struct StateMachine<S, C = ()> {
    actions: HashMap<S, Action<C>>,
    update_action: Option<Action<C>>,
    current: Option<S>,
    next: Option<S>,
}

impl<S, C> Default for StateMachine<S, C> {
    fn default() -> Self {
        Self { actions: HashMap::new(), update_action: None, current: None, next: None }
    }
}

impl<S: Copy + Eq + Hash, C> StateMachine<S, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the action run when `state` is entered, replacing any previous one.
    pub fn add_state_action(&mut self, state: S, action: impl FnMut(&mut C) + 'static) {
        self.actions.insert(state, Box::new(action));
    }

    /// Sets the action run on every state change, before the state's action.
    pub fn set_update_action(&mut self, action: impl FnMut(&mut C) + 'static) {
        self.update_action = Some(Box::new(action));
    }

    /// Records `state` as the next state. Takes effect on `update_state`.
    pub fn set_next_state(&mut self, state: S) {
        self.next = Some(state);
    }

    pub fn state(&self) -> Option<S> {
        self.current
    }

    pub fn next_state(&self) -> Option<S> {
        self.next
    }

    pub fn state_is(&self, state: S) -> bool {
        self.current == Some(state)
    }

    /// Switches to the pending state. Returns `false` with nothing pending or
    /// when the pending state is already current.
    pub fn update_state(&mut self, ctx: &mut C) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if self.current == Some(next) {
            return false;
        }
        self.current = Some(next);
        self.next = None;

        if let Some(f) = &mut self.update_action {
            f(ctx);
        }
        if let Some(f) = self.actions.get_mut(&next) {
            f(ctx);
        }
        true
    }
}
