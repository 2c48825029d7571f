use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

use crate::lead_detail::{ClickTarget, DetailTab, LeadDetail, LeadDetailError};
use crate::models::{DashboardSnapshot, Lead};
use crate::services::notifier::{Overlay, OverlayKind};

pub type AppSignal = Signal<AppState>;
pub type AppStore = Store<AppState>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

/// Single-threaded observable value.
///
/// Every `set`/`update` notifies listeners in subscription order once the
/// internal borrow is released, so a listener may write back into the store.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

struct StoreInner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.value.borrow_mut());
        self.notify();
        result
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self) {
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        if listeners.is_empty() {
            return;
        }

        let value = self.get();
        for listener in listeners {
            listener(&value);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// `None` until the first successful fetch; replaced wholesale afterwards.
    pub snapshot: Option<DashboardSnapshot>,
    /// Starts raised so the first frame is the loading screen.
    pub loading: bool,
    /// Cosmetic busy flag, cleared on a timer rather than by fetch completion.
    pub refreshing: bool,
    pub lead_detail: LeadDetail,
    pub overlay: Option<Overlay>,
    next_overlay_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            snapshot: None,
            loading: true,
            refreshing: false,
            lead_detail: LeadDetail::default(),
            overlay: None,
            next_overlay_id: 0,
        }
    }
}

#[derive(Clone)]
pub struct AppActions {
    store: AppStore,
}

impl AppActions {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn set_loading(&self, loading: bool) {
        self.store.update(|state| state.loading = loading);
    }

    pub fn set_refreshing(&self, refreshing: bool) {
        self.store.update(|state| state.refreshing = refreshing);
    }

    pub fn replace_snapshot(&self, snapshot: DashboardSnapshot) {
        self.store.update(|state| state.snapshot = Some(snapshot));
    }

    pub fn select_lead(&self, lead: Lead) {
        self.store.update(|state| state.lead_detail.select(lead));
    }

    pub fn switch_tab(&self, tab: DetailTab) -> Result<(), LeadDetailError> {
        self.store.update(|state| state.lead_detail.switch_tab(tab))
    }

    pub fn close_lead_detail(&self) {
        self.store.update(|state| state.lead_detail.close());
    }

    pub fn click_lead_detail(&self, target: ClickTarget) {
        self.store
            .update(|state| state.lead_detail.handle_click(target));
    }

    /// Replaces whatever overlay is showing and returns the new overlay's id.
    pub fn show_overlay(&self, kind: OverlayKind) -> u64 {
        self.store.update(|state| {
            state.next_overlay_id += 1;
            let id = state.next_overlay_id;
            state.overlay = Some(Overlay { id, kind });
            id
        })
    }

    /// Dismisses the overlay only if `id` is still the one on screen.
    pub fn dismiss_overlay_if(&self, id: u64) {
        self.store.update(|state| {
            if state.overlay.as_ref().is_some_and(|overlay| overlay.id == id) {
                state.overlay = None;
            }
        });
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    use_context::<AppActions>()
}
