//! Change notifications.
//!
//! A small observer: subscribers register for one [`EventKind`] and are
//! invoked synchronously, in registration order, each time an event of that
//! kind is emitted.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::models::{Language, Theme};

/// Something that changed in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The interface language switched.
    LanguageChanged(Language),
    /// The colour theme switched.
    ThemeChanged(Theme),
}

/// The kinds of [`AppEvent`] that can be subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`AppEvent::LanguageChanged`].
    LanguageChanged,
    /// See [`AppEvent::ThemeChanged`].
    ThemeChanged,
}

impl EventKind {
    /// Returns the event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::LanguageChanged => "languageChanged",
            EventKind::ThemeChanged => "themeChanged",
        }
    }
}

impl AppEvent {
    /// Returns the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::LanguageChanged(_) => EventKind::LanguageChanged,
            AppEvent::ThemeChanged(_) => EventKind::ThemeChanged,
        }
    }
}

/// A subscriber callback.
pub type Subscriber = Box<dyn FnMut(&AppEvent)>;

/// Subscriber lists, one per [`EventKind`].
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use salary_converter::events::{AppEvent, EventBus, EventKind};
/// use salary_converter::models::Theme;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut bus = EventBus::new();
///
/// let sink = Rc::clone(&seen);
/// bus.subscribe(EventKind::ThemeChanged, move |event| sink.borrow_mut().push(*event));
///
/// bus.emit(&AppEvent::ThemeChanged(Theme::Dark));
/// assert_eq!(*seen.borrow(), vec![AppEvent::ThemeChanged(Theme::Dark)]);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<Subscriber>>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F)
    where
        F: FnMut(&AppEvent) + 'static,
    {
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Box::new(subscriber));
    }

    /// Returns the number of subscribers for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Delivers `event` to every subscriber of its kind.
    pub fn emit(&mut self, event: &AppEvent) {
        let kind = event.kind();
        let Some(subscribers) = self.subscribers.get_mut(&kind) else {
            return;
        };
        debug!(
            event = kind.name(),
            subscribers = subscribers.len(),
            "Emitting event"
        );
        for subscriber in subscribers.iter_mut() {
            subscriber(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "language_changed",
                &self.subscriber_count(EventKind::LanguageChanged),
            )
            .field(
                "theme_changed",
                &self.subscriber_count(EventKind::ThemeChanged),
            )
            .finish()
    }
}
