//! Navigation events emitted by the list.
//!
//! The list never changes the filter or navigates by itself. Every interaction
//! ends in exactly one [`NavigationEvent`] handed to a [`NavigationDispatcher`],
//! and the dispatcher (the application) decides what happens next. These two
//! events are the only channel from the list to the outside world.

use serde::{Deserialize, Serialize};

/// Outbound event produced by an interactive list element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The filter text should become this value.
    ///
    /// Carries the raw text from the search input, or `""` when the title row
    /// is activated to return to the unfiltered list.
    FilterChanged(String),

    /// The item with this row key was selected; open its detail view.
    ///
    /// The key identifies one item across the whole catalog.
    ItemSelected(String),
}

/// Receiver of navigation events.
///
/// Implemented by the application state owner. `Vec<NavigationEvent>` also
/// implements it, which records events for later inspection.
pub trait NavigationDispatcher {
    fn dispatch(&mut self, event: NavigationEvent);
}

impl NavigationDispatcher for Vec<NavigationEvent> {
    fn dispatch(&mut self, event: NavigationEvent) {
        self.push(event);
    }
}

impl<D: NavigationDispatcher + ?Sized> NavigationDispatcher for &mut D {
    fn dispatch(&mut self, event: NavigationEvent) {
        (**self).dispatch(event);
    }
}
