//! Widget registry and pointer dispatch
//!
//! A widget is a rectangular hit-testable region with a pointer-release
//! handler. The registry keeps widgets in registration order and routes a
//! pointer release to every widget whose rectangle contains the point,
//! most-recently-registered first. Overlapping widgets all receive the
//! notification; this is broadcast, not topmost-wins. Press, drag, and
//! scroll events are never routed to widgets; those are session-level
//! subscriptions only.

use tracing::trace;

use crate::geometry::{Point, Rect};
use crate::session::Screen;

/// Capability interface for a hit-testable region.
///
/// Concrete widgets implement this by composition; there is no base widget
/// type.
pub trait Widget {
    /// The rectangle this widget currently occupies.
    fn frame(&self) -> Rect;

    /// Called when a pointer release lands inside [`frame`](Widget::frame).
    fn pointer_up(&mut self, screen: &mut Screen, at: Point);
}

/// Opaque handle identifying a registered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

/// The ordered set of live widgets.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: Vec<(WidgetId, Box<dyn Widget>)>,
    next_id: u64,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        WidgetRegistry::default()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Append a widget to the live set. Registration order is preserved;
    /// nothing is deduplicated.
    pub fn register(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.push((id, widget));
        id
    }

    /// Remove a widget from the live set. Returns `false` if the id is not
    /// registered.
    pub fn deregister(&mut self, id: WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|(wid, _)| *wid != id);
        self.widgets.len() != before
    }

    /// Notify every widget containing `at`, most recently registered first.
    pub fn dispatch_pointer_up(&mut self, screen: &mut Screen, at: Point) {
        for (id, widget) in self.widgets.iter_mut().rev() {
            if widget.frame().contains(at) {
                trace!(?id, ?at, "pointer release hit");
                widget.pointer_up(screen, at);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        frame: Rect,
        name: &'static str,
        hits: Rc<RefCell<Vec<(&'static str, Point)>>>,
    }

    impl Widget for Probe {
        fn frame(&self) -> Rect {
            self.frame
        }

        fn pointer_up(&mut self, _screen: &mut Screen, at: Point) {
            self.hits.borrow_mut().push((self.name, at));
        }
    }

    fn test_screen() -> Screen {
        Screen::new(Box::new(Vec::new()), Size::default())
    }

    #[test]
    fn test_dispatch_hits_containing_widget() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Probe {
            frame: Rect::new(10, 10, 20, 10),
            name: "a",
            hits: hits.clone(),
        }));

        let mut screen = test_screen();
        registry.dispatch_pointer_up(&mut screen, Point::new(15, 12));
        registry.dispatch_pointer_up(&mut screen, Point::new(31, 20)); // outside

        assert_eq!(*hits.borrow(), vec![("a", Point::new(15, 12))]);
    }

    #[test]
    fn test_overlapping_widgets_all_notified_reverse_order() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Probe {
            frame: Rect::new(0, 0, 20, 20),
            name: "a",
            hits: hits.clone(),
        }));
        registry.register(Box::new(Probe {
            frame: Rect::new(10, 10, 20, 20),
            name: "b",
            hits: hits.clone(),
        }));

        let mut screen = test_screen();
        registry.dispatch_pointer_up(&mut screen, Point::new(15, 15));

        // Both receive the release; most recently registered first.
        assert_eq!(
            *hits.borrow(),
            vec![("b", Point::new(15, 15)), ("a", Point::new(15, 15))]
        );
    }

    #[test]
    fn test_deregister_stops_delivery() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = WidgetRegistry::new();
        let id = registry.register(Box::new(Probe {
            frame: Rect::new(0, 0, 20, 20),
            name: "a",
            hits: hits.clone(),
        }));

        assert!(registry.deregister(id));
        assert!(!registry.deregister(id)); // already gone
        assert!(registry.is_empty());

        let mut screen = test_screen();
        registry.dispatch_pointer_up(&mut screen, Point::new(5, 5));
        assert!(hits.borrow().is_empty());
    }

    #[test]
    fn test_ids_stay_unique_across_removal() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = WidgetRegistry::new();
        let first = registry.register(Box::new(Probe {
            frame: Rect::new(0, 0, 1, 1),
            name: "a",
            hits: hits.clone(),
        }));
        registry.deregister(first);
        let second = registry.register(Box::new(Probe {
            frame: Rect::new(0, 0, 1, 1),
            name: "b",
            hits: hits.clone(),
        }));

        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_boundary_containment_dispatch() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Probe {
            frame: Rect::new(10, 10, 20, 10),
            name: "a",
            hits: hits.clone(),
        }));

        let mut screen = test_screen();
        registry.dispatch_pointer_up(&mut screen, Point::new(10, 10));
        registry.dispatch_pointer_up(&mut screen, Point::new(30, 20));
        registry.dispatch_pointer_up(&mut screen, Point::new(31, 20));

        assert_eq!(
            *hits.borrow(),
            vec![("a", Point::new(10, 10)), ("a", Point::new(30, 20))]
        );
    }
}
