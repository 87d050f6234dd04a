//! # Outside Click Detection
//!
//! Reports pointer-down events that land outside a region. Used to close the
//! history panel when the user clicks somewhere else on the screen.
//!
//! ## Scoped Bindings
//!
//! `bind()` hands back an [`OutsideClickGuard`]. The binding lives exactly as
//! long as the guard: the detector only keeps a `Weak` reference, so once the
//! owning view drops its guard the callback can never run again, even if the
//! detector outlives the view.
//!
//! ```rust,ignore
//! let guard = detector.bind(Rect::default(), move || {
//!     let _ = tx.send(Action::OutsideDismiss);
//! });
//! guard.set_region(home_area);    // after every draw
//! detector.pointer_down(col, row); // on every mouse-down
//! drop(guard);                     // on unmount
//! ```
//!
//! The region is updated after each frame because terminal layouts move on
//! resize.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

struct Binding {
    region: Cell<Rect>,
    callback: RefCell<Box<dyn FnMut()>>,
}

/// Holds a binding alive. Dropping it unbinds.
pub struct OutsideClickGuard {
    binding: Rc<Binding>,
}

impl OutsideClickGuard {
    /// Move the watched region (e.g. after a resize or re-layout).
    pub fn set_region(&self, region: Rect) {
        self.binding.region.set(region);
    }

    pub fn region(&self) -> Rect {
        self.binding.region.get()
    }
}

#[derive(Default)]
pub struct OutsideClickDetector {
    bindings: Vec<Weak<Binding>>,
}

impl OutsideClickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `region`. `callback` runs once per pointer-down outside it, for as
    /// long as the returned guard is alive.
    pub fn bind(&mut self, region: Rect, callback: impl FnMut() + 'static) -> OutsideClickGuard {
        let binding = Rc::new(Binding {
            region: Cell::new(region),
            callback: RefCell::new(Box::new(callback)),
        });
        self.bindings.push(Rc::downgrade(&binding));
        OutsideClickGuard { binding }
    }

    /// Feed a pointer-down at (`column`, `row`). Returns how many callbacks ran.
    pub fn pointer_down(&mut self, column: u16, row: u16) -> usize {
        // Released bindings go first so they never fire
        self.bindings.retain(|binding| binding.strong_count() > 0);

        let position = Position::new(column, row);
        let live: Vec<Rc<Binding>> = self.bindings.iter().filter_map(Weak::upgrade).collect();
        let mut fired = 0;
        for binding in live {
            if binding.region.get().contains(position) {
                continue;
            }
            // A callback that re-enters its own binding is skipped, not a panic
            if let Ok(mut callback) = binding.callback.try_borrow_mut() {
                callback();
                fired += 1;
            }
        }
        fired
    }

    /// Number of bindings whose guard is still alive.
    pub fn active_bindings(&self) -> usize {
        self.bindings
            .iter()
            .filter(|binding| binding.strong_count() > 0)
            .count()
    }
}
