use crate::constants::{SCROLL_LOCKED_CLASS, SMOOTH_SCROLL_CLASS};
use crate::dom;
use crate::sections::SectionPlan;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use temcy_core::bridge::{ElementBounds, OwnerId, ScrollTriggerBridge, TriggerEvent};
use temcy_core::choreo::{self, MountedSection, StyleWrite};
use temcy_core::lightbox::{LockChange, ScrollLock, Transition};
use temcy_core::scroll::{ScrollOptions, SmoothScroll};
use temcy_core::timeline::TargetId;
use web_sys as web;

/// A mounted section plus the elements its targets resolved to.
struct SectionInstance {
    section: MountedSection,
    elements: FnvHashMap<TargetId, web::HtmlElement>,
}

fn apply_writes(elements: &FnvHashMap<TargetId, web::HtmlElement>, writes: &[StyleWrite]) {
    for w in writes {
        match w {
            StyleWrite::Set(id, state) => {
                if let Some(el) = elements.get(id) {
                    dom::write_visual_state(el, state);
                }
            }
            StyleWrite::Clear(id) => {
                if let Some(el) = elements.get(id) {
                    dom::clear_visual_state(el);
                }
            }
        }
    }
}

/// Shared page state. Owned by the site root and handed to listeners and
/// frame tasks as `Rc<PageState>`; there is no global lookup.
pub struct PageState {
    pub document: web::Document,
    pub scroll: RefCell<SmoothScroll>,
    pub bridge: RefCell<ScrollTriggerBridge>,
    lock: RefCell<ScrollLock>,
    sections: RefCell<Vec<SectionInstance>>,
    /// Latest pointer in normalized device coordinates.
    pub pointer: Cell<Vec2>,
    // Set when layout or the trigger set changed; forces a bridge update.
    layout_dirty: Cell<bool>,
    /// Events of the current frame's bridge update.
    pub frame_events: RefCell<Vec<TriggerEvent>>,
}

impl PageState {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            scroll: RefCell::new(SmoothScroll::new(ScrollOptions::default())),
            bridge: RefCell::new(ScrollTriggerBridge::new()),
            lock: RefCell::new(ScrollLock::default()),
            sections: RefCell::new(Vec::new()),
            pointer: Cell::new(Vec2::ZERO),
            layout_dirty: Cell::new(true),
            frame_events: RefCell::new(Vec::new()),
        }
    }

    /// Re-measure the document and every trigger element.
    pub fn measure_layout(&self) {
        let vh = dom::viewport_height();
        let content = dom::content_height(&self.document);
        self.scroll.borrow_mut().resize(content, vh);
        let mut bridge = self.bridge.borrow_mut();
        for inst in self.sections.borrow().iter() {
            inst.section.refresh(|id| measure(&inst.elements, id), &mut bridge);
        }
        self.layout_dirty.set(true);
    }

    #[inline]
    pub fn take_layout_dirty(&self) -> bool {
        self.layout_dirty.replace(false)
    }

    pub fn mount_section(&self, plan: SectionPlan) {
        let elements: FnvHashMap<TargetId, web::HtmlElement> = plan
            .bindings
            .iter()
            .filter_map(|(id, sel)| dom::resolve(&self.document, *sel).map(|el| (*id, el)))
            .collect();
        if elements.len() < plan.bindings.len() {
            log::warn!(
                "[sections] '{}' bound {}/{} elements",
                plan.choreography.name,
                elements.len(),
                plan.bindings.len()
            );
        }
        // Remount replaces the previous instance of the same owner.
        self.unmount_section(plan.owner);
        let section = {
            let mut bridge = self.bridge.borrow_mut();
            choreo::mount(
                plan.owner,
                plan.choreography,
                |id| measure(&elements, id),
                &mut bridge,
            )
        };
        self.sections
            .borrow_mut()
            .push(SectionInstance { section, elements });
        self.layout_dirty.set(true);
    }

    /// Unmount `owner`'s section and restore its elements' inline styles.
    pub fn unmount_section(&self, owner: OwnerId) -> bool {
        let inst = {
            let mut sections = self.sections.borrow_mut();
            match sections.iter().position(|s| s.section.owner() == owner) {
                Some(i) => sections.remove(i),
                None => return false,
            }
        };
        let SectionInstance { section, elements } = inst;
        let writes = section.unmount(&mut self.bridge.borrow_mut());
        apply_writes(&elements, &writes);
        true
    }

    pub fn unmount_all(&self) {
        let owners: Vec<OwnerId> = self
            .sections
            .borrow()
            .iter()
            .map(|s| s.section.owner())
            .collect();
        for owner in owners {
            self.unmount_section(owner);
        }
    }

    /// Advance every section by one frame using this frame's bridge events.
    pub fn advance_sections(&self, dt_sec: f32) {
        let events = self.frame_events.borrow();
        for inst in self.sections.borrow_mut().iter_mut() {
            let writes = inst.section.advance(dt_sec, &events);
            apply_writes(&inst.elements, &writes);
        }
    }

    /// Route an overlay transition through the scroll lock.
    pub fn apply_lock<Id>(&self, t: &Transition<Id>) {
        match self.lock.borrow_mut().apply(t) {
            LockChange::Lock => {
                self.scroll.borrow_mut().stop();
                dom::set_root_class(&self.document, SCROLL_LOCKED_CLASS, true);
                log::info!("[scroll] locked by overlay");
            }
            LockChange::Unlock => {
                self.scroll.borrow_mut().start();
                dom::set_root_class(&self.document, SCROLL_LOCKED_CLASS, false);
                log::info!("[scroll] unlocked");
            }
            LockChange::Unchanged => {}
        }
    }

    /// Hand scrolling back to the browser.
    pub fn restore_native_scroll(&self) {
        self.scroll.borrow_mut().stop();
        dom::set_root_class(&self.document, SMOOTH_SCROLL_CLASS, false);
        dom::set_root_class(&self.document, SCROLL_LOCKED_CLASS, false);
    }
}

fn measure(
    elements: &FnvHashMap<TargetId, web::HtmlElement>,
    id: TargetId,
) -> Option<ElementBounds> {
    elements.get(&id).and_then(|el| dom::element_bounds(el))
}
