//! Overlay controllers wired to the page: photo lightbox, project modal and
//! mobile nav menu. All of them share the page's scroll lock.

use crate::constants::{
    GALLERY_LIGHTBOX_ID, ITEM_ID_ATTR, JOURNEY_GRID_ID, NAV_MENU_ID, NAV_MENU_LINKS,
    NAV_TOGGLE_ID, PROJECTS_GRID_ID, PROJECT_LINK_SELECTOR, PROJECT_MODAL_ID,
};
use crate::content::{PHOTOS, PROJECTS};
use crate::dom::{self, Listener};
use crate::overlay::OverlayView;
use crate::page::PageState;
use crate::sections::{self, NAV_MENU_OWNER};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use temcy_core::lightbox::{Click, Lightbox, Toggle, Transition};
use web_sys as web;

pub struct Overlays {
    page: Rc<PageState>,
    gallery: RefCell<Lightbox<u32>>,
    gallery_view: Option<OverlayView>,
    project: RefCell<Lightbox<u32>>,
    project_view: Option<OverlayView>,
    nav: Cell<Toggle>,
    nav_view: Option<OverlayView>,
}

impl Overlays {
    pub fn new(page: Rc<PageState>) -> Self {
        let doc = page.document.clone();
        Self {
            gallery: RefCell::new(Lightbox::new()),
            gallery_view: OverlayView::find(&doc, GALLERY_LIGHTBOX_ID),
            project: RefCell::new(Lightbox::new()),
            project_view: OverlayView::find(&doc, PROJECT_MODAL_ID),
            nav: Cell::new(Toggle::default()),
            nav_view: OverlayView::find(&doc, NAV_MENU_ID),
            page,
        }
    }

    pub fn gallery_click(&self, click: Click<u32>) {
        let t = self.gallery.borrow_mut().handle(click);
        if let Some(view) = &self.gallery_view {
            let lb = self.gallery.borrow();
            present(view, &t, || match lb.selected_in(&PHOTOS, |p| p.id) {
                Some(item) => view.fill_photo(item),
                None => view.clear_content(),
            });
        }
        self.page.apply_lock(&t);
    }

    pub fn project_click(&self, click: Click<u32>) {
        let t = self.project.borrow_mut().handle(click);
        if let Some(view) = &self.project_view {
            let lb = self.project.borrow();
            present(view, &t, || match lb.selected_in(&PROJECTS, |p| p.id) {
                Some(item) => view.fill_project(item),
                None => view.clear_content(),
            });
        }
        self.page.apply_lock(&t);
    }

    fn nav_transition(&self, t: Transition<()>) {
        match t {
            Transition::Enter(()) => {
                if let Some(view) = &self.nav_view {
                    view.show();
                }
                self.page.mount_section(sections::nav_menu(&NAV_MENU_LINKS));
            }
            Transition::Exit(()) => {
                if let Some(view) = &self.nav_view {
                    view.hide();
                }
                self.page.unmount_section(NAV_MENU_OWNER);
            }
            _ => {}
        }
        self.set_toggle_state();
        self.page.apply_lock(&t);
    }

    fn set_toggle_state(&self) {
        if let Some(btn) = self.page.document.get_element_by_id(NAV_TOGGLE_ID) {
            let open = self.nav.get().is_open();
            _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    pub fn toggle_nav(&self) {
        let mut nav = self.nav.get();
        let t = nav.toggle();
        self.nav.set(nav);
        self.nav_transition(t);
    }

    pub fn close_nav(&self) {
        let mut nav = self.nav.get();
        let t = nav.close();
        self.nav.set(nav);
        self.nav_transition(t);
    }

    /// Escape and in-page navigation close everything that is open.
    pub fn close_all(&self) {
        self.gallery_click(Click::CloseButton);
        self.project_click(Click::CloseButton);
        self.close_nav();
    }
}

fn present<Id: Copy>(view: &OverlayView, t: &Transition<Id>, fill: impl FnOnce()) {
    match t {
        Transition::Enter(_) => {
            fill();
            view.show();
        }
        Transition::Swap { .. } => fill(),
        Transition::Exit(_) => view.hide(),
        Transition::None => {}
    }
}

/// Hook card grids, overlay roots and the menu button to the controllers.
pub fn wire_overlays(document: &web::Document, overlays: &Rc<Overlays>) -> Vec<Listener> {
    let mut out = Vec::new();

    let o = overlays.clone();
    out.extend(dom::on_click_id(document, JOURNEY_GRID_ID, move |ev| {
        if let Some(id) = ev.target().and_then(|t| dom::closest_item_id(&t, ITEM_ID_ATTR)) {
            o.gallery_click(Click::Item(id));
        }
    }));
    let o = overlays.clone();
    out.extend(dom::on_click_id(document, PROJECTS_GRID_ID, move |ev| {
        if dom::target_within(&ev, PROJECT_LINK_SELECTOR) {
            return;
        }
        if let Some(id) = ev.target().and_then(|t| dom::closest_item_id(&t, ITEM_ID_ATTR)) {
            ev.prevent_default();
            o.project_click(Click::Item(id));
        }
    }));

    if let Some(view) = overlays.gallery_view.clone() {
        let o = overlays.clone();
        out.extend(Listener::new(view.root(), "click", move |ev| {
            o.gallery_click(view.classify(&ev));
        }));
    }
    if let Some(view) = overlays.project_view.clone() {
        let o = overlays.clone();
        out.extend(Listener::new(view.root(), "click", move |ev| {
            o.project_click(view.classify(&ev));
        }));
    }

    if let Some(view) = overlays.nav_view.clone() {
        let o = overlays.clone();
        out.extend(Listener::new(view.root(), "click", move |ev| {
            if !matches!(view.classify::<()>(&ev), Click::Content) {
                o.close_nav();
            }
        }));
    }
    let o = overlays.clone();
    out.extend(dom::on_click_id(document, NAV_TOGGLE_ID, move |_| o.toggle_nav()));
    out
}
