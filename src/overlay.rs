use crate::constants::{
    OVERLAY_BODY_SELECTOR, OVERLAY_CLOSE_SELECTOR, OVERLAY_CONTENT_SELECTOR,
    OVERLAY_IMAGE_SELECTOR, OVERLAY_TAG_SELECTOR, OVERLAY_TITLE_SELECTOR,
};
use crate::dom;
use temcy_core::constants::OVERLAY_FADE_SEC;
use temcy_core::content::{GalleryItem, ProjectItem};
use temcy_core::lightbox::Click;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of one overlay (lightbox, project modal or nav menu).
///
/// Visibility is driven through the inline style so the fade works without
/// any stylesheet support.
#[derive(Clone)]
pub struct OverlayView {
    root: web::HtmlElement,
}

impl OverlayView {
    pub fn find(document: &web::Document, id: &str) -> Option<Self> {
        let root = document
            .get_element_by_id(id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let view = Self { root };
        view.hide_now();
        Some(view)
    }

    #[inline]
    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn show(&self) {
        _ = self.root.set_attribute(
            "style",
            &format!(
                "opacity:1;visibility:visible;pointer-events:auto;transition:opacity {}s ease",
                OVERLAY_FADE_SEC
            ),
        );
        _ = self.root.set_attribute("aria-hidden", "false");
    }

    /// Fade out; visibility flips once the fade has finished.
    pub fn hide(&self) {
        _ = self.root.set_attribute(
            "style",
            &format!(
                "opacity:0;visibility:hidden;pointer-events:none;transition:opacity {0}s ease,visibility 0s linear {0}s",
                OVERLAY_FADE_SEC
            ),
        );
        _ = self.root.set_attribute("aria-hidden", "true");
    }

    fn hide_now(&self) {
        _ = self
            .root
            .set_attribute("style", "opacity:0;visibility:hidden;pointer-events:none");
        _ = self.root.set_attribute("aria-hidden", "true");
    }

    /// Where a click on the overlay landed. Clicks inside the content never
    /// count as backdrop clicks.
    pub fn classify<Id>(&self, ev: &web::Event) -> Click<Id> {
        Click::in_overlay(
            dom::target_within(ev, OVERLAY_CLOSE_SELECTOR),
            dom::target_within(ev, OVERLAY_CONTENT_SELECTOR),
        )
    }

    fn set_text(&self, css: &str, text: &str) {
        if let Some(el) = dom::query_one(&self.root, css) {
            el.set_inner_text(text);
        }
    }

    fn set_image(&self, src: Option<&str>, alt: &str) {
        if let Some(el) = dom::query_one(&self.root, OVERLAY_IMAGE_SELECTOR) {
            match src {
                Some(src) => {
                    _ = el.set_attribute("src", src);
                    _ = el.set_attribute("alt", alt);
                    _ = el.style().remove_property("display");
                }
                None => {
                    _ = el.remove_attribute("src");
                    _ = el.style().set_property("display", "none");
                }
            }
        }
    }

    pub fn fill_photo(&self, item: &GalleryItem) {
        self.set_image(Some(item.image), item.category);
        self.set_text(OVERLAY_TITLE_SELECTOR, &item.caption());
        self.set_text(OVERLAY_TAG_SELECTOR, item.category);
        self.set_text(OVERLAY_BODY_SELECTOR, &item.session_label());
    }

    pub fn fill_project(&self, item: &ProjectItem) {
        self.set_image(item.image, item.title);
        self.set_text(OVERLAY_TITLE_SELECTOR, item.title);
        self.set_text(OVERLAY_TAG_SELECTOR, item.stat);
        self.set_text(OVERLAY_BODY_SELECTOR, item.description);
    }

    /// Blank the content so a missing record renders nothing stale.
    pub fn clear_content(&self) {
        self.set_image(None, "");
        self.set_text(OVERLAY_TITLE_SELECTOR, "");
        self.set_text(OVERLAY_TAG_SELECTOR, "");
        self.set_text(OVERLAY_BODY_SELECTOR, "");
    }
}
