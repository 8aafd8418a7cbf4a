//! DOM rendering surface
//!
//! Every element lookup is existence-checked. A page that lacks an element
//! simply does not get the corresponding update.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    Url,
};

use crate::display::{ControlState, DisplayFrame};
use crate::interactive::HoverEffect;
use crate::surface::{Announcement, Landmark, RenderSurface};
use crate::transition::SlideTransition;

const PROGRESS_CLASS: &str = "clancy-progress";

const PROGRESS_STYLES: &str = "
.clancy-progress {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: rgba(var(--color-brown-600-rgb, 94, 82, 64), 0.15);
    z-index: 1000;
    pointer-events: none;
}
.progress-fill {
    height: 100%;
    background: linear-gradient(90deg, var(--color-primary), var(--color-success));
    transition: width 0.3s ease;
}
";

const CONFIRM_FADE_IN_MS: i32 = 50;
const CONFIRM_VISIBLE_MS: i32 = 2000;
const CONFIRM_FADE_OUT_MS: i32 = 300;

/// Rendering surface over the live document
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Attach to the current document
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// Number of action item checkboxes on the page
    ///
    /// Also gives each checkbox a pointer cursor.
    pub fn prepare_action_items(&self) -> usize {
        let checkboxes = self.elements(".action-checkbox");
        for checkbox in &checkboxes {
            skip_missing("action cursor", set_style(checkbox, "cursor", "pointer"));
        }
        checkboxes.len()
    }

    /// Attach hover listeners for each effect
    ///
    /// Listeners live as long as the page.
    pub fn apply_hover_effects(&self, effects: &[HoverEffect]) {
        for effect in effects {
            for element in self.elements(&effect.selector_list()) {
                let enter = style_listener(&element, effect.enter);
                let leave = style_listener(&element, effect.leave);
                skip_missing(
                    "hover enter",
                    element.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref()),
                );
                skip_missing(
                    "hover leave",
                    element.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref()),
                );
                enter.forget();
                leave.forget();
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn elements(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn first(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_control(&self, id: &str, control: &ControlState) {
        let Some(button) = self
            .document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        button.set_disabled(control.disabled);
        button.set_text_content(Some(control.label));
    }

    fn render_frame(&self, frame: &DisplayFrame) -> Result<(), JsValue> {
        for slide in self.elements(".slide") {
            slide.class_list().remove_1("active")?;
        }
        if let Some(slide) = self.first(&format!("[data-slide=\"{}\"]", frame.active_slide)) {
            slide.class_list().add_1("active")?;
        }

        for (i, indicator) in self.elements(".indicator").iter().enumerate() {
            indicator
                .class_list()
                .toggle_with_force("active", frame.is_indicator_active(i + 1))?;
        }

        self.set_text("currentSlide", &frame.counter_text);
        self.set_text("totalSlides", &frame.total_text);
        self.document.set_title(&frame.document_title);
        self.set_control("prevBtn", &frame.previous);
        self.set_control("nextBtn", &frame.next);
        Ok(())
    }

    fn body(&self) -> Result<HtmlElement, JsValue> {
        self.document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))
    }

    fn progress_fill(&self) -> Result<Element, JsValue> {
        if let Some(fill) = self.first(&format!(".{} .progress-fill", PROGRESS_CLASS)) {
            return Ok(fill);
        }

        let body = self.body()?;
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(PROGRESS_STYLES));
        body.append_child(&style)?;

        let bar = self.document.create_element("div")?;
        bar.set_class_name(PROGRESS_CLASS);
        let fill = self.document.create_element("div")?;
        fill.set_class_name("progress-fill");
        bar.append_child(&fill)?;
        body.append_child(&bar)?;
        Ok(fill)
    }

    fn post_announcement(document: &Document, message: &str, lifetime_ms: u32) -> Result<(), JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let region = document.create_element("div")?;
        region.set_attribute("aria-live", "polite")?;
        region.set_attribute("aria-atomic", "true")?;
        region.set_class_name("sr-only");
        region.set_text_content(Some(message));
        body.append_child(&region)?;

        after(lifetime_ms as i32, move || {
            if body.contains(Some(region.as_ref())) {
                region.remove();
            }
        })
    }

    fn show_confirmation(&self, index: usize) -> Result<(), JsValue> {
        let Some(checkbox) = self.elements(".action-checkbox").into_iter().nth(index) else {
            return Ok(());
        };
        let Some(item) = checkbox.closest(".action-item")? else {
            return Ok(());
        };

        let badge = self.document.create_element("span")?;
        badge.set_text_content(Some(" ✓ Completed!"));
        set_style(&badge, "color", "var(--color-success)")?;
        set_style(&badge, "font-size", "var(--font-size-xs)")?;
        set_style(&badge, "font-weight", "var(--font-weight-medium)")?;
        set_style(&badge, "opacity", "0")?;
        set_style(&badge, "transition", "opacity 0.3s ease")?;
        item.append_child(&badge)?;

        let shown = badge.clone();
        after(CONFIRM_FADE_IN_MS, move || {
            skip_missing("confirm fade in", set_style(&shown, "opacity", "1"));
        })?;

        after(CONFIRM_VISIBLE_MS, move || {
            skip_missing("confirm fade out", set_style(&badge, "opacity", "0"));
            let fade = after(CONFIRM_FADE_OUT_MS, move || {
                if item.contains(Some(badge.as_ref())) {
                    badge.remove();
                }
            });
            skip_missing("confirm removal", fade);
        })
    }

    fn download(&self, file_name: &str, contents: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let anchor = self
            .document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(file_name);

        let body = self.body()?;
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        Url::revoke_object_url(&url)
    }
}

impl RenderSurface for DomSurface {
    fn apply_frame(&mut self, frame: &DisplayFrame) {
        skip_missing("frame", self.render_frame(frame));
    }

    fn play_transition(&mut self, transition: &SlideTransition) {
        let Some(slide) = self.first(".slide.active") else {
            return;
        };

        let start = SlideTransition::transform_css(transition.initial_offset_px());
        skip_missing("transition start", set_style(&slide, "opacity", "0"));
        skip_missing("transition start", set_style(&slide, "transform", &start));

        let settled = after(transition.duration_ms as i32, move || {
            skip_missing("transition end", set_style(&slide, "opacity", "1"));
            skip_missing(
                "transition end",
                set_style(&slide, "transform", &SlideTransition::transform_css(0.0)),
            );
        });
        skip_missing("transition timer", settled);
    }

    fn set_progress(&mut self, percent: f64) {
        let result = self
            .progress_fill()
            .and_then(|fill| set_style(&fill, "width", &format!("{}%", percent)));
        skip_missing("progress", result);
    }

    fn set_landmark_roles(&mut self, landmarks: &[Landmark]) {
        for landmark in landmarks {
            let selector = match landmark {
                Landmark::Main => ".presentation-main",
                Landmark::Banner => ".presentation-header",
                Landmark::Navigation => ".presentation-footer",
            };
            if let Some(element) = self.first(selector) {
                skip_missing("landmark", element.set_attribute("role", landmark.role()));
            }
        }
    }

    fn announce(&mut self, announcement: &Announcement) {
        let document = self.document.clone();
        let message = announcement.message.clone();
        let lifetime_ms = announcement.lifetime_ms;
        let posted = after(announcement.delay_ms as i32, move || {
            skip_missing(
                "announcement",
                Self::post_announcement(&document, &message, lifetime_ms),
            );
        });
        skip_missing("announcement timer", posted);
    }

    fn set_action_item(&mut self, index: usize, completed: bool) {
        let Some(checkbox) = self.elements(".action-checkbox").into_iter().nth(index) else {
            return;
        };
        let (mark, color) = if completed {
            ("✓", "var(--color-success)")
        } else {
            ("□", "var(--color-primary)")
        };
        checkbox.set_text_content(Some(mark));
        skip_missing("action item", set_style(&checkbox, "color", color));
    }

    fn confirm_action_item(&mut self, index: usize) {
        skip_missing("action confirmation", self.show_confirmation(index));
    }

    fn toggle_fullscreen(&mut self) {
        if self.document.fullscreen_element().is_some() {
            self.document.exit_fullscreen();
        } else if let Some(root) = self.document.document_element() {
            skip_missing("fullscreen", root.request_fullscreen());
        }
    }

    fn show_help(&mut self, text: &str) {
        log::info!("{}", text);
        if let Some(window) = web_sys::window() {
            skip_missing("help", window.alert_with_message(text));
        }
    }

    fn offer_download(&mut self, file_name: &str, contents: &str) {
        if let Err(e) = self.download(file_name, contents) {
            log::warn!("[deck] export not available in this environment: {:?}", e);
        }
    }
}

/// Log a failed DOM operation at debug level and carry on
fn skip_missing<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::debug!("[deck] {} skipped: {:?}", what, e);
    }
}

/// Set an inline style property; an empty value removes it
fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    element.style().set_property(property, value)
}

/// Run `f` once after `delay_ms`
fn after<F>(delay_ms: i32, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(())
}

fn style_listener(
    element: &Element,
    declarations: &'static [(&'static str, &'static str)],
) -> Closure<dyn FnMut()> {
    let element = element.clone();
    Closure::wrap(Box::new(move || {
        for (property, value) in declarations {
            skip_missing("hover", set_style(&element, property, value));
        }
    }) as Box<dyn FnMut()>)
}
