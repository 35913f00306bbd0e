// ============================================================================
// NAVIGATION VIEW - Menú móvil, smooth scroll, tema y reveal de secciones
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::dom::{
    document, get_attribute, get_element_by_id, on_click, on_document_click, query_selector,
    query_selector_all, window,
};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::constants::HEADER_OFFSET_PX;
use crate::utils::storage::{save_to_storage, THEME_KEY};

/// Toggle del menú móvil
pub fn wire_mobile_menu(state: &AppState) -> Result<(), JsValue> {
    let toggle = match get_element_by_id("menu-toggle") {
        Some(el) => el,
        None => return Ok(()),
    };

    let state = state.clone();
    on_click(&toggle, move |_| {
        let open = !*state.menu_open.borrow();
        state.set_menu_open(open);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Menu));
    })
}

/// Toggle del tema oscuro, persistido en localStorage
pub fn wire_theme_toggle(state: &AppState) -> Result<(), JsValue> {
    let toggle = match get_element_by_id("theme-toggle") {
        Some(el) => el,
        None => return Ok(()),
    };

    let state = state.clone();
    on_click(&toggle, move |_| {
        let dark = !*state.dark_theme.borrow();
        state.set_dark_theme(dark);
        if let Err(e) = save_to_storage(THEME_KEY, &dark) {
            log::warn!("⚠️ [THEME] No se pudo guardar la preferencia: {}", e);
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Theme));
    })
}

/// Smooth scroll para anclas internas, delegado a nivel de document para
/// cubrir también los links creados al renderizar las cards.
/// Compensa el header fijo y cierra el menú móvil al navegar.
pub fn wire_smooth_scroll(state: &AppState) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    let state = state.clone();
    on_document_click(&doc, move |event| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => return,
        };

        let anchor = match target.closest("a[href^='#']") {
            Ok(Some(a)) => a,
            _ => return,
        };

        let href = match get_attribute(&anchor, "href") {
            Some(h) => h,
            None => return,
        };
        if href == "#" {
            return;
        }

        let section = match query_selector(&href) {
            Ok(Some(el)) => el,
            _ => return,
        };

        event.prevent_default();

        if let Some(section) = section.dyn_ref::<HtmlElement>() {
            if let Some(win) = window() {
                let options = ScrollToOptions::new();
                options.set_top(section.offset_top() as f64 - HEADER_OFFSET_PX);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        }

        // Navegar desde el menú móvil lo cierra
        if *state.menu_open.borrow() {
            state.set_menu_open(false);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Menu));
        }
    })
}

/// Reveal de secciones al entrar en viewport: agrega animate-in una sola vez
/// y deja de observar la sección.
pub fn observe_sections() -> Result<(), JsValue> {
    let sections = query_selector_all(".section")?;
    if sections.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let section = entry.target();
                    let _ = section.class_list().add_1("animate-in");
                    observer.unobserve(&section);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }

    Ok(())
}
