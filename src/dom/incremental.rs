// ============================================================================
// INCREMENTAL DOM UPDATES - Sincronizar elementos específicos con el estado
// ============================================================================
// Cada función deriva la vista de AppState sin re-renderizar las regiones
// dinámicas completas.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlDetailsElement, HtmlElement};

use crate::dom::{
    add_class, document, get_attribute, get_element_by_id, query_selector, query_selector_all,
    remove_class, set_attribute, set_display,
};
use crate::state::app_state::{AppState, FormStatus};

/// Botón submit: etiquetas de reposo y de envío en curso
const SUBMIT_LABEL_IDLE: &str = "Invia richiesta";
const SUBMIT_LABEL_BUSY: &str = "Invio in corso...";

/// Mostrar/ocultar cards según el filtro activo y marcar el botón activo.
/// Las cards comparan sus data-age/data-tool contra la clave exacta; el
/// sentinel "all" muestra todo. Solo visibilidad: nada se remueve del DOM.
pub fn update_filter_visibility(state: &AppState) -> Result<(), JsValue> {
    let filter = state.active_filter.borrow().clone();

    // 1. Botón activo único
    for button in query_selector_all(".filters button[data-filter]")? {
        let is_active = get_attribute(&button, "data-filter").as_deref() == Some(filter.as_str());
        if is_active {
            add_class(&button, "active")?;
        } else {
            remove_class(&button, "active")?;
        }
    }

    // 2. Visibilidad de cada card
    for card in query_selector_all(".course-card")? {
        let age = get_attribute(&card, "data-age").unwrap_or_default();
        let tool = get_attribute(&card, "data-tool").unwrap_or_default();

        let visible = filter == "all" || age == filter || tool == filter;
        set_display(&card, if visible { "flex" } else { "none" })?;
    }

    Ok(())
}

/// Visibilidad de modales + bloqueo del scroll del body.
/// Quita "active" de TODOS los modales abiertos (tolera dos abiertos por
/// error) y abre solo el que indica el estado.
pub fn update_modal_visibility(state: &AppState) -> Result<(), JsValue> {
    let open_id = state.open_modal_id.borrow().clone();

    for modal in query_selector_all(".modal.active")? {
        let keep_open = match (&open_id, get_attribute(&modal, "id")) {
            (Some(id), Some(modal_id)) => *id == modal_id,
            _ => false,
        };
        if !keep_open {
            remove_class(&modal, "active")?;
        }
    }

    if let Some(id) = &open_id {
        let modal = get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;
        add_class(&modal, "active")?;

        // Foco dentro del diálogo (accesibilidad con teclado)
        if let Ok(Some(content)) = modal.query_selector(".modal-content") {
            if let Some(content) = content.dyn_ref::<HtmlElement>() {
                let _ = content.focus();
            }
        }
    }

    // Scroll del body bloqueado mientras haya un modal abierto
    if let Some(doc) = document() {
        if let Some(body) = doc.body() {
            let overflow = if open_id.is_some() { "hidden" } else { "" };
            body.style().set_property("overflow", overflow)?;
        }
    }

    Ok(())
}

/// Política single-open del accordion FAQ: solo la entrada del estado queda
/// abierta, todas las demás se cierran explícitamente.
pub fn update_faq_entries(state: &AppState) -> Result<(), JsValue> {
    let open_index = *state.open_faq_index.borrow();

    for (i, entry) in query_selector_all("#faq details")?.into_iter().enumerate() {
        if let Some(details) = entry.dyn_ref::<HtmlDetailsElement>() {
            details.set_open(open_index == Some(i));
        }
    }

    Ok(())
}

/// Botón submit + mensaje inline del formulario según FormStatus
pub fn update_form_status(state: &AppState) -> Result<(), JsValue> {
    let status = state.form_status.borrow().clone();

    if let Ok(Some(button)) = query_selector("#form-iscrizione button[type='submit']") {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            match status {
                FormStatus::Sending => {
                    button.set_disabled(true);
                    button.set_text_content(Some(SUBMIT_LABEL_BUSY));
                }
                _ => {
                    button.set_disabled(false);
                    button.set_text_content(Some(SUBMIT_LABEL_IDLE));
                }
            }
        }
    }

    if let Some(message_el) = get_element_by_id("form-message") {
        if let Some(message_el) = message_el.dyn_ref::<HtmlElement>() {
            match &status {
                FormStatus::Done(msg) => {
                    let color = if msg.ok { "#FF6B35" } else { "red" };
                    message_el.style().set_property("color", color)?;
                    message_el.set_text_content(Some(&msg.text));
                    message_el.style().set_property("display", "block")?;
                }
                FormStatus::Idle => {
                    message_el.style().set_property("display", "none")?;
                }
                // Durante el envío se deja el mensaje anterior tal cual
                FormStatus::Sending => {}
            }
        }
    }

    Ok(())
}

/// Menú móvil abierto/cerrado
pub fn update_menu(state: &AppState) -> Result<(), JsValue> {
    let open = *state.menu_open.borrow();

    if let Some(menu) = get_element_by_id("nav-menu") {
        if open {
            add_class(&menu, "open")?;
        } else {
            remove_class(&menu, "open")?;
        }
    }
    if let Some(toggle) = get_element_by_id("menu-toggle") {
        set_attribute(&toggle, "aria-expanded", if open { "true" } else { "false" })?;
    }

    Ok(())
}

/// Clase de tema oscuro en el body (preferencia persistida en localStorage)
pub fn update_theme(state: &AppState) -> Result<(), JsValue> {
    let dark = *state.dark_theme.borrow();

    if let Some(doc) = document() {
        if let Some(body) = doc.body() {
            if dark {
                body.class_list().add_1("dark-theme")?;
            } else {
                body.class_list().remove_1("dark-theme")?;
            }
        }
    }

    Ok(())
}
