// ============================================================================
// MODALS VIEW - Popups de las tool cards
// ============================================================================
// Trigger: .tool-card[data-popup] abre el dialog con ese id. Cierre por
// close-btn, click en el backdrop (target == el propio .modal) o Escape.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{document, get_attribute, has_class, on_click, on_document_click,
    on_document_keydown, query_selector_all};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};

/// Wiring de las tool cards que abren modales por data-popup
pub fn wire_tool_cards(state: &AppState) -> Result<(), JsValue> {
    for card in query_selector_all(".tool-card[data-popup]")? {
        let card_el = card.clone();
        let state = state.clone();
        on_click(&card, move |_| {
            if let Some(popup_id) = get_attribute(&card_el, "data-popup") {
                log::info!("🪟 [MODAL] Abriendo: {}", popup_id);
                state.open_modal(&popup_id);
                crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal));
            }
        })?;
    }
    Ok(())
}

/// Listeners globales de cierre, registrados UNA sola vez desde App::new()
pub fn wire_global_close(state: &AppState) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    // Click delegado: close-btn o backdrop del modal
    {
        let state = state.clone();
        on_document_click(&doc, move |event| {
            let target = match event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            {
                Some(el) => el,
                None => return,
            };

            if has_class(&target, "close-btn") || has_class(&target, "modal") {
                if let Ok(Some(_)) = target.closest(".modal") {
                    state.close_modals();
                    crate::rerender_app_with_type(UpdateType::Incremental(
                        IncrementalUpdate::Modal,
                    ));
                }
            }
        })?;
    }

    // Escape cierra cualquier modal abierto (también dos abiertos a la vez)
    {
        let state = state.clone();
        on_document_keydown(&doc, move |event| {
            if event.key() == "Escape" {
                state.close_modals();
                crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal));
            }
        })?;
    }

    Ok(())
}
