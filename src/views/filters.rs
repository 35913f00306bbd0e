// ============================================================================
// FILTERS VIEW - Botones de filtro por edad/herramienta
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_attribute, on_click, query_selector_all};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};

/// Wiring de los botones `.filters button[data-filter]`.
/// Un click fija el filtro en el estado; el botón activo y la visibilidad de
/// las cards se derivan después en update_filter_visibility.
pub fn wire_filter_buttons(state: &AppState) -> Result<(), JsValue> {
    let buttons = query_selector_all(".filters button[data-filter]")?;
    if buttons.is_empty() {
        log::warn!("⚠️ [FILTERS] No hay botones de filtro en la página");
        return Ok(());
    }

    for button in buttons {
        let button_el = button.clone();
        let state = state.clone();
        on_click(&button, move |_| {
            if let Some(filter) = get_attribute(&button_el, "data-filter") {
                log::info!("🔎 [FILTERS] Filtro activo: {}", filter);
                state.set_active_filter(&filter);
                crate::rerender_app_with_type(UpdateType::Incremental(
                    IncrementalUpdate::FilterVisibility,
                ));
            }
        })?;
    }

    Ok(())
}
