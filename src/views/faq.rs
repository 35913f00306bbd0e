// ============================================================================
// FAQ VIEW - Accordion single-open sobre <details>
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDetailsElement;

use crate::dom::{on_event, query_selector_all};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};

/// Wiring de las entradas `#faq details`.
/// Abrir una cierra las demás (update_faq_entries deriva el open de cada
/// entry del estado). El handler solo reacciona cuando el DOM diverge del
/// estado, así los set_open del update no re-disparan el ciclo.
pub fn wire_faq_entries(state: &AppState) -> Result<(), JsValue> {
    for (index, entry) in query_selector_all("#faq details")?.into_iter().enumerate() {
        let entry_el = entry.clone();
        let state = state.clone();
        on_event(&entry, "toggle", move |_| {
            let details = match entry_el.dyn_ref::<HtmlDetailsElement>() {
                Some(d) => d,
                None => return,
            };

            let current = *state.open_faq_index.borrow();
            if details.open() {
                if current != Some(index) {
                    state.toggle_faq(index);
                    crate::rerender_app_with_type(UpdateType::Incremental(
                        IncrementalUpdate::Faq,
                    ));
                }
            } else if current == Some(index) {
                // El usuario cerró la entrada abierta
                state.toggle_faq(index);
            }
        })?;
    }

    Ok(())
}
