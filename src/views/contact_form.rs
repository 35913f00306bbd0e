// ============================================================================
// CONTACT FORM VIEW - Formulario de inscripción
// ============================================================================
// Intercepta el submit nativo, valida client-side y solo entonces toca la
// red. El botón ocupado se deriva de FormStatus: begin_submission() es la
// única puerta de entrada, así un doble click no genera dos POST.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{get_element_by_id, on_event};
use crate::models::Iscrizione;
use crate::services::FormRelay;
use crate::state::app_state::{AppState, FormMessage, IncrementalUpdate, UpdateType};
use crate::utils::constants::WHATSAPP_NUMBER;

/// Wiring del formulario #form-iscrizione
pub fn wire_registration_form(state: &AppState) -> Result<(), JsValue> {
    let form = match get_element_by_id("form-iscrizione") {
        Some(el) => el,
        None => {
            log::warn!("⚠️ [FORM] #form-iscrizione no existe en la página");
            return Ok(());
        }
    };

    let form_el = form.clone();
    let state = state.clone();
    on_event(&form, "submit", move |event| {
        event.prevent_default();

        let iscrizione = Iscrizione {
            nome: field_value("nome").trim().to_string(),
            email: field_value("email").trim().to_string(),
            telefono: field_value("telefono").trim().to_string(),
            corso: field_value("corso"),
            note: field_value("note").trim().to_string(),
        };

        // Validación: si falla no hay request de red
        if let Err(message) = iscrizione.validate() {
            state.reject_submission(&message);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::FormStatus));
            return;
        }

        if !state.begin_submission() {
            log::warn!("⚠️ [FORM] Envío ya en curso, submit ignorado");
            return;
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::FormStatus));

        let state = state.clone();
        let form_el = form_el.clone();
        spawn_local(async move {
            let relay = FormRelay::new();
            match relay.submit_iscrizione(&iscrizione).await {
                Ok(()) => {
                    state.finish_submission(FormMessage {
                        ok: true,
                        text: "✅ Richiesta inviata! Ti contatteremo a breve.".to_string(),
                    });
                    if let Some(form) = form_el.dyn_ref::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                Err(e) => {
                    log::error!("❌ [FORM] Error enviando iscrizione: {}", e);
                    state.finish_submission(FormMessage {
                        ok: false,
                        text: format!("❌ Errore. Scrivici su WhatsApp al {}.", WHATSAPP_NUMBER),
                    });
                }
            }
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::FormStatus));
        });
    })
}

/// Valor de un campo del formulario por id (input, select o textarea)
fn field_value(id: &str) -> String {
    let element = match get_element_by_id(id) {
        Some(el) => el,
        None => return String::new(),
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return textarea.value();
    }
    String::new()
}
