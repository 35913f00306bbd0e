// ============================================================================
// COURSE LIST VIEW - Sección de corsi: load + render de todos sus estados
// ============================================================================
// El contenedor #courses-container siempre se reemplaza entero desde el
// estado (loading / ready / vacío / error), nunca se difea.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, Element};

use crate::dom::{
    append_child, get_element_by_id, on_click, set_inner_html, set_text_content, ElementBuilder,
};
use crate::dom::incremental::update_filter_visibility;
use crate::services::CatalogService;
use crate::state::app_state::{AppState, CatalogStatus, IncrementalUpdate, UpdateType};
use crate::utils::constants::{whatsapp_link, WHATSAPP_NUMBER};
use crate::views::course_card::render_course_card;
use crate::views::promo::render_promo;

/// Lanzar (o relanzar) la carga del catálogo.
/// El load anterior se aborta via AbortController: un request colgado no
/// puede pisar el estado de un load más nuevo.
pub fn load_catalog(state: &AppState) {
    if let Some(prev) = state.catalog_abort.borrow_mut().take() {
        prev.abort();
    }

    let controller = match AbortController::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("❌ [CATALOG] No se pudo crear AbortController: {:?}", e);
            return;
        }
    };
    let signal = controller.signal();
    *state.catalog_abort.borrow_mut() = Some(controller);

    state.set_catalog(CatalogStatus::Loading);
    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CourseList));

    let state = state.clone();
    spawn_local(async move {
        let service = CatalogService::new();
        match service.fetch_catalogo(Some(&signal)).await {
            Ok(catalogo) => {
                if signal.aborted() {
                    log::info!("🔄 [CATALOG] Load abortado, se descarta el resultado");
                    return;
                }
                state.set_catalog(CatalogStatus::Ready(catalogo));
            }
            Err(e) => {
                if signal.aborted() {
                    log::info!("🔄 [CATALOG] Load abortado, se descarta el error");
                    return;
                }
                log::error!("❌ [CATALOG] Error cargando corsi.json: {}", e);
                state.set_catalog(CatalogStatus::Failed);
            }
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CourseList));
    });
}

/// Renderizar la sección de corsi completa según CatalogStatus
pub fn render_course_section(state: &AppState) -> Result<(), JsValue> {
    let container = match get_element_by_id("courses-container") {
        Some(el) => el,
        None => {
            log::warn!("⚠️ [CATALOG] #courses-container no existe en la página");
            return Ok(());
        }
    };

    match state.catalog_snapshot() {
        CatalogStatus::Loading => render_loading(&container),
        CatalogStatus::Failed => render_failed(&container, state),
        CatalogStatus::Ready(catalogo) => {
            if let Some(title) = get_element_by_id("courses-title") {
                set_text_content(&title, &catalogo.titolo_corsi);
            }
            if let Some(subtitle) = get_element_by_id("courses-subtitle") {
                set_text_content(&subtitle, &catalogo.sottotitolo_corsi);
            }

            if let Some(promo_container) = get_element_by_id("promo-container") {
                render_promo(&promo_container, catalogo.promo_natale.as_ref())?;
            }

            set_inner_html(&container, "");

            if catalogo.corsi.is_empty() {
                // Lista vacía: placeholder, nunca una grilla vacía
                let empty = ElementBuilder::new("p")?
                    .class("courses-empty")
                    .text("Nessun corso disponibile al momento. Torna a trovarci presto!")
                    .build();
                append_child(&container, &empty)?;
                return Ok(());
            }

            // Orden de render == orden del array, sin sorting
            for corso in &catalogo.corsi {
                let card = render_course_card(corso)?;
                append_child(&container, &card)?;
            }

            // Re-aplicar el filtro activo a las cards recién creadas
            update_filter_visibility(state)?;

            Ok(())
        }
    }
}

fn render_loading(container: &Element) -> Result<(), JsValue> {
    set_inner_html(container, "");
    let loading = ElementBuilder::new("p")?
        .class("courses-loading")
        .text("Caricamento corsi...")
        .build();
    append_child(container, &loading)
}

/// Placeholder degradado: mensaje, botón de retry y canal alternativo.
/// El detalle del error ya quedó en el log, al usuario no se le distingue
/// red / HTTP / parse.
fn render_failed(container: &Element, state: &AppState) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let error_box = ElementBuilder::new("div")?.class("courses-error").build();

    let message = ElementBuilder::new("p")?
        .text("⚠️ Impossibile caricare i corsi in questo momento.")
        .build();
    append_child(&error_box, &message)?;

    let retry_btn = ElementBuilder::new("button")?
        .class("btn btn-retry")
        .text("Riprova")
        .build();
    {
        let state = state.clone();
        on_click(&retry_btn, move |_| {
            load_catalog(&state);
        })?;
    }
    append_child(&error_box, &retry_btn)?;

    let contact = ElementBuilder::new("p")?.class("courses-error-contact").build();
    let contact_link = ElementBuilder::new("a")?
        .attr("href", &whatsapp_link())?
        .text(&format!("Scrivici su WhatsApp al {}", WHATSAPP_NUMBER))
        .build();
    append_child(&contact, &contact_link)?;
    append_child(&error_box, &contact)?;

    append_child(container, &error_box)
}
