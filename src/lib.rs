// ============================================================================
// BIT CORSI - FRONTEND RUST/WASM
// ============================================================================
// Arquitectura:
// - Views: render de las regiones dinámicas + wiring del markup estático
// - Services: SOLO comunicación HTTP (feed de corsi, relay del formulario)
// - State: estado explícito con Rc<RefCell> (filtro, modal, FAQ, form)
// - Models: estructuras compartidas con corsi.json y el relay
// - Dom: helpers de manipulación DOM
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::state::app_state::UpdateType;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🤖 BIT Corsi - Frontend Rust/WASM");

    let app = App::new()?;
    app.render()?;

    let state = app.state().clone();
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Primer load del catálogo (async, el render inicial muestra el loading)
    views::load_catalog(&state);

    Ok(())
}

/// Re-render completo de las regiones dinámicas
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con un tipo de update específico.
/// Un update incremental que reporta "needs full render" (p.ej. modal aún no
/// presente) cae al render completo.
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(inc_type) => {
            let needs_full_render = {
                if let Some(ref app) = *app_cell.borrow() {
                    match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            let error_str = format!("{:?}", e);
                            if error_str.contains("needs full render") {
                                log::info!("🔄 [UPDATE] Cambiando a re-render completo");
                                true
                            } else {
                                log::error!(
                                    "❌ [UPDATE] Error en actualización incremental: {:?}",
                                    e
                                );
                                false
                            }
                        }
                    }
                } else {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            };

            if needs_full_render {
                if let Some(ref app) = *app_cell.borrow() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(ref app) = *app_cell.borrow() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App no está inicializada");
            }
        }
    });
}

/// Re-render invocable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
