// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Se engancha al markup estático de la página una sola vez (App::new) y
// desde ahí toda la vista se deriva del estado: render completo de las
// regiones dinámicas o updates incrementales puntuales.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::document;
use crate::dom::incremental::{
    update_faq_entries, update_filter_visibility, update_form_status, update_menu,
    update_modal_visibility, update_theme,
};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::storage::{load_from_storage, THEME_KEY};
use crate::views;
use crate::views::render_course_section;

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    /// Crear la aplicación: estado inicial + wiring de todos los controles
    /// del markup estático. Corre UNA sola vez, los listeners globales no se
    /// deben acumular.
    pub fn new() -> Result<Self, JsValue> {
        document().ok_or_else(|| JsValue::from_str("No document"))?;

        let state = AppState::new();

        // Preferencia de tema persistida
        if let Some(dark) = load_from_storage::<bool>(THEME_KEY) {
            log::info!("💾 [APP] Preferencia de tema restaurada: dark={}", dark);
            state.set_dark_theme(dark);
        }

        views::navigation::wire_mobile_menu(&state)?;
        views::navigation::wire_theme_toggle(&state)?;
        views::navigation::wire_smooth_scroll(&state)?;
        views::navigation::observe_sections()?;
        views::filters::wire_filter_buttons(&state)?;
        views::modals::wire_tool_cards(&state)?;
        views::modals::wire_global_close(&state)?;
        views::faq::wire_faq_entries(&state)?;
        views::contact_form::wire_registration_form(&state)?;

        // Re-render batcheado ante cambios de estado
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state })
    }

    /// Render completo: regiones dinámicas + sincronizar todo lo derivado
    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] Render completo");

        render_course_section(&self.state)?;

        update_filter_visibility(&self.state)?;
        update_modal_visibility(&self.state)?;
        update_faq_entries(&self.state)?;
        update_form_status(&self.state)?;
        update_menu(&self.state)?;
        update_theme(&self.state)?;

        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo los elementos que cambiaron)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::CourseList => render_course_section(&self.state),
            IncrementalUpdate::FilterVisibility => update_filter_visibility(&self.state),
            IncrementalUpdate::Modal => update_modal_visibility(&self.state),
            IncrementalUpdate::Faq => update_faq_entries(&self.state),
            IncrementalUpdate::FormStatus => update_form_status(&self.state),
            IncrementalUpdate::Menu => update_menu(&self.state),
            IncrementalUpdate::Theme => update_theme(&self.state),
        }
    }
}
