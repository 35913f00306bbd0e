// ============================================================================
// APP STATE - Estado global de la página
// ============================================================================
// La visibilidad de cards, modales y FAQ se deriva siempre de este estado,
// nunca al revés: el DOM no es la fuente de verdad.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::AbortController;

use crate::models::Catalogo;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo de las regiones dinámicas
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Re-renderizar la sección de corsi (loading/ready/empty/error)
    CourseList,
    /// Mostrar/ocultar cards según el filtro activo
    FilterVisibility,
    /// Visibilidad de modales + scroll del body
    Modal,
    /// Estado open de las entradas FAQ (single-open)
    Faq,
    /// Botón submit + mensaje inline del formulario
    FormStatus,
    /// Menú móvil abierto/cerrado
    Menu,
    /// Clase de tema oscuro en el body
    Theme,
}

/// Estado de la carga del catálogo de corsi
#[derive(Clone, PartialEq, Debug)]
pub enum CatalogStatus {
    Loading,
    Ready(Catalogo),
    /// Red, HTTP no-2xx y parse colapsan en un único estado degradado;
    /// el detalle solo va al log
    Failed,
}

/// Estado del envío del formulario de inscripción
#[derive(Clone, PartialEq, Debug)]
pub enum FormStatus {
    Idle,
    Sending,
    Done(FormMessage),
}

#[derive(Clone, PartialEq, Debug)]
pub struct FormMessage {
    pub ok: bool,
    pub text: String,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub catalog: Rc<RefCell<CatalogStatus>>,

    /// Clave del filtro activo, "all" por defecto
    pub active_filter: Rc<RefCell<String>>,

    /// Id del modal abierto (a lo sumo uno por convención)
    pub open_modal_id: Rc<RefCell<Option<String>>>,

    /// Índice de la entrada FAQ abierta (política single-open)
    pub open_faq_index: Rc<RefCell<Option<usize>>>,

    pub form_status: Rc<RefCell<FormStatus>>,

    pub menu_open: Rc<RefCell<bool>>,
    pub dark_theme: Rc<RefCell<bool>>,

    /// Controller del fetch del catálogo en curso; un load nuevo aborta el anterior
    pub catalog_abort: Rc<RefCell<Option<AbortController>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación (sin tocar el DOM ni storage)
    pub fn new() -> Self {
        Self {
            catalog: Rc::new(RefCell::new(CatalogStatus::Loading)),
            active_filter: Rc::new(RefCell::new("all".to_string())),
            open_modal_id: Rc::new(RefCell::new(None)),
            open_faq_index: Rc::new(RefCell::new(None)),
            form_status: Rc::new(RefCell::new(FormStatus::Idle)),
            menu_open: Rc::new(RefCell::new(false)),
            dark_theme: Rc::new(RefCell::new(false)),
            catalog_abort: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Snapshot del estado del catálogo (clone, para no retener el borrow
    /// durante el render)
    pub fn catalog_snapshot(&self) -> CatalogStatus {
        self.catalog.borrow().clone()
    }

    pub fn set_catalog(&self, status: CatalogStatus) {
        *self.catalog.borrow_mut() = status;
    }

    pub fn set_active_filter(&self, filter: &str) {
        *self.active_filter.borrow_mut() = filter.to_string();
    }

    pub fn open_modal(&self, id: &str) {
        *self.open_modal_id.borrow_mut() = Some(id.to_string());
    }

    pub fn close_modals(&self) {
        *self.open_modal_id.borrow_mut() = None;
    }

    /// Toggle de una entrada FAQ. Abrir una cierra la anterior (single-open);
    /// devuelve true si la entrada quedó abierta.
    pub fn toggle_faq(&self, index: usize) -> bool {
        let mut open = self.open_faq_index.borrow_mut();
        if *open == Some(index) {
            *open = None;
            false
        } else {
            *open = Some(index);
            true
        }
    }

    /// Transición Idle/Done -> Sending. Devuelve false si ya hay un envío en
    /// curso: es la protección estructural contra el doble submit.
    pub fn begin_submission(&self) -> bool {
        let mut status = self.form_status.borrow_mut();
        if *status == FormStatus::Sending {
            return false;
        }
        *status = FormStatus::Sending;
        true
    }

    /// Cierra el envío en curso con su resultado (único camino de vuelta a
    /// un botón habilitado)
    pub fn finish_submission(&self, message: FormMessage) {
        *self.form_status.borrow_mut() = FormStatus::Done(message);
    }

    /// Mensaje de validación sin pasar por Sending (no hubo request)
    pub fn reject_submission(&self, text: &str) {
        *self.form_status.borrow_mut() = FormStatus::Done(FormMessage {
            ok: false,
            text: text.to_string(),
        });
    }

    pub fn set_menu_open(&self, open: bool) {
        *self.menu_open.borrow_mut() = open;
    }

    pub fn set_dark_theme(&self, dark: bool) {
        *self.dark_theme.borrow_mut() = dark;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los suscriptores
    pub fn notify_subscribers(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtro_inicial_es_all() {
        let state = AppState::new();
        assert_eq!(*state.active_filter.borrow(), "all");
        state.set_active_filter("8-11");
        assert_eq!(*state.active_filter.borrow(), "8-11");
    }

    #[test]
    fn faq_single_open() {
        let state = AppState::new();
        // A abierta, luego B: A queda cerrada, B abierta
        assert!(state.toggle_faq(0));
        assert!(state.toggle_faq(1));
        assert_eq!(*state.open_faq_index.borrow(), Some(1));
        // Toggle de la abierta la cierra
        assert!(!state.toggle_faq(1));
        assert_eq!(*state.open_faq_index.borrow(), None);
    }

    #[test]
    fn modal_abre_y_cierra_por_id() {
        let state = AppState::new();
        state.open_modal("popup-lego");
        assert_eq!(state.open_modal_id.borrow().as_deref(), Some("popup-lego"));
        state.close_modals();
        assert!(state.open_modal_id.borrow().is_none());
    }

    #[test]
    fn doble_submit_bloqueado() {
        let state = AppState::new();
        assert!(state.begin_submission());
        // Segundo submit mientras el primero está en vuelo: rechazado
        assert!(!state.begin_submission());
        state.finish_submission(FormMessage {
            ok: true,
            text: "ok".to_string(),
        });
        // Con el primero cerrado se puede volver a enviar
        assert!(state.begin_submission());
    }

    #[test]
    fn rechazo_de_validacion_no_pasa_por_sending() {
        let state = AppState::new();
        state.reject_submission("❌ Seleziona un corso.");
        match &*state.form_status.borrow() {
            FormStatus::Done(msg) => {
                assert!(!msg.ok);
                assert!(msg.text.contains("corso"));
            }
            other => panic!("estado inesperado: {:?}", other),
        }
        assert!(state.begin_submission());
    }

    #[test]
    fn notifica_suscriptores() {
        use std::cell::Cell;
        let state = AppState::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe_to_changes(move || hits_clone.set(hits_clone.get() + 1));
        state.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(hits.get(), 2);
    }
}
