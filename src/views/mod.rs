// ============================================================================
// VIEWS - Render de las regiones dinámicas + wiring del markup estático
// ============================================================================

pub mod contact_form;
pub mod course_card;
pub mod course_list;
pub mod faq;
pub mod filters;
pub mod modals;
pub mod navigation;
pub mod promo;

pub use course_card::render_course_card;
pub use course_list::{load_catalog, render_course_section};
pub use promo::render_promo;
