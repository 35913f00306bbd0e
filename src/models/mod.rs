// ============================================================================
// MODELS - Estructuras compartidas con el feed JSON y el relay del formulario
// ============================================================================

pub mod corso;
pub mod iscrizione;
pub mod promo;

pub use corso::{Catalogo, Corso};
pub use iscrizione::Iscrizione;
pub use promo::Promo;
