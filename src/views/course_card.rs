// ============================================================================
// COURSE CARD VIEW - Card de un corso del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Corso;

/// Renderizar la card de un corso.
/// Los data-age/data-tool son el contrato con el filtro: la visibilidad se
/// decide comparando esos atributos contra la clave activa.
pub fn render_course_card(corso: &Corso) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("course-card")
        .attr("data-age", &corso.eta)?
        .attr("data-tool", &corso.strumento)?
        .build();

    // Badge de estado
    let badge_class = if corso.is_open() {
        "course-badge badge-open"
    } else {
        "course-badge badge-closed"
    };
    let badge = ElementBuilder::new("span")?
        .class(badge_class)
        .text(corso.badge_text())
        .build();
    append_child(&card, &badge)?;

    let name = ElementBuilder::new("h3")?
        .class("course-name")
        .text(&corso.nome)
        .build();
    append_child(&card, &name)?;

    // Tres chips de metadata: edad, encuentros, precio
    let meta = ElementBuilder::new("div")?.class("course-meta").build();
    let chips = [
        format!("👶 {} anni", corso.eta),
        format!("📅 {} incontri", corso.incontri),
        format!("💶 {}", corso.prezzo),
    ];
    for chip_text in &chips {
        let chip = ElementBuilder::new("span")?
            .class("meta-chip")
            .text(chip_text)
            .build();
        append_child(&meta, &chip)?;
    }
    append_child(&card, &meta)?;

    if !corso.orario.is_empty() {
        let schedule = ElementBuilder::new("p")?
            .class("course-schedule")
            .text(&corso.orario)
            .build();
        append_child(&card, &schedule)?;
    }

    let description = ElementBuilder::new("p")?
        .class("course-desc")
        .text(&corso.descrizione)
        .build();
    append_child(&card, &description)?;

    // CTA: link de inscripción solo para corsi abiertos
    if corso.is_open() {
        let cta = ElementBuilder::new("a")?
            .class("btn btn-iscriviti")
            .attr("href", "#contatti")?
            .text("Iscriviti ora")
            .build();
        append_child(&card, &cta)?;
    } else {
        let cta = ElementBuilder::new("button")?
            .class("btn btn-chiuso")
            .attr("disabled", "disabled")?
            .text("Iscrizioni chiuse")
            .build();
        append_child(&card, &cta)?;
    }

    Ok(card)
}
