// ============================================================================
// PROMO BANNER VIEW - Promoción estacional del payload
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_display, set_inner_html, ElementBuilder};
use crate::models::Promo;

/// Renderizar (o esconder) el banner de promoción.
/// Solo se muestra con attiva == true; si no, el contenedor queda oculto.
pub fn render_promo(container: &Element, promo: Option<&Promo>) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let promo = match promo {
        Some(p) if p.attiva => p,
        _ => {
            set_display(container, "none")?;
            return Ok(());
        }
    };

    let banner = ElementBuilder::new("div")?.class("promo-banner").build();

    let title = ElementBuilder::new("h3")?
        .class("promo-title")
        .text(&promo.titolo)
        .build();
    append_child(&banner, &title)?;

    if !promo.sottotitolo.is_empty() {
        let subtitle = ElementBuilder::new("p")?
            .class("promo-subtitle")
            .text(&promo.sottotitolo)
            .build();
        append_child(&banner, &subtitle)?;
    }

    if !promo.descrizione.is_empty() {
        let description = ElementBuilder::new("p")?
            .class("promo-desc")
            .text(&promo.descrizione)
            .build();
        append_child(&banner, &description)?;
    }

    let meta = ElementBuilder::new("div")?.class("promo-meta").build();
    for (icon, value) in [("📅", &promo.date), ("👶", &promo.eta), ("💶", &promo.prezzo)] {
        if value.is_empty() {
            continue;
        }
        let chip = ElementBuilder::new("span")?
            .class("meta-chip")
            .text(&format!("{} {}", icon, value))
            .build();
        append_child(&meta, &chip)?;
    }
    append_child(&banner, &meta)?;

    if !promo.posti.is_empty() {
        let posti = ElementBuilder::new("p")?
            .class("promo-posti")
            .text(&promo.posti)
            .build();
        append_child(&banner, &posti)?;
    }

    let cta_text = if promo.cta.is_empty() {
        "Iscriviti ora"
    } else {
        promo.cta.as_str()
    };
    let cta = ElementBuilder::new("a")?
        .class("btn btn-promo")
        .attr("href", "#contatti")?
        .text(cta_text)
        .build();
    append_child(&banner, &cta)?;

    append_child(container, &banner)?;
    set_display(container, "block")?;

    Ok(())
}
