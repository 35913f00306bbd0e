use serde::{Deserialize, Serialize};

use crate::models::promo::Promo;

/// Payload completo de `corsi.json`
/// Las claves del feed están en italiano camelCase, ver index.html / corsi.json
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Catalogo {
    #[serde(rename = "titoloCorsi", default)]
    pub titolo_corsi: String,
    #[serde(rename = "sottotitoloCorsi", default)]
    pub sottotitolo_corsi: String,

    // Promoción estacional, solo se renderiza si attiva == true
    #[serde(rename = "promoNatale", default)]
    pub promo_natale: Option<Promo>,

    #[serde(default)]
    pub corsi: Vec<Corso>,
}

/// Un corso del catálogo, inmutable durante la vida de la página
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Corso {
    pub nome: String,

    /// Fascia de edad, p.ej. "8-11" (también es la clave de filtro)
    pub eta: String,

    /// Herramienta/kit del corso, p.ej. "lego", "scratch" (clave de filtro)
    pub strumento: String,

    /// Número de encuentros
    #[serde(default)]
    pub incontri: u32,

    pub prezzo: String,

    /// Línea de horario, p.ej. "Sabato 10:00-11:30"
    #[serde(default)]
    pub orario: String,

    #[serde(default)]
    pub descrizione: String,

    /// "open" | "closed" - cualquier otro valor se trata como cerrado
    #[serde(default = "default_stato")]
    pub stato: String,

    /// Texto del badge de estado, p.ej. "Iscrizioni aperte"
    #[serde(default)]
    pub badge: Option<String>,
}

fn default_stato() -> String {
    "closed".to_string()
}

impl Corso {
    /// Un corso abierto muestra el link de inscripción, uno cerrado el botón disabled
    pub fn is_open(&self) -> bool {
        self.stato == "open"
    }

    /// Match de filtro: "all" muestra todo, cualquier otra clave compara
    /// exactamente contra eta o strumento (no containment: "8-13" no debe
    /// matchear el filtro "8-11")
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == "all" || self.eta == filter || self.strumento == filter
    }

    /// Texto del badge con fallback según el estado
    pub fn badge_text(&self) -> &str {
        match &self.badge {
            Some(text) if !text.is_empty() => text,
            _ => {
                if self.is_open() {
                    "Iscrizioni aperte"
                } else {
                    "Iscrizioni chiuse"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corso_aperto() -> Corso {
        serde_json::from_str(
            r#"{
                "nome": "Robotica LEGO",
                "eta": "8-11",
                "strumento": "lego",
                "incontri": 8,
                "prezzo": "120€",
                "orario": "Sabato 10:00-11:30",
                "descrizione": "Costruisci e programma robot LEGO.",
                "stato": "open",
                "badge": "Iscrizioni aperte"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_payload_completo() {
        let json = r#"{
            "titoloCorsi": "I nostri corsi",
            "sottotitoloCorsi": "Robotica e coding per ragazzi",
            "promoNatale": {
                "attiva": true,
                "titolo": "Campus di Natale",
                "prezzo": "80€"
            },
            "corsi": [
                { "nome": "Robotica LEGO", "eta": "8-11", "strumento": "lego",
                  "prezzo": "120€", "stato": "open" },
                { "nome": "Coding Scratch", "eta": "6-7", "strumento": "scratch",
                  "prezzo": "100€", "stato": "closed" }
            ]
        }"#;

        let catalogo: Catalogo = serde_json::from_str(json).unwrap();
        assert_eq!(catalogo.titolo_corsi, "I nostri corsi");
        assert_eq!(catalogo.corsi.len(), 2);
        assert!(catalogo.corsi[0].is_open());
        assert!(!catalogo.corsi[1].is_open());
        assert!(catalogo.promo_natale.as_ref().unwrap().attiva);
    }

    #[test]
    fn parse_payload_minimo() {
        // Sin corsi ni promo: lista vacía y None, nunca error
        let catalogo: Catalogo = serde_json::from_str(r#"{ "titoloCorsi": "Corsi" }"#).unwrap();
        assert!(catalogo.corsi.is_empty());
        assert!(catalogo.promo_natale.is_none());
        assert_eq!(catalogo.sottotitolo_corsi, "");
    }

    #[test]
    fn stato_ausente_es_cerrado() {
        let corso: Corso = serde_json::from_str(
            r#"{ "nome": "X", "eta": "8-11", "strumento": "lego", "prezzo": "0€" }"#,
        )
        .unwrap();
        assert!(!corso.is_open());
        assert_eq!(corso.badge_text(), "Iscrizioni chiuse");
    }

    #[test]
    fn filtro_all_y_claves_exactas() {
        let corso = corso_aperto();
        assert!(corso.matches_filter("all"));
        assert!(corso.matches_filter("8-11"));
        assert!(corso.matches_filter("lego"));
        assert!(!corso.matches_filter("scratch"));
        // Equality estricta: una fascia compuesta no matchea otra clave
        assert!(!corso.matches_filter("8-13"));
        assert!(!corso.matches_filter("8"));
    }

    #[test]
    fn badge_con_fallback() {
        let mut corso = corso_aperto();
        assert_eq!(corso.badge_text(), "Iscrizioni aperte");
        corso.badge = None;
        assert_eq!(corso.badge_text(), "Iscrizioni aperte");
        corso.stato = "closed".to_string();
        assert_eq!(corso.badge_text(), "Iscrizioni chiuse");
    }
}
