use serde::{Deserialize, Serialize};

/// Promoción estacional (campus de Natale, etc.)
/// Convive en el mismo payload que los corsi pero no tiene relación con ellos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Promo {
    #[serde(default)]
    pub attiva: bool,

    #[serde(default)]
    pub titolo: String,
    #[serde(default)]
    pub sottotitolo: String,
    #[serde(default)]
    pub descrizione: String,

    /// Fechas en texto libre, p.ej. "27-30 dicembre"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub eta: String,
    #[serde(default)]
    pub prezzo: String,

    /// Nota de plazas, p.ej. "Posti limitati"
    #[serde(default)]
    pub posti: String,

    /// Texto del call-to-action
    #[serde(default)]
    pub cta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promo_sin_attiva_queda_apagada() {
        let promo: Promo =
            serde_json::from_str(r#"{ "titolo": "Campus di Natale" }"#).unwrap();
        assert!(!promo.attiva);
        assert_eq!(promo.titolo, "Campus di Natale");
        assert_eq!(promo.cta, "");
    }
}
