use serde::{Deserialize, Serialize};

use crate::utils::validation::{is_valid_email, is_valid_telefono};

/// Payload del formulario de inscripción, se envía como JSON al relay
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Iscrizione {
    pub nome: String,
    pub email: String,
    pub telefono: String,
    pub corso: String,
    #[serde(default)]
    pub note: String,
}

impl Iscrizione {
    /// Validación client-side antes de tocar la red.
    /// Devuelve el primer mensaje de error (en italiano, se muestra inline)
    /// en el mismo orden que valida el sitio: nome, email, telefono, corso.
    pub fn validate(&self) -> Result<(), String> {
        if self.nome.trim().is_empty() {
            return Err("❌ Inserisci nome e cognome.".to_string());
        }
        if !is_valid_email(self.email.trim()) {
            return Err("❌ Inserisci un’email valida.".to_string());
        }
        if !is_valid_telefono(self.telefono.trim()) {
            return Err("❌ Inserisci un numero di telefono valido.".to_string());
        }
        if self.corso.is_empty() {
            return Err("❌ Seleziona un corso.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valida() -> Iscrizione {
        Iscrizione {
            nome: "Mario Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            telefono: "+39 370 306 9215".to_string(),
            corso: "Robotica LEGO".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn iscrizione_valida_pasa() {
        assert!(valida().validate().is_ok());
    }

    #[test]
    fn nome_vacio_rechazado_primero() {
        let mut form = valida();
        form.nome = "   ".to_string();
        form.email = "not-an-email".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.contains("nome e cognome"));
    }

    #[test]
    fn email_invalida_rechazada() {
        let mut form = valida();
        form.email = "not-an-email".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.contains("email"));
    }

    #[test]
    fn telefono_invalido_rechazado() {
        let mut form = valida();
        form.telefono = "12ab34".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.contains("telefono"));
    }

    #[test]
    fn corso_no_seleccionado_rechazado() {
        let mut form = valida();
        form.corso = String::new();
        let err = form.validate().unwrap_err();
        assert!(err.contains("corso"));
    }

    #[test]
    fn payload_json_con_claves_del_relay() {
        let json = serde_json::to_string(&valida()).unwrap();
        assert!(json.contains("\"nome\""));
        assert!(json.contains("\"telefono\""));
        assert!(json.contains("\"corso\""));
    }
}
