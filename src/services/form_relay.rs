// ============================================================================
// FORM RELAY - Envío del formulario de inscripción (stateless)
// ============================================================================
// POST JSON al web-app de Apps Script. El contrato es mínimo: request
// emitida, status 2xx = éxito, cualquier otra cosa = error genérico.
// ============================================================================

use gloo_net::http::Request;

use crate::models::Iscrizione;
use crate::utils::constants::FORM_RELAY_URL;

#[derive(Clone)]
pub struct FormRelay {
    endpoint: String,
}

impl FormRelay {
    pub fn new() -> Self {
        Self {
            endpoint: FORM_RELAY_URL.to_string(),
        }
    }

    /// Enviar una inscripción al relay
    pub async fn submit_iscrizione(&self, iscrizione: &Iscrizione) -> Result<(), String> {
        log::info!(
            "📨 [FORM] Enviando iscrizione de: {} (corso: {})",
            iscrizione.nome,
            iscrizione.corso
        );

        let response = Request::post(&self.endpoint)
            .json(iscrizione)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            log::info!("✅ [FORM] Iscrizione enviada");
            Ok(())
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }
}
