// ============================================================================
// CATALOG SERVICE - SOLO comunicación HTTP (stateless)
// ============================================================================
// Obtiene corsi.json con query cache-buster. Sin retry ni timeout: cualquier
// fallo (red, HTTP no-2xx, parse) colapsa en un Err(String) que la vista
// traduce al placeholder degradado.
// ============================================================================

use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::models::Catalogo;
use crate::utils::constants::CORSI_URL;

#[derive(Clone)]
pub struct CatalogService {
    base_url: String,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            base_url: CORSI_URL.to_string(),
        }
    }

    /// URL con cache-buster: el feed se re-lee entero en cada load, nunca
    /// se sirve de caché ni se difea contra un render anterior
    pub fn url_with_cache_buster(&self, timestamp_ms: f64) -> String {
        format!("{}?t={}", self.base_url, timestamp_ms as u64)
    }

    /// Obtener el catálogo de corsi.
    /// El AbortSignal viene del load en curso: un load nuevo aborta este.
    pub async fn fetch_catalogo(&self, signal: Option<&AbortSignal>) -> Result<Catalogo, String> {
        let url = self.url_with_cache_buster(js_sys::Date::now());

        log::info!("📚 [CATALOG] Cargando catálogo desde: {}", url);

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let catalogo = response
            .json::<Catalogo>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ [CATALOG] Catálogo cargado: {} corsi", catalogo.corsi.len());

        Ok(catalogo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_lleva_cache_buster() {
        let service = CatalogService {
            base_url: "corsi.json".to_string(),
        };
        assert_eq!(
            service.url_with_cache_buster(1700000000123.0),
            "corsi.json?t=1700000000123"
        );
    }
}
