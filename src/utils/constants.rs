/// URL del feed de corsi (relativa al sitio)
/// Configurable en tiempo de compilación via CORSI_URL env var
pub const CORSI_URL: &str = match option_env!("CORSI_URL") {
    Some(url) => url,
    None => "corsi.json",
};

/// URL del relay del formulario (Google Apps Script web-app)
/// Configurable en tiempo de compilación via FORM_RELAY_URL env var
pub const FORM_RELAY_URL: &str = match option_env!("FORM_RELAY_URL") {
    Some(url) => url,
    None => "https://script.google.com/macros/s/AKfycby7zd1Kjhnm80gyKtVB60EO-g9Y833cpAzLh8epnd2r0SZtSZqYQtWL6wXNfVIV8EZH/exec",
};

/// Número WhatsApp mostrado como canal alternativo cuando falla el envío
pub const WHATSAPP_NUMBER: &str = "+39 370 306 9215";

/// Link wa.me del número de contacto (solo cifras, sin + ni espacios)
pub fn whatsapp_link() -> String {
    let digits: String = WHATSAPP_NUMBER
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    format!("https://wa.me/{}", digits)
}

/// Offset del header fijo para el smooth scroll (px)
pub const HEADER_OFFSET_PX: f64 = 48.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_solo_cifras() {
        assert_eq!(whatsapp_link(), "https://wa.me/393703069215");
    }
}
