// ============================================================================
// VALIDATION - Validación client-side de los campos del formulario
// ============================================================================

use regex::Regex;
use std::sync::OnceLock;

/// Forma mínima de email: algo@algo.algo (misma regla del sitio)
pub fn is_valid_email(email: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").ok())
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Teléfono: prefijo + opcional y 8-15 cifras, los espacios se ignoran
pub fn is_valid_telefono(telefono: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let compact: String = telefono.chars().filter(|c| !c.is_whitespace()).collect();
    RE.get_or_init(|| Regex::new(r"^\+?\d{8,15}$").ok())
        .as_ref()
        .map(|re| re.is_match(&compact))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_valida() {
        assert!(is_valid_email("mario.rossi@example.com"));
        assert!(is_valid_email("a@b.it"));
    }

    #[test]
    fn email_invalida() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("mario@rossi"));
        assert!(!is_valid_email("mario rossi@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn telefono_valido_con_espacios_y_prefijo() {
        assert!(is_valid_telefono("+39 370 306 9215"));
        assert!(is_valid_telefono("3703069215"));
        assert!(is_valid_telefono("+393703069215"));
    }

    #[test]
    fn telefono_invalido() {
        // Pocas cifras
        assert!(!is_valid_telefono("12345"));
        // Demasiadas cifras
        assert!(!is_valid_telefono("1234567890123456"));
        // Letras
        assert!(!is_valid_telefono("37030abc15"));
        assert!(!is_valid_telefono(""));
    }
}
