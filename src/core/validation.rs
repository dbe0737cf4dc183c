//! Form validation for the login and register screens
//!
//! Each validator returns the message shown under the field, or `Ok(())`.

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Informe seu e-mail".to_string());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Informe um e-mail válido".to_string())
    }
}

/// Login only requires a password to be present
pub fn validate_login_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        Err("Informe sua senha".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        Err("Crie uma senha".to_string())
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Err(format!(
            "A senha deve ter pelo menos {} caracteres",
            MIN_PASSWORD_LEN
        ))
    } else {
        Ok(())
    }
}

pub fn validate_nome(nome: &str) -> Result<(), String> {
    if nome.trim().is_empty() {
        Err("Informe seu nome".to_string())
    } else {
        Ok(())
    }
}

/// Phone is optional; when given it must have 10 or 11 digits (DDD + number)
pub fn validate_telefone(telefone: &str) -> Result<(), String> {
    let telefone = telefone.trim();
    if telefone.is_empty() {
        return Ok(());
    }

    let allowed = telefone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '+'));
    let digits = telefone.chars().filter(char::is_ascii_digit).count();

    if allowed && (10..=11).contains(&digits) {
        Ok(())
    } else {
        Err("Informe um telefone válido com DDD".to_string())
    }
}

/// Phone as sent to the API: `None` when left blank
pub fn normalize_telefone(telefone: &str) -> Option<String> {
    let telefone = telefone.trim();
    if telefone.is_empty() {
        None
    } else {
        Some(telefone.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@pujante.com.br").is_ok());
        assert!(validate_email("  ana@pujante.com  ").is_ok());
        assert_eq!(validate_email(""), Err("Informe seu e-mail".to_string()));
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@pujante.com").is_err());
        assert!(validate_email("ana@pujante").is_err());
        assert!(validate_email("ana@.com").is_err());
        assert!(validate_email("ana@@pujante.com").is_err());
        assert!(validate_email("a na@pujante.com").is_err());
    }

    #[test]
    fn test_validate_passwords() {
        assert!(validate_login_password("x").is_ok());
        assert!(validate_login_password("").is_err());

        assert!(validate_new_password("123456").is_ok());
        assert_eq!(
            validate_new_password("12345"),
            Err("A senha deve ter pelo menos 6 caracteres".to_string())
        );
        assert!(validate_new_password("").is_err());
        assert!(validate_new_password("çãõéíú").is_ok());
    }

    #[test]
    fn test_validate_nome() {
        assert!(validate_nome("Maria").is_ok());
        assert!(validate_nome("   ").is_err());
    }

    #[test]
    fn test_validate_telefone() {
        assert!(validate_telefone("").is_ok());
        assert!(validate_telefone("(11) 99999-9999").is_ok());
        assert!(validate_telefone("1133334444").is_ok());
        assert!(validate_telefone("+55 11 9999").is_err());
        assert!(validate_telefone("9999-9999").is_err());
        assert!(validate_telefone("(11) 9999x-9999").is_err());
    }

    #[test]
    fn test_normalize_telefone() {
        assert_eq!(normalize_telefone("   "), None);
        assert_eq!(
            normalize_telefone(" (11) 99999-9999 "),
            Some("(11) 99999-9999".to_string())
        );
    }
}
