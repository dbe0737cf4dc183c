//! Errors of calls to the Pujante API

use super::models::ApiMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API rejected the credentials or the token (401)
    #[error("Não autorizado")]
    Unauthorized { message: Option<String> },

    #[error("Recurso não encontrado")]
    NotFound { message: Option<String> },

    /// Any other non-2xx response; `message` is the API's own text if it sent one
    #[error("Erro do servidor ({status})")]
    Server { status: u16, message: Option<String> },

    /// The request never got a response
    #[error("Falha de conexão: {0}")]
    Network(String),

    /// The response body was not what we expected
    #[error("Resposta inválida: {0}")]
    Decode(String),

    /// The request could not be built
    #[error("Requisição inválida: {0}")]
    Request(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            401 => ApiError::Unauthorized { message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Server { status, message },
        }
    }

    /// The API's message when it sent one, otherwise `fallback`.
    ///
    /// Mirrors how the screens report errors: the server text if any,
    /// a generic per-screen sentence otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized {
                message: Some(message),
            }
            | ApiError::NotFound {
                message: Some(message),
            }
            | ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_message() {
        let err = ApiError::from_status(400, r#"{"message":"E-mail já cadastrado"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("E-mail já cadastrado".to_string())
            }
        );
        assert_eq!(err.user_message("Erro ao criar conta"), "E-mail já cadastrado");
    }

    #[test]
    fn test_from_status_without_body() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Erro ao fazer login"), "Erro ao fazer login");
    }

    #[test]
    fn test_from_status_blank_message_is_ignored() {
        let err = ApiError::from_status(422, r#"{"message":"   "}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_special_statuses() {
        assert_eq!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized { message: None }
        );
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert_eq!(
            ApiError::from_status(404, "{}"),
            ApiError::NotFound { message: None }
        );
        assert!(!ApiError::from_status(404, "{}").is_unauthorized());
    }

    #[test]
    fn test_rejected_login_shows_api_message() {
        let err = ApiError::from_status(401, r#"{"message":"Email ou senha inválidos"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(
            err.user_message("Erro ao fazer login"),
            "Email ou senha inválidos"
        );
        assert_eq!(
            ApiError::from_status(401, "").user_message("Erro ao fazer login"),
            "Erro ao fazer login"
        );
    }

    #[test]
    fn test_not_found_shows_api_message() {
        let err = ApiError::from_status(404, r#"{"message":"Trilha não encontrada"}"#);
        assert_eq!(
            err,
            ApiError::NotFound {
                message: Some("Trilha não encontrada".to_string())
            }
        );
        assert_eq!(err.user_message("Erro ao criar trilha"), "Trilha não encontrada");
    }

    #[test]
    fn test_network_errors_use_fallback() {
        let err = ApiError::Network("timeout".to_string());
        assert_eq!(err.user_message("Erro ao criar trilha"), "Erro ao criar trilha");
        assert_eq!(err.to_string(), "Falha de conexão: timeout");
    }
}
