//! HTTP client for the Pujante API
//!
//! All calls go to `/api/...` on the page's own origin (the server proxies
//! them upstream) and carry `Authorization: Bearer <token>` when a session
//! is stored.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::wizard::{NovaAula, NovaTrilha, NovoModulo};
use crate::core::{ApiError, Aula, AuthResponse, Created, Trilha};

/// Prefix of every API route on the page's origin
pub const API_PREFIX: &str = "/api";

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

pub fn api_url(path: &str) -> String {
    format!("{}/{}", API_PREFIX, path.trim_start_matches('/'))
}

#[cfg(not(feature = "ssr"))]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::{Serialize, de::DeserializeOwned};

    use super::api_url;
    use crate::core::ApiError;
    use crate::ui::session;

    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match session::load_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    async fn expect_ok(response: Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let response = with_auth(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = with_auth(gloo_net::http::Request::post(&api_url(path)))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// POST `multipart/form-data`; the browser sets the boundary header
    pub async fn post_form<T: DeserializeOwned>(
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        }

        let request = with_auth(gloo_net::http::Request::post(&api_url(path)))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post_empty(path: &str) -> Result<(), ApiError> {
        let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(response).await
    }
}

/// SSR stubs - the API is only called from the browser
#[cfg(feature = "ssr")]
mod transport {
    use serde::{Serialize, de::DeserializeOwned};

    use crate::core::ApiError;

    fn unavailable() -> ApiError {
        ApiError::Request("API calls are not available on server".to_string())
    }

    pub async fn get_json<T: DeserializeOwned>(_path: &str) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_form<T: DeserializeOwned>(
        _path: &str,
        _fields: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_empty(_path: &str) -> Result<(), ApiError> {
        Err(unavailable())
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    transport::get_json(path).await
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    transport::post_json("/auth/login", request).await
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    transport::post_json("/auth/register", request).await
}

pub async fn list_trilhas() -> Result<Vec<Trilha>, ApiError> {
    get("/trilhas").await
}

/// Track with its modules and lessons
pub async fn get_trilha(id: i64) -> Result<Trilha, ApiError> {
    get(&format!("/trilhas/{}", id)).await
}

/// Lesson with its module, sibling lessons and parent track
pub async fn get_aula(id: i64) -> Result<Aula, ApiError> {
    get(&format!("/trilhas/aulas/{}", id)).await
}

pub async fn create_trilha(trilha: &NovaTrilha) -> Result<Created, ApiError> {
    transport::post_form("/trilhas", &trilha.form_fields()).await
}

pub async fn create_modulo(modulo: &NovoModulo) -> Result<Created, ApiError> {
    transport::post_json("/trilhas/modulos", modulo).await
}

pub async fn create_aula(aula: &NovaAula) -> Result<Created, ApiError> {
    transport::post_form("/trilhas/aulas", &aula.form_fields()).await
}

/// Report a lesson as watched
pub async fn concluir_aula(id: i64) -> Result<(), ApiError> {
    transport::post_empty(&format!("/trilhas/aulas/{}/concluir", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("/trilhas"), "/api/trilhas");
        assert_eq!(api_url("trilhas/aulas/3"), "/api/trilhas/aulas/3");
    }

    #[test]
    fn test_register_request_omits_empty_telefone() {
        let request = RegisterRequest {
            nome: "Ana".to_string(),
            email: "ana@pujante.com.br".to_string(),
            password: "segredo1".to_string(),
            telefone: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("telefone").is_none());
        assert_eq!(json["nome"], "Ana");
    }
}
