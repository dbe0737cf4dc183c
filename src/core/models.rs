//! Wire models for the Pujante API
//!
//! Field names follow the backend's JSON (Portuguese) so the structs
//! deserialize straight from the responses without renames.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
}

/// Successful login / register response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Response of any create endpoint; only the new id is used
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Created {
    pub id: i64,
}

/// Error body sent by the API (and by the local proxy)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// A learning track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trilha {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub capa_url: Option<String>,
    #[serde(default)]
    pub total_aulas: u32,
    /// Total duration in minutes
    #[serde(default)]
    pub duracao_total: u32,
    #[serde(default)]
    pub modulos: Vec<Modulo>,
}

impl Trilha {
    /// Modules in display order
    pub fn modulos_ordenados(&self) -> Vec<Modulo> {
        let mut modulos = self.modulos.clone();
        modulos.sort_by_key(|m| m.ordem);
        modulos
    }

    pub fn total_modulos(&self) -> usize {
        self.modulos.len()
    }

    /// First lesson of the first module, used by the "Começar Trilha" button
    pub fn primeira_aula(&self) -> Option<Aula> {
        self.modulos_ordenados()
            .into_iter()
            .find_map(|m| m.aulas_ordenadas().into_iter().next())
    }
}

/// Parent track reference embedded in a lesson payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrilhaRef {
    pub id: i64,
    pub titulo: String,
}

/// A module inside a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modulo {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub ordem: u32,
    #[serde(default)]
    pub trilha: Option<TrilhaRef>,
    #[serde(default)]
    pub aulas: Vec<Aula>,
}

impl Modulo {
    /// Lessons in display order
    pub fn aulas_ordenadas(&self) -> Vec<Aula> {
        let mut aulas = self.aulas.clone();
        aulas.sort_by_key(|a| a.ordem);
        aulas
    }
}

/// A single lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aula {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub ordem: u32,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duracao: Option<u32>,
    #[serde(default)]
    pub modulo: Option<Box<Modulo>>,
}

/// Public path under which the backend serves uploaded videos
pub const UPLOADS_VIDEO_PREFIX: &str = "/uploads/videos/";

impl Aula {
    /// URL the `<video>` element should load.
    ///
    /// An explicit `video_url` wins; a stored `video_path` is mapped to the
    /// public uploads directory by its file name.
    pub fn video_source(&self) -> Option<String> {
        if let Some(url) = self.video_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }

        let path = self.video_path.as_deref().filter(|p| !p.is_empty())?;
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        if file_name.is_empty() {
            return None;
        }
        Some(format!("{}{}", UPLOADS_VIDEO_PREFIX, file_name))
    }

    pub fn has_video(&self) -> bool {
        self.video_source().is_some()
    }

    /// Parent track, reached through the embedded module
    pub fn trilha(&self) -> Option<&TrilhaRef> {
        self.modulo.as_ref().and_then(|m| m.trilha.as_ref())
    }

    /// Other lessons of the same module, in order, at most `limit`
    pub fn proximas(&self, limit: usize) -> Vec<Aula> {
        let Some(modulo) = self.modulo.as_ref() else {
            return Vec::new();
        };

        modulo
            .aulas_ordenadas()
            .into_iter()
            .filter(|a| a.id != self.id)
            .take(limit)
            .collect()
    }

    /// 1-based `(position, total)` of this lesson inside its module
    pub fn posicao_no_modulo(&self) -> (usize, usize) {
        let Some(modulo) = self.modulo.as_ref().filter(|m| !m.aulas.is_empty()) else {
            return (1, 1);
        };

        let aulas = modulo.aulas_ordenadas();
        let index = aulas
            .iter()
            .position(|a| a.id == self.id)
            .map(|i| i + 1)
            .unwrap_or(1);
        (index, aulas.len())
    }

    /// Share of the module covered up to and including this lesson, in percent
    pub fn progresso_no_modulo(&self) -> f64 {
        let (posicao, total) = self.posicao_no_modulo();
        (posicao as f64 / total.max(1) as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn aula(id: i64, ordem: u32) -> Aula {
        Aula {
            id,
            titulo: format!("Aula {}", id),
            descricao: None,
            ordem,
            video_url: None,
            video_path: None,
            thumbnail_url: None,
            duracao: None,
            modulo: None,
        }
    }

    fn aula_em_modulo(id: i64, irmas: Vec<Aula>) -> Aula {
        let mut atual = irmas
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap_or_else(|| aula(id, 1));
        atual.modulo = Some(Box::new(Modulo {
            id: 10,
            titulo: "Fundamentos".to_string(),
            descricao: None,
            ordem: 1,
            trilha: Some(TrilhaRef {
                id: 7,
                titulo: "Direito Agrário".to_string(),
            }),
            aulas: irmas,
        }));
        atual
    }

    #[test]
    fn test_trilha_deserializes_with_missing_optional_fields() {
        let trilha: Trilha = serde_json::from_value(json!({
            "id": 1,
            "titulo": "Direito Agrário"
        }))
        .unwrap();

        assert_eq!(trilha.descricao, "");
        assert_eq!(trilha.total_aulas, 0);
        assert_eq!(trilha.duracao_total, 0);
        assert!(trilha.modulos.is_empty());
        assert!(trilha.capa_url.is_none());
    }

    #[test]
    fn test_aula_deserializes_nested_modulo_and_trilha() {
        let aula: Aula = serde_json::from_value(json!({
            "id": 3,
            "titulo": "Contratos",
            "ordem": 2,
            "duracao": 754,
            "video_path": "/srv/uploads/videos/abc.mp4",
            "modulo": {
                "id": 9,
                "titulo": "Contratos Agrários",
                "ordem": 1,
                "trilha": { "id": 4, "titulo": "Direito do Agronegócio" },
                "aulas": [
                    { "id": 2, "titulo": "Intro", "ordem": 1 },
                    { "id": 3, "titulo": "Contratos", "ordem": 2 }
                ]
            }
        }))
        .unwrap();

        assert_eq!(aula.trilha().map(|t| t.id), Some(4));
        assert_eq!(aula.duracao, Some(754));
        assert_eq!(aula.posicao_no_modulo(), (2, 2));
    }

    #[test]
    fn test_video_source_prefers_url() {
        let mut a = aula(1, 1);
        a.video_url = Some("https://cdn.example.com/v.mp4".to_string());
        a.video_path = Some("/data/videos/local.mp4".to_string());

        assert_eq!(
            a.video_source().as_deref(),
            Some("https://cdn.example.com/v.mp4")
        );
    }

    #[test]
    fn test_video_source_maps_path_to_uploads() {
        let mut a = aula(1, 1);
        a.video_path = Some("/data/uploads/videos/aula-1.mp4".to_string());
        assert_eq!(
            a.video_source().as_deref(),
            Some("/uploads/videos/aula-1.mp4")
        );

        a.video_path = Some("aula-2.mp4".to_string());
        assert_eq!(
            a.video_source().as_deref(),
            Some("/uploads/videos/aula-2.mp4")
        );
    }

    #[test]
    fn test_video_source_absent() {
        let mut a = aula(1, 1);
        assert!(a.video_source().is_none());
        assert!(!a.has_video());

        a.video_url = Some(String::new());
        a.video_path = Some("/videos/".to_string());
        assert!(a.video_source().is_none());
    }

    #[test]
    fn test_proximas_excludes_current_and_limits() {
        let irmas = vec![aula(5, 5), aula(1, 1), aula(3, 3), aula(2, 2), aula(4, 4)];
        let atual = aula_em_modulo(2, irmas);

        let ids: Vec<i64> = atual.proximas(3).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_proximas_without_modulo_is_empty() {
        assert!(aula(1, 1).proximas(3).is_empty());
    }

    #[test]
    fn test_posicao_no_modulo_uses_ordem() {
        let irmas = vec![aula(30, 3), aula(10, 1), aula(20, 2)];
        let atual = aula_em_modulo(20, irmas);

        assert_eq!(atual.posicao_no_modulo(), (2, 3));
        assert!((atual.progresso_no_modulo() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_posicao_defaults_without_modulo() {
        let a = aula(1, 1);
        assert_eq!(a.posicao_no_modulo(), (1, 1));
        assert_eq!(a.progresso_no_modulo(), 100.0);
    }

    #[test]
    fn test_modulos_ordenados_and_primeira_aula() {
        let trilha = Trilha {
            id: 1,
            titulo: "T".to_string(),
            descricao: String::new(),
            capa_url: None,
            total_aulas: 3,
            duracao_total: 90,
            modulos: vec![
                Modulo {
                    id: 2,
                    titulo: "Segundo".to_string(),
                    descricao: None,
                    ordem: 2,
                    trilha: None,
                    aulas: vec![aula(20, 1)],
                },
                Modulo {
                    id: 1,
                    titulo: "Primeiro".to_string(),
                    descricao: None,
                    ordem: 1,
                    trilha: None,
                    aulas: vec![aula(11, 2), aula(10, 1)],
                },
            ],
        };

        let ordem: Vec<i64> = trilha.modulos_ordenados().iter().map(|m| m.id).collect();
        assert_eq!(ordem, vec![1, 2]);
        assert_eq!(trilha.primeira_aula().map(|a| a.id), Some(10));
        assert_eq!(trilha.total_modulos(), 2);
    }

    #[test]
    fn test_primeira_aula_skips_empty_modules() {
        let trilha = Trilha {
            id: 1,
            titulo: "T".to_string(),
            descricao: String::new(),
            capa_url: None,
            total_aulas: 1,
            duracao_total: 0,
            modulos: vec![
                Modulo {
                    id: 1,
                    titulo: "Vazio".to_string(),
                    descricao: None,
                    ordem: 1,
                    trilha: None,
                    aulas: vec![],
                },
                Modulo {
                    id: 2,
                    titulo: "Cheio".to_string(),
                    descricao: None,
                    ordem: 2,
                    trilha: None,
                    aulas: vec![aula(42, 1)],
                },
            ],
        };

        assert_eq!(trilha.primeira_aula().map(|a| a.id), Some(42));
    }
}
