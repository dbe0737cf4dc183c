//! Track-creation draft
//!
//! Holds the form state of the "Criar Nova Trilha" page and produces the
//! payloads of the three-stage submit (track, then each module, then each
//! lesson). Positions (`ordem`) are never stored: they are the 1-based index
//! at submit time, so removing an entry renumbers everything after it.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AulaDraft {
    pub titulo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuloDraft {
    pub titulo: String,
    pub descricao: String,
    pub aulas: Vec<AulaDraft>,
}

impl Default for ModuloDraft {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descricao: String::new(),
            aulas: vec![AulaDraft::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrilhaDraft {
    pub titulo: String,
    pub descricao: String,
    pub modulos: Vec<ModuloDraft>,
}

impl Default for TrilhaDraft {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descricao: String::new(),
            modulos: vec![ModuloDraft::default()],
        }
    }
}

/// Which field of a draft entry an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Titulo,
    Descricao,
}

/// First validation failure found in a draft (positions are 1-based)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Informe o título da trilha")]
    MissingTrilhaTitulo,
    #[error("Informe o título do módulo {modulo}")]
    MissingModuloTitulo { modulo: usize },
    #[error("Informe o título da aula {aula} do módulo {modulo}")]
    MissingAulaTitulo { modulo: usize, aula: usize },
}

/// Text fields of `POST /trilhas` (sent as multipart form data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovaTrilha {
    pub titulo: String,
    pub descricao: String,
}

/// Body of `POST /trilhas/modulos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovoModulo {
    pub titulo: String,
    pub descricao: String,
    pub ordem: u32,
    pub trilha_id: i64,
}

/// Text fields of `POST /trilhas/aulas` (sent as multipart form data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovaAula {
    pub titulo: String,
    pub descricao: String,
    pub ordem: u32,
    pub modulo_id: i64,
}

impl NovaAula {
    /// Field list in the order the form data is appended
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("titulo", self.titulo.clone()),
            ("descricao", self.descricao.clone()),
            ("ordem", self.ordem.to_string()),
            ("modulo_id", self.modulo_id.to_string()),
        ]
    }
}

impl NovaTrilha {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("titulo", self.titulo.clone()),
            ("descricao", self.descricao.clone()),
        ]
    }
}

fn set_field(titulo: &mut String, descricao: &mut String, field: DraftField, value: String) {
    match field {
        DraftField::Titulo => *titulo = value,
        DraftField::Descricao => *descricao = value,
    }
}

fn ordem(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

impl TrilhaDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trilha_field(&mut self, field: DraftField, value: String) {
        set_field(&mut self.titulo, &mut self.descricao, field, value);
    }

    pub fn set_modulo_field(&mut self, modulo: usize, field: DraftField, value: String) {
        if let Some(m) = self.modulos.get_mut(modulo) {
            set_field(&mut m.titulo, &mut m.descricao, field, value);
        }
    }

    pub fn set_aula_field(&mut self, modulo: usize, aula: usize, field: DraftField, value: String) {
        if let Some(a) = self
            .modulos
            .get_mut(modulo)
            .and_then(|m| m.aulas.get_mut(aula))
        {
            set_field(&mut a.titulo, &mut a.descricao, field, value);
        }
    }

    pub fn add_modulo(&mut self) {
        self.modulos.push(ModuloDraft::default());
    }

    /// Removes a module; the last remaining module is kept
    pub fn remove_modulo(&mut self, modulo: usize) -> bool {
        if self.modulos.len() <= 1 || modulo >= self.modulos.len() {
            return false;
        }
        self.modulos.remove(modulo);
        true
    }

    pub fn add_aula(&mut self, modulo: usize) {
        if let Some(m) = self.modulos.get_mut(modulo) {
            m.aulas.push(AulaDraft::default());
        }
    }

    /// Removes a lesson; a module's last lesson is kept
    pub fn remove_aula(&mut self, modulo: usize, aula: usize) -> bool {
        match self.modulos.get_mut(modulo) {
            Some(m) if m.aulas.len() > 1 && aula < m.aulas.len() => {
                m.aulas.remove(aula);
                true
            }
            _ => false,
        }
    }

    pub fn can_remove_modulo(&self) -> bool {
        self.modulos.len() > 1
    }

    pub fn can_remove_aula(&self, modulo: usize) -> bool {
        self.modulos
            .get(modulo)
            .is_some_and(|m| m.aulas.len() > 1)
    }

    pub fn total_aulas(&self) -> usize {
        self.modulos.iter().map(|m| m.aulas.len()).sum()
    }

    /// Required titles, checked in display order
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.titulo.trim().is_empty() {
            return Err(DraftError::MissingTrilhaTitulo);
        }

        for (mi, modulo) in self.modulos.iter().enumerate() {
            if modulo.titulo.trim().is_empty() {
                return Err(DraftError::MissingModuloTitulo { modulo: mi + 1 });
            }
            for (ai, aula) in modulo.aulas.iter().enumerate() {
                if aula.titulo.trim().is_empty() {
                    return Err(DraftError::MissingAulaTitulo {
                        modulo: mi + 1,
                        aula: ai + 1,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn trilha_request(&self) -> NovaTrilha {
        NovaTrilha {
            titulo: self.titulo.trim().to_string(),
            descricao: self.descricao.trim().to_string(),
        }
    }

    pub fn modulo_request(&self, modulo: usize, trilha_id: i64) -> Option<NovoModulo> {
        self.modulos.get(modulo).map(|m| NovoModulo {
            titulo: m.titulo.trim().to_string(),
            descricao: m.descricao.trim().to_string(),
            ordem: ordem(modulo),
            trilha_id,
        })
    }

    pub fn aula_request(&self, modulo: usize, aula: usize, modulo_id: i64) -> Option<NovaAula> {
        self.modulos
            .get(modulo)
            .and_then(|m| m.aulas.get(aula))
            .map(|a| NovaAula {
                titulo: a.titulo.trim().to_string(),
                descricao: a.descricao.trim().to_string(),
                ordem: ordem(aula),
                modulo_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> TrilhaDraft {
        let mut draft = TrilhaDraft::new();
        draft.set_trilha_field(DraftField::Titulo, "Direito Agrário".to_string());
        draft.set_modulo_field(0, DraftField::Titulo, "Fundamentos".to_string());
        draft.set_aula_field(0, 0, DraftField::Titulo, "Introdução".to_string());
        draft
    }

    #[test]
    fn test_new_draft_has_one_module_with_one_lesson() {
        let draft = TrilhaDraft::new();
        assert_eq!(draft.modulos.len(), 1);
        assert_eq!(draft.modulos[0].aulas.len(), 1);
        assert_eq!(draft.total_aulas(), 1);
    }

    #[test]
    fn test_cannot_remove_last_module_or_lesson() {
        let mut draft = TrilhaDraft::new();
        assert!(!draft.can_remove_modulo());
        assert!(!draft.remove_modulo(0));
        assert!(!draft.can_remove_aula(0));
        assert!(!draft.remove_aula(0, 0));
        assert_eq!(draft.modulos.len(), 1);
    }

    #[test]
    fn test_add_and_remove_modules_renumbers() {
        let mut draft = filled();
        draft.add_modulo();
        draft.add_modulo();
        draft.set_modulo_field(1, DraftField::Titulo, "Segundo".to_string());
        draft.set_modulo_field(2, DraftField::Titulo, "Terceiro".to_string());

        assert!(draft.remove_modulo(1));
        assert_eq!(draft.modulos.len(), 2);

        let req = draft.modulo_request(1, 99).unwrap();
        assert_eq!(req.titulo, "Terceiro");
        assert_eq!(req.ordem, 2);
        assert_eq!(req.trilha_id, 99);
    }

    #[test]
    fn test_add_and_remove_lessons() {
        let mut draft = filled();
        draft.add_aula(0);
        draft.add_aula(0);
        draft.set_aula_field(0, 2, DraftField::Titulo, "Terceira".to_string());
        assert_eq!(draft.modulos[0].aulas.len(), 3);

        assert!(draft.remove_aula(0, 1));
        let req = draft.aula_request(0, 1, 5).unwrap();
        assert_eq!(req.titulo, "Terceira");
        assert_eq!(req.ordem, 2);
        assert_eq!(req.modulo_id, 5);
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut draft = filled();
        draft.set_modulo_field(5, DraftField::Titulo, "x".to_string());
        draft.set_aula_field(0, 5, DraftField::Titulo, "x".to_string());
        draft.add_aula(5);
        assert!(!draft.remove_modulo(5));
        assert!(!draft.remove_aula(5, 0));
        assert_eq!(draft, filled());
        assert!(draft.modulo_request(3, 1).is_none());
        assert!(draft.aula_request(0, 3, 1).is_none());
    }

    #[test]
    fn test_validate_reports_first_missing_title() {
        let mut draft = TrilhaDraft::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingTrilhaTitulo));

        draft.set_trilha_field(DraftField::Titulo, "  T  ".to_string());
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingModuloTitulo { modulo: 1 })
        );

        draft.set_modulo_field(0, DraftField::Titulo, "M".to_string());
        draft.add_aula(0);
        draft.set_aula_field(0, 0, DraftField::Titulo, "A".to_string());
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingAulaTitulo { modulo: 1, aula: 2 })
        );

        draft.set_aula_field(0, 1, DraftField::Titulo, "B".to_string());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(
            DraftError::MissingAulaTitulo { modulo: 2, aula: 3 }.to_string(),
            "Informe o título da aula 3 do módulo 2"
        );
    }

    #[test]
    fn test_requests_trim_text() {
        let mut draft = filled();
        draft.set_trilha_field(DraftField::Descricao, "  Curso completo  ".to_string());
        let trilha = draft.trilha_request();
        assert_eq!(trilha.descricao, "Curso completo");
        assert_eq!(
            trilha.form_fields(),
            vec![
                ("titulo", "Direito Agrário".to_string()),
                ("descricao", "Curso completo".to_string()),
            ]
        );
    }

    #[test]
    fn test_modulo_request_json_shape() {
        let draft = filled();
        let body = serde_json::to_value(draft.modulo_request(0, 12).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "titulo": "Fundamentos",
                "descricao": "",
                "ordem": 1,
                "trilha_id": 12
            })
        );
    }

    #[test]
    fn test_aula_form_fields() {
        let draft = filled();
        let fields = draft.aula_request(0, 0, 31).unwrap().form_fields();
        assert_eq!(
            fields,
            vec![
                ("titulo", "Introdução".to_string()),
                ("descricao", String::new()),
                ("ordem", "1".to_string()),
                ("modulo_id", "31".to_string()),
            ]
        );
    }
}
