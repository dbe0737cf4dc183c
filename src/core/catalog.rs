//! Catalog helpers shared by the dashboard and the track list

use super::models::Trilha;

/// Tracks shown on the dashboard before "Ver todas as trilhas"
pub const DASHBOARD_FEATURED: usize = 6;

/// Case-insensitive substring search over title and description
pub fn filter_trilhas(trilhas: &[Trilha], term: &str) -> Vec<Trilha> {
    let query = term.trim().to_lowercase();
    if query.is_empty() {
        return trilhas.to_vec();
    }

    trilhas
        .iter()
        .filter(|t| {
            t.titulo.to_lowercase().contains(&query) || t.descricao.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// First `n` tracks in API order
pub fn featured(trilhas: &[Trilha], n: usize) -> Vec<Trilha> {
    trilhas.iter().take(n).cloned().collect()
}

/// Aggregates for the dashboard stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub trilhas: usize,
    pub aulas: u32,
    /// Sum of `duracao_total`, in minutes
    pub minutos: u32,
}

impl CatalogStats {
    pub fn from_trilhas(trilhas: &[Trilha]) -> Self {
        trilhas.iter().fold(
            CatalogStats {
                trilhas: trilhas.len(),
                ..Default::default()
            },
            |mut acc, t| {
                acc.aulas = acc.aulas.saturating_add(t.total_aulas);
                acc.minutos = acc.minutos.saturating_add(t.duracao_total);
                acc
            },
        )
    }
}

/// Which empty-state card the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search is active and matched nothing
    NoResults,
    /// The catalog itself is empty
    NoTrilhas,
}

impl EmptyState {
    pub fn for_search(term: &str) -> Self {
        if term.trim().is_empty() {
            EmptyState::NoTrilhas
        } else {
            EmptyState::NoResults
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoResults => "Nenhuma trilha encontrada",
            EmptyState::NoTrilhas => "Nenhuma trilha disponível",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmptyState::NoResults => "Tente buscar com outros termos.",
            EmptyState::NoTrilhas => "As trilhas de formação estarão disponíveis em breve.",
        }
    }
}
