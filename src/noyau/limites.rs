// src/noyau/limites.rs
//
// Garde-fous (anti-abus / anti-gel) appliqués avant et pendant l’analyse.

/// Longueur max de l’entrée brute (caractères, après trim).
pub const LONGUEUR_MAX: usize = 80;

/// Profondeur max d’imbrication dans l’analyseur.
pub const PROFONDEUR_MAX: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub longueur_max: usize,
    pub profondeur_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX,
            profondeur_max: PROFONDEUR_MAX,
        }
    }
}
