//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, mode, historique)
//! et offrir des opérations simples (C/AC/DEG-RAD/=) sans logique d’affichage.
//!
//! Contrats :
//! - Le calcul lui-même vit dans le noyau : ici on appelle seulement evaluate + format.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : historique borné.

use std::collections::VecDeque;

use crate::noyau::{self, AngleMode, ErrorKind, EvaluationError};

/// Garde-fou : taille max de l’historique (le plus récent en tête).
pub const HISTORIQUE_MAX: usize = 20;

/// Message unique affiché pour toute erreur (la classe reste dans `classe` et `detail`).
pub const MESSAGE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub mode: AngleMode,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté
    pub erreur: String,   // message court ("Erreur") si l’évaluation échoue
    pub detail: String,   // message classé (infobulle)
    pub classe: Option<ErrorKind>,

    // --- paramètres ---
    pub mode: AngleMode,

    // --- historique ---
    pub historique: VecDeque<EntreeHistorique>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

impl AppCalc {
    pub fn new(mode: AngleMode) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            detail: String::new(),
            classe: None,
            mode,
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + historique ; le mode est conservé).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.clear_erreur();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_erreur(&mut self) {
        self.erreur.clear();
        self.detail.clear();
        self.classe = None;
    }

    /// DEG/RAD : ne touche pas aux résultats déjà affichés.
    pub fn basculer_mode(&mut self) {
        self.mode.toggle();
        tracing::info!(mode = %self.mode, "mode d’angle");
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran”.
    pub fn set_erreur(&mut self, e: &EvaluationError) {
        self.erreur = MESSAGE_ERREUR.to_string();
        self.detail = e.to_string();
        self.classe = Some(e.kind());
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat et l’inscrire dans l’historique.
    pub fn set_resultat(&mut self, expression: &str, resultat: String) {
        self.clear_erreur();

        self.historique.push_front(EntreeHistorique {
            expression: expression.to_string(),
            resultat: resultat.clone(),
            mode: self.mode,
        });
        self.historique.truncate(HISTORIQUE_MAX);

        self.resultat = resultat;
        self.focus_entree = true;
    }

    /// "=" : évalue l’entrée via le noyau, puis dépose résultat ou erreur.
    pub fn evaluer(&mut self) {
        let expr = self.entree.trim().to_string();

        match noyau::evaluate(&expr, self.mode) {
            Ok(v) => {
                let txt = noyau::format(v);
                self.set_resultat(&expr, txt);
            }
            Err(e) => {
                tracing::debug!(expression = %expr, kind = ?e.kind(), "évaluation refusée");
                self.set_erreur(&e);
            }
        }
    }

    /// Forme canonique de l’entrée ("2pi" -> "2*pi"), affichée sous le champ.
    pub fn apercu(&self) -> String {
        noyau::preprocess(&self.entree)
    }

    /// Recopie l’expression d’une ligne d’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            self.entree = h.expression.clone();
            self.focus_entree = true;
        }
    }
}
