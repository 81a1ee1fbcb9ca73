// src/noyau/erreur.rs
//
// Erreurs classées du noyau.
// - Toujours retournées (jamais de panic), une seule erreur par évaluation.
// - L’UI peut tout replier en "Erreur", mais la classe reste disponible (kind()).

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum EvaluationError {
    #[error("Entrée vide")]
    EmptyInput,

    #[error("expression trop longue ({len} caractères, max {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("caractère interdit: '{0}'")]
    InvalidCharacter(char),

    #[error("erreur de syntaxe: {0}")]
    SyntaxError(String),

    #[error("imbrication trop profonde (max {max})")]
    NestingTooDeep { max: usize },

    #[error("identifiant inconnu: {0}")]
    UnknownIdentifier(String),

    #[error("{0} n’est pas une fonction")]
    NotCallable(String),

    #[error("{name} attend {expected} argument(s), reçu {found}")]
    ArityError {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("hors domaine: {0}")]
    DomainError(String),
}

/// Classe d’erreur sans contexte (pour tests / appelants qui ne veulent que la catégorie).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InputTooLong,
    InvalidCharacter,
    SyntaxError,
    NestingTooDeep,
    UnknownIdentifier,
    NotCallable,
    ArityError,
    DivisionByZero,
    DomainError,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InputTooLong { .. } => ErrorKind::InputTooLong,
            Self::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            Self::SyntaxError(_) => ErrorKind::SyntaxError,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::UnknownIdentifier(_) => ErrorKind::UnknownIdentifier,
            Self::NotCallable(_) => ErrorKind::NotCallable,
            Self::ArityError { .. } => ErrorKind::ArityError,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::DomainError(_) => ErrorKind::DomainError,
        }
    }

    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        Self::SyntaxError(msg.into())
    }

    pub(crate) fn domaine(msg: impl Into<String>) -> Self {
        Self::DomainError(msg.into())
    }
}
