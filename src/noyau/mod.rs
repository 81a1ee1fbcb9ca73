//! Noyau de calcul (liste blanche)
//!
//! Organisation interne :
//! - pretraitement.rs : texte brut -> syntaxe canonique (symboles, %, !, multiplication implicite)
//! - jetons.rs        : garde de caractères + tokenisation
//! - analyse.rs       : descente récursive -> AST
//! - ast.rs           : noeuds (fermés)
//! - table.rs         : opérateurs + constantes/fonctions autorisées
//! - eval.rs          : pipeline complet + évaluation récursive
//! - affichage.rs     : valeur -> texte
//! - mode.rs          : RAD / DEG
//! - erreur.rs        : erreurs classées
//! - limites.rs       : bornes longueur / profondeur

pub mod affichage;
pub mod analyse;
pub mod ast;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod limites;
pub mod mode;
pub mod pretraitement;
pub mod table;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use affichage::format;
pub use erreur::{ErrorKind, EvaluationError};
pub use eval::evaluate;
pub use mode::AngleMode;
pub use pretraitement::preprocess;
