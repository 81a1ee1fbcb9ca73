//! Noyau — évaluation (pipeline réel)
//!
//! garde longueur -> preprocess -> tokenize (garde caractères) -> AST -> éval(mode)
//!
//! Remarque : l’AST est construit à chaque appel puis jeté ; le seul "état" est le mode,
//! passé en paramètre.

use super::analyse::parse;
use super::ast::{Node, UnaryOp};
use super::erreur::EvaluationError;
use super::limites::Limites;
use super::mode::AngleMode;
use super::pretraitement::preprocess;
use super::table::{Fonction, Symbole};

/// API publique : évalue une expression brute avec les limites par défaut.
pub fn evaluate(expression: &str, mode: AngleMode) -> Result<f64, EvaluationError> {
    evaluate_with(expression, mode, &Limites::default())
}

/// Comme `evaluate`, avec des limites explicites.
pub fn evaluate_with(
    expression: &str,
    mode: AngleMode,
    limites: &Limites,
) -> Result<f64, EvaluationError> {
    let brut = expression.trim();
    if brut.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }

    // Borne AVANT prétraitement (la multiplication implicite allonge le texte).
    let len = brut.chars().count();
    if len > limites.longueur_max {
        return Err(EvaluationError::InputTooLong {
            len,
            max: limites.longueur_max,
        });
    }

    let canon = preprocess(brut);
    let ast = parse(&canon, limites)?;
    tracing::debug!(%canon, %ast, %mode, "expression analysée");

    eval_node(&ast, mode)
}

/// Évaluation récursive (gauche avant droite). Profondeur déjà bornée par l’analyseur.
pub fn eval_node(node: &Node, mode: AngleMode) -> Result<f64, EvaluationError> {
    match node {
        Node::Literal(v) => Ok(*v),

        Node::UnaryOp(op, x) => {
            let v = eval_node(x, mode)?;
            Ok(match op {
                UnaryOp::Plus => v,
                UnaryOp::Minus => -v,
            })
        }

        Node::BinaryOp(op, a, b) => {
            let va = eval_node(a, mode)?;
            let vb = eval_node(b, mode)?;
            op.appliquer(va, vb)
        }

        Node::Identifier(name) => match Symbole::resoudre(name) {
            Some(Symbole::Constante(c)) => Ok(c.valeur()),
            // Une fonction n’est pas une valeur : seule la forme appel est permise.
            Some(Symbole::Fonction(f)) => Err(EvaluationError::UnknownIdentifier(format!(
                "{} (fonction sans appel)",
                f.nom()
            ))),
            None => Err(EvaluationError::UnknownIdentifier(name.clone())),
        },

        Node::Call(name, args) => {
            let f = fonction_appelable(name)?;

            if args.len() != f.arite() {
                return Err(EvaluationError::ArityError {
                    name: f.nom().to_string(),
                    expected: f.arite(),
                    found: args.len(),
                });
            }

            let valeurs = args
                .iter()
                .map(|a| eval_node(a, mode))
                .collect::<Result<Vec<f64>, _>>()?;

            f.appliquer(&valeurs, mode)
        }
    }
}

fn fonction_appelable(name: &str) -> Result<Fonction, EvaluationError> {
    match Symbole::resoudre(name) {
        Some(Symbole::Fonction(f)) => Ok(f),
        Some(Symbole::Constante(_)) => Err(EvaluationError::NotCallable(name.to_string())),
        None => Err(EvaluationError::UnknownIdentifier(name.to_string())),
    }
}
