// src/noyau/table.rs
//
// Tables blanches (fermées, sans enregistrement à l’exécution) :
// - opérateurs : sémantique de chaque BinaryOp (+ précondition diviseur non nul)
// - noms       : constantes (pi, e) et fonctions {arité, implémentation, sensible à l’angle}
//
// Toute valeur produite ici est finie : dépassement / NaN => DomainError.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::ast::BinaryOp;
use super::erreur::EvaluationError;
use super::mode::AngleMode;

/// Plus grand n tel que n! reste représentable en f64.
const FACTORIELLE_MAX: u64 = 170;

/* ------------------------ Opérateurs ------------------------ */

impl BinaryOp {
    pub fn symbole(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
            BinaryOp::Mod => "%",
        }
    }

    /// Div et Mod exigent un opérande droit non nul.
    pub fn exige_diviseur_non_nul(self) -> bool {
        matches!(self, BinaryOp::Div | BinaryOp::Mod)
    }

    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        if self.exige_diviseur_non_nul() && b == 0.0 {
            return Err(EvaluationError::DivisionByZero);
        }

        let v = match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Mod => modulo_plancher(a, b),
            BinaryOp::Pow => puissance(a, b)?,
        };
        fini(v, self.symbole())
    }
}

/// Modulo "plancher" : le reste a le signe du diviseur (-7 % 3 = 2).
fn modulo_plancher(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn puissance(base: f64, exp: f64) -> Result<f64, EvaluationError> {
    if base == 0.0 && exp < 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(EvaluationError::domaine(
            "base négative avec exposant non entier",
        ));
    }
    Ok(base.powf(exp))
}

fn fini(v: f64, contexte: &str) -> Result<f64, EvaluationError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvaluationError::domaine(format!(
            "{contexte} : résultat non représentable"
        )))
    }
}

/* ------------------------ Noms ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Factorial,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Constante(Constante),
    Fonction(Fonction),
}

impl Symbole {
    /// Résout un identifiant (déjà en minuscules) dans la table. None = inconnu.
    pub fn resoudre(name: &str) -> Option<Symbole> {
        use Fonction::*;

        let f = match name {
            "pi" => return Some(Symbole::Constante(Constante::Pi)),
            "e" => return Some(Symbole::Constante(Constante::E)),

            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "asin" => Asin,
            "acos" => Acos,
            "atan" => Atan,
            "sqrt" => Sqrt,
            "ln" => Ln,
            "log" => Log,
            "exp" => Exp,
            "abs" => Abs,
            "floor" => Floor,
            "ceil" => Ceil,
            "round" => Round,
            "factorial" => Factorial,
            "pow" => Pow,
            _ => return None,
        };
        Some(Symbole::Fonction(f))
    }
}

/// Sens de la dépendance au mode d’angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensAngle {
    /// sin/cos/tan : l’argument est un angle.
    Direct,
    /// asin/acos/atan : le résultat est un angle.
    Inverse,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        use Fonction::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Sqrt => "sqrt",
            Ln => "ln",
            Log => "log",
            Exp => "exp",
            Abs => "abs",
            Floor => "floor",
            Ceil => "ceil",
            Round => "round",
            Factorial => "factorial",
            Pow => "pow",
        }
    }

    pub fn arite(self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }

    pub fn sensible_angle(self) -> Option<SensAngle> {
        use Fonction::*;
        match self {
            Sin | Cos | Tan => Some(SensAngle::Direct),
            Asin | Acos | Atan => Some(SensAngle::Inverse),
            _ => None,
        }
    }

    /// Applique la fonction à des arguments déjà évalués (arité vérifiée par l’appelant,
    /// revérifiée ici par motif pour rester sans panic).
    pub fn appliquer(self, args: &[f64], mode: AngleMode) -> Result<f64, EvaluationError> {
        use Fonction::*;

        let sens = self.sensible_angle();

        // Direct : l’argument saisi est un angle dans le mode courant.
        let angle = |x: f64| match sens {
            Some(SensAngle::Direct) => mode.vers_radians(x),
            _ => x,
        };

        let v = match (self, args) {
            (Pow, [a, b]) => BinaryOp::Pow.appliquer(*a, *b)?,

            (Sin, [x]) => angle(*x).sin(),
            (Cos, [x]) => angle(*x).cos(),
            (Tan, [x]) => {
                // En degrés l’argument est exact : 90 + k·180 est un pôle.
                if mode == AngleMode::Degrees && x.rem_euclid(180.0) == 90.0 {
                    return Err(EvaluationError::domaine("tan non définie (pôle)"));
                }
                angle(*x).tan()
            }

            (Asin, [x]) => dans_unite(*x, "asin")?.asin(),
            (Acos, [x]) => dans_unite(*x, "acos")?.acos(),
            (Atan, [x]) => x.atan(),

            (Sqrt, [x]) => {
                if *x < 0.0 {
                    return Err(EvaluationError::domaine("sqrt d’un nombre négatif"));
                }
                x.sqrt()
            }
            (Ln, [x]) => strictement_positif(*x, "ln")?.ln(),
            (Log, [x]) => strictement_positif(*x, "log")?.log10(),
            (Exp, [x]) => x.exp(),
            (Abs, [x]) => x.abs(),
            (Floor, [x]) => x.floor(),
            (Ceil, [x]) => x.ceil(),
            (Round, [x]) => x.round(),
            (Factorial, [x]) => factorielle(*x)?,

            _ => {
                return Err(EvaluationError::ArityError {
                    name: self.nom().to_string(),
                    expected: self.arite(),
                    found: args.len(),
                })
            }
        };

        // Inverse : le résultat (radians) est rendu dans le mode courant.
        let v = match sens {
            Some(SensAngle::Inverse) => mode.depuis_radians(v),
            _ => v,
        };

        fini(v, self.nom())
    }
}

fn dans_unite(x: f64, nom: &str) -> Result<f64, EvaluationError> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(EvaluationError::domaine(format!("{nom} hors de [-1, 1]")))
    }
}

fn strictement_positif(x: f64, nom: &str) -> Result<f64, EvaluationError> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvaluationError::domaine(format!("{nom} d’un nombre ≤ 0")))
    }
}

/// n! exact (BigUint) puis une seule conversion vers f64.
fn factorielle(x: f64) -> Result<f64, EvaluationError> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(EvaluationError::domaine(
            "factorial exige un entier positif ou nul",
        ));
    }
    if x > FACTORIELLE_MAX as f64 {
        return Err(EvaluationError::domaine(format!(
            "factorial limitée à {FACTORIELLE_MAX}"
        )));
    }

    let n = x as u64;
    let produit = (2..=n).fold(BigUint::one(), |acc, k| acc * k);
    produit
        .to_f64()
        .ok_or_else(|| EvaluationError::domaine("factorial : conversion impossible"))
}
