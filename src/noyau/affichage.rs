// src/noyau/affichage.rs
//
// Affichage d’un résultat (cosmétique : la valeur interne n’est jamais modifiée).
// - |v - entier le plus proche| < 1e-12 et |v| < 10^12  => entier brut ("6", pas "6.0")
// - sinon forme générale à 12 chiffres significatifs, zéros finaux retirés
//
// Le texte produit est toujours une expression relisible par `evaluate` :
// hors plage, la notation scientifique s’écrit "m*10^k" (la grammaire n’a pas
// de littéral à exposant), jamais "me+k".

/// Tolérance "c’est un entier".
const TOLERANCE_ENTIER: f64 = 1e-12;

/// Chiffres significatifs de la forme générale.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Exposant décimal à partir duquel on passe en scientifique (même seuil pour les entiers).
const EXPOSANT_MAX_FIXE: i32 = CHIFFRES_SIGNIFICATIFS as i32;

/// Sous cet exposant décimal : scientifique.
const EXPOSANT_MIN_FIXE: i32 = -4;

pub fn format(value: f64) -> String {
    if !value.is_finite() {
        // Le noyau ne produit jamais ça ; affichage défensif.
        return format!("{value}");
    }

    let entier = value.round();
    if (value - entier).abs() < TOLERANCE_ENTIER && entier.abs() < 1e12 {
        // -0 => "0"
        if entier == 0.0 {
            return "0".to_string();
        }
        return format!("{entier:.0}");
    }

    format_general(value)
}

/// Équivalent de "%.12g" : notation fixe si l’exposant décimal est dans [-4, 12),
/// "m*10^k" sinon ; zéros non significatifs retirés dans les deux cas.
fn format_general(value: f64) -> String {
    let p = CHIFFRES_SIGNIFICATIFS;

    // L’exposant se lit APRÈS arrondi à p chiffres (9.9999999999999 -> 1e1).
    let sci = format!("{:.*e}", p - 1, value);
    let (mantisse, exp_txt) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = exp_txt.parse().unwrap_or(0);

    if !(EXPOSANT_MIN_FIXE..EXPOSANT_MAX_FIXE).contains(&exp) {
        return scientifique(retirer_zeros(mantisse), exp);
    }

    let decimales = (p as i32 - 1 - exp).max(0) as usize;
    retirer_zeros(&format!("{value:.decimales$}")).to_string()
}

/// "1.5*10^-7", "-10^20" (mantisse 1 omise).
fn scientifique(mantisse: &str, exp: i32) -> String {
    match mantisse {
        "1" => format!("10^{exp}"),
        "-1" => format!("-10^{exp}"),
        m => format!("{m}*10^{exp}"),
    }
}

fn retirer_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
