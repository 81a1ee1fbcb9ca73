// src/noyau/pretraitement.rs
//
// Prétraitement : texte brut -> syntaxe arithmétique canonique.
// Passes dans CET ordre (les suivantes supposent les précédentes faites) :
//   1) trim
//   2) symboles visuels : × · -> *, − -> -, ÷ -> /, π -> pi
//   3) ^ -> **
//   4) pourcentage : N% -> (N/100)
//   5) factorielle : N! -> factorial(N)   (seulement une suite de chiffres : (2+3)! reste tel quel)
//   6) multiplication implicite : 2( 2x )2 )x )(
//   7) suppression des espaces restants
//
// Les motifs 4–6 tolèrent des espaces entre les deux côtés : sans ça, "2 pi" donnerait
// "2pi" au 1er passage puis "2*pi" au 2e (pas idempotent).

use std::sync::OnceLock;

use regex::Regex;

struct Motifs {
    pourcent: Regex,
    factorielle: Regex,
    chiffre_parenthese: Regex,
    chiffre_lettre: Regex,
    parenthese_chiffre: Regex,
    parenthese_lettre: Regex,
}

static MOTIFS: OnceLock<Motifs> = OnceLock::new();

fn motifs() -> &'static Motifs {
    MOTIFS.get_or_init(|| {
        // Motifs constants : un échec ici est un bug de compilation du motif, pas une entrée.
        let re = |p: &str| Regex::new(p).expect("motif regex valide");
        Motifs {
            pourcent: re(r"([0-9]+(?:\.[0-9]+)?)\s*%"),
            factorielle: re(r"([0-9]+(?:\.[0-9]+)?)\s*!"),
            chiffre_parenthese: re(r"([0-9])\s*\("),
            chiffre_lettre: re(r"([0-9])\s*([A-Za-z])"),
            parenthese_chiffre: re(r"\)\s*([0-9])"),
            parenthese_lettre: re(r"\)\s*([A-Za-z(])"),
        }
    })
}

/// Réécrit une entrée brute en syntaxe canonique (déterministe, idempotent).
pub fn preprocess(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    let s = normaliser_symboles(s);
    let s = s.replace('^', "**");

    let m = motifs();
    let s = m.pourcent.replace_all(&s, "(${1}/100)");
    let s = m.factorielle.replace_all(&s, "factorial(${1})");

    let s = m.chiffre_parenthese.replace_all(&s, "${1}*(");
    let s = m.chiffre_lettre.replace_all(&s, "${1}*${2}");
    let s = m.parenthese_chiffre.replace_all(&s, ")*${1}");
    let s = m.parenthese_lettre.replace_all(&s, ")*${1}");

    let out: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    tracing::trace!(entree = raw, canon = %out, "prétraitement");
    out
}

fn normaliser_symboles(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '×' | '·' => out.push('*'),
            '−' => out.push('-'),
            '÷' => out.push('/'),
            'π' => out.push_str("pi"),
            _ => out.push(c),
        }
    }
    out
}
