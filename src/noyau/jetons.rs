// src/noyau/jetons.rs

use super::erreur::EvaluationError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Constantes + fonctions : le tokenizer ne décide rien, l’évaluateur consulte la table.
    Ident(String),

    Plus,
    Minus,
    Star,
    StarStar, // ** (ou ^ résiduel)
    Slash,
    Percent,

    LPar,
    RPar,
    Comma,
}

/// Garde de classe de caractères, AVANT toute analyse.
/// Autorisés : chiffres, lettres ASCII, . + - * / % ^ ( ) ! ,
pub fn verifier_caracteres(s: &str) -> Result<(), EvaluationError> {
    match s.chars().find(|c| !caractere_autorise(*c)) {
        Some(c) => Err(EvaluationError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' | '!' | ','
        )
}

/// Tokenize une chaîne canonique (sortie de preprocess) en jetons.
/// Supporte:
/// - nombres décimaux: 12, 1.5, 5., .5
/// - opérateurs + - * ** / %  (^ lu comme **)
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z][a-zA-Z0-9]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    verifier_caracteres(s)?;

    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Comma);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::StarStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '^' => {
                out.push(Tok::StarStar);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre : chiffres avec au plus un point décimal
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            if txt == "." {
                return Err(EvaluationError::syntaxe("point isolé"));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| EvaluationError::syntaxe(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        // '!' passe la garde mais n’appartient pas à la grammaire
        return Err(EvaluationError::syntaxe(format!("symbole inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
