//! Tests de propriétés (campagne) : invariants du pipeline sur des corpus fixes.
//!
//! - preprocess idempotent
//! - multiplication implicite == multiplication explicite
//! - aller-retour de l’affichage (dans la précision affichée)
//! - bascule de mode : seule la trig bouge, jamais rétroactivement
//! - caractères hors classe : InvalidCharacter, jamais une valeur

use std::time::{Duration, Instant};

use super::{evaluate, format, preprocess, AngleMode, ErrorKind};

const RAD: AngleMode = AngleMode::Radians;
const DEG: AngleMode = AngleMode::Degrees;

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const CORPUS_VALIDE: &[&str] = &[
    "2+2*2",
    "1/3",
    "2/3",
    "sqrt(2)",
    "pi",
    "e",
    "2pi",
    "50%",
    "5!",
    "10!/3",
    "2(3+4)",
    "-7/2",
    "2^0.5",
    "sin(1)",
    "cos(2)+tan(0.3)",
    "ln(10)",
    "log(2)",
    "exp(1.5)",
    "abs(-3.25)",
    "123456.789",
    "0.1+0.2",
    "pow(3,4)",
    "(1+2)(3+4)",
    "factorial(12)",
    "1/7",
    "-(2^10)",
    "floor(2.7)+ceil(2.1)+round(2.5)",
    // hors plage fixe : relu via "m*10^k"
    "10^-7",
    "1/3000000",
    "10^13+0.5",
    "10^20",
    "10^100",
    "2^-30",
    "-(3^40)",
    "factorial(20)",
];

#[test]
fn prop_exemples_de_reference() {
    assert_eq!(preprocess("2pi"), "2*pi");
    assert_eq!(preprocess("50%"), "(50/100)");
    assert_eq!(preprocess("5!"), "factorial(5)");

    assert_eq!(evaluate("2+2*2", RAD), Ok(6.0));
    assert_eq!(
        evaluate("1/0", RAD).unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    assert_eq!(
        evaluate("sqrt(-1)", DEG).unwrap_err().kind(),
        ErrorKind::DomainError
    );

    let s = evaluate("sin(90)", DEG).unwrap();
    assert!((s - 1.0).abs() < 1e-9);
    let s = evaluate("sin(pi/2)", RAD).unwrap();
    assert!((s - 1.0).abs() < 1e-9);
}

#[test]
fn prop_preprocess_idempotent() {
    let autres = [
        "2 pi",
        "3 (4)",
        "  12 % ",
        "7 !",
        "(2+3)!",
        "2×3·4−π",
        "1^2^3",
        "sin(30)cos(60)",
        "x2y",
        "",
    ];
    for e in CORPUS_VALIDE.iter().chain(autres.iter()) {
        let une = preprocess(e);
        let deux = preprocess(&une);
        assert_eq!(une, deux, "entrée={e:?}");
    }
}

#[test]
fn prop_multiplication_implicite_equivalente() {
    let paires = [
        ("2(3+4)", "2*(3+4)"),
        ("2pi", "2*pi"),
        ("(1+2)3", "(1+2)*3"),
        ("(1+2)(3+4)", "(1+2)*(3+4)"),
        ("3sqrt(16)", "3*sqrt(16)"),
        ("(2)e", "(2)*e"),
        ("4!2", "factorial(4)*2"),
        ("10%5", "(10/100)*5"),
    ];
    for mode in [RAD, DEG] {
        for (implicite, explicite) in paires {
            assert_eq!(
                evaluate(implicite, mode),
                evaluate(explicite, mode),
                "{implicite:?} vs {explicite:?}"
            );
        }
    }
}

#[test]
fn prop_aller_retour_affichage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    for mode in [RAD, DEG] {
        for e in CORPUS_VALIDE {
            budget(t0, max);

            let v = evaluate(e, mode).unwrap_or_else(|err| panic!("expr={e:?} err={err}"));
            let affiche = format(v);
            let relu = evaluate(&affiche, mode)
                .unwrap_or_else(|err| panic!("relecture de {affiche:?} (expr={e:?}) err={err}"));

            // stable après un tour
            assert_eq!(format(relu), affiche, "expr={e:?}");

            // égal dans la précision affichée (12 chiffres significatifs)
            let tolerance = 1e-11 * v.abs().max(1.0);
            assert!(
                (relu - v).abs() <= tolerance,
                "expr={e:?} v={v} relu={relu}"
            );
        }
    }
}

#[test]
fn prop_affichage_hors_plage_relisible() {
    for (e, attendu) in [
        ("10^-7", "10^-7"),
        ("1/3000000", "3.33333333333*10^-7"),
        ("10^13+0.5", "10^13"),
        ("10^100", "10^100"),
        ("-(2^50)", "-1.12589990684*10^15"),
    ] {
        let affiche = format(evaluate(e, RAD).unwrap());
        assert_eq!(affiche, attendu, "expr={e:?}");
        assert!(affiche.len() <= 80);
        assert_eq!(format(evaluate(&affiche, RAD).unwrap()), affiche);
    }
}

#[test]
fn prop_entiers_exacts_apres_aller_retour() {
    for e in ["2+2*2", "5!", "pow(3,4)", "-(2^10)", "factorial(12)"] {
        let v = evaluate(e, RAD).unwrap();
        assert_eq!(evaluate(&format(v), RAD), Ok(v), "expr={e:?}");
    }
}

#[test]
fn prop_bascule_non_retroactive() {
    let mut mode = AngleMode::default();
    let avant = evaluate("sin(30)", mode).unwrap();
    let affiche_avant = format(avant);

    mode.toggle();
    let apres = evaluate("sin(30)", mode).unwrap();

    // le résultat déjà produit ne bouge pas
    assert_eq!(format(avant), affiche_avant);
    assert!((apres - 0.5).abs() < 1e-12);
    assert!((avant - 30f64.sin()).abs() < 1e-12);

    // hors trig, le mode est sans effet
    for e in CORPUS_VALIDE {
        let touche_trig = ["sin", "cos", "tan"].iter().any(|t| e.contains(t));
        if !touche_trig {
            assert_eq!(evaluate(e, RAD), evaluate(e, DEG), "expr={e:?}");
        }
    }
}

#[test]
fn prop_caracteres_hors_classe() {
    let interdits = [
        '\'', '"', '[', ']', '{', '}', ';', '=', '<', '>', '&', '|', '#', '@', '$', '`', '\\',
        '~', ':', '?', '_',
    ];
    for c in interdits {
        for gabarit in ["1{c}2", "{c}", "sin({c}1)", "2*pi{c}"] {
            let e = gabarit.replace("{c}", &c.to_string());
            assert_eq!(
                evaluate(&e, RAD).unwrap_err().kind(),
                ErrorKind::InvalidCharacter,
                "expr={e:?}"
            );
        }
    }
}
