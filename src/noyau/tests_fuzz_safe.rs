//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, domaine, limites)
//! - invariant clé : jamais de panic, jamais de valeur non finie

use std::time::{Duration, Instant};

use super::{evaluate, format, preprocess, AngleMode, ErrorKind};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(k: ErrorKind) -> bool {
    // Liste blanche : erreurs *normales* sur des expressions bien formées générées au hasard.
    matches!(
        k,
        ErrorKind::DivisionByZero
            | ErrorKind::DomainError
            | ErrorKind::InputTooLong
            | ErrorKind::NestingTooDeep
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(10))
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        5 => format!("{}%", rng.pick(100)),
        _ => format!("{}!", rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("{a}/{}", gen_expr(rng, depth - 1)),
        5 => format!("({a})^2"),
        6 => format!("sin({a})"),
        7 => format!("cos({a})"),
        8 => format!("sqrt({a})"),
        9 => format!("ln({a})"),
        10 => format!("-{a}"),
        _ => format!("2({a})"),
    }
}

/// Bruit : caractères quelconques (dont interdits) — seul le "pas de panic" compte.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '1', '2', '.', '+', '-', '*', '/', '%', '^', '(', ')', '!', ',', 'p', 'i', 's', 'n', 'e',
        ' ', 'π', '×', ';', '\'', '[', '_',
    ];
    let n = rng.pick(30) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_resultats_finis() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let mode = if rng.coin() {
            AngleMode::Radians
        } else {
            AngleMode::Degrees
        };

        let r1 = evaluate(&expr, mode);
        let r2 = evaluate(&expr, mode);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie: expr={expr:?} v={v}");
                let affiche = format(v);
                let relu = evaluate(&affiche, mode)
                    .unwrap_or_else(|e| panic!("relecture de {affiche:?} (expr={expr:?}) err={e}"));
                assert!(
                    (relu - v).abs() <= 1e-11 * v.abs().max(1.0),
                    "expr={expr:?} v={v} affiche={affiche:?} relu={relu}"
                );
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(e.kind()),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_bruit_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let s = gen_bruit(&mut rng);

        let une = preprocess(&s);
        assert_eq!(preprocess(&une), une, "preprocess non idempotent: {s:?}");

        if let Ok(v) = evaluate(&s, AngleMode::Radians) {
            assert!(v.is_finite(), "valeur non finie: {s:?}");
        }
    }
}

#[test]
fn fuzz_safe_imbrication_adverse() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // longues chaînes : refus propre (longueur ou profondeur), jamais de débordement de pile
    for n in [10usize, 31, 33, 39, 40, 500, 10_000] {
        budget(t0, max);

        let parens = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let moins = format!("{}1", "-".repeat(n));
        let puissances = format!("2{}", "^1".repeat(n));

        for e in [parens, moins, puissances] {
            match evaluate(&e, AngleMode::Radians) {
                Ok(v) => assert!(v.is_finite()),
                Err(err) => assert!(
                    is_erreur_attendue(err.kind()),
                    "n={n} err={err}"
                ),
            }
        }
    }
}
