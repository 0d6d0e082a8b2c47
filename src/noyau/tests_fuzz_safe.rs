//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'analyseur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé no 1 : une entrée VALIDE générée fait l'aller-retour
//!   (postfixe et préfixe) et s'évalue de façon déterministe
//! - invariant clé no 2 : une entrée QUELCONQUE ne panique jamais ;
//!   l'analyse rend Ok ou une ErreurAnalyse, et deux appels identiques
//!   rendent le même résultat

use std::time::{Duration, Instant};

use super::jetons::decouper;
use super::{parse, parse_prefixe};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => "x".to_string(),
        1 => "y".to_string(),
        2 => "z".to_string(),
        3 => "0".to_string(),
        4 => "1".to_string(),
        5 => "-3".to_string(),
        _ => "17".to_string(),
    }
}

/// Postfixe VALIDE par construction, un seul espace entre jetons.
fn gen_postfixe(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 | 1 => gen_atome(rng),
        2 => format!("{} negate", gen_postfixe(rng, profondeur - 1)),
        3 => format!("{} atan", gen_postfixe(rng, profondeur - 1)),
        4 => format!("{} sinh", gen_postfixe(rng, profondeur - 1)),
        5 => format!("{} cosh", gen_postfixe(rng, profondeur - 1)),
        6 => format!(
            "{} {} +",
            gen_postfixe(rng, profondeur - 1),
            gen_postfixe(rng, profondeur - 1)
        ),
        7 => format!(
            "{} {} -",
            gen_postfixe(rng, profondeur - 1),
            gen_postfixe(rng, profondeur - 1)
        ),
        8 => format!(
            "{} {} /",
            gen_postfixe(rng, profondeur - 1),
            gen_postfixe(rng, profondeur - 1)
        ),
        _ => format!(
            "{} {} atan2",
            gen_postfixe(rng, profondeur - 1),
            gen_postfixe(rng, profondeur - 1)
        ),
    }
}

/// Soupe de jetons légaux en ordre quelconque (souvent invalide, c'est le but).
fn gen_soupe(rng: &mut Rng) -> String {
    const POOL: [&str; 16] = [
        "x", "y", "z", "1", "-3", "+", "-", "*", "/", "negate", "atan", "atan2", "sinh", "cosh",
        "(", ")",
    ];

    let n = 1 + rng.pick(11) as usize;
    let mut morceaux = Vec::with_capacity(n);
    for _ in 0..n {
        morceaux.push(POOL[rng.pick(POOL.len() as u32) as usize]);
    }
    morceaux.join(" ")
}

/// Caractères quelconques, y compris de quoi fabriquer des jetons inconnus.
fn gen_chaine(rng: &mut Rng) -> String {
    const POOL: &[char] = &[
        'x', 'y', 'z', 'w', '0', '1', '7', '+', '-', '*', '/', '(', ')', ' ', '\t', 'a', 't', 'n',
        '2', '.',
    ];

    let n = rng.pick(24) as usize;
    let mut s = String::with_capacity(n);
    for _ in 0..n {
        s.push(POOL[rng.pick(POOL.len() as u32) as usize]);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_aller_retour_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let s = gen_postfixe(&mut rng, 4);
        let t = parse(&s).unwrap_or_else(|e| panic!("expr valide refusée: {s:?} err={e}"));

        // aller-retour postfixe (l'entrée générée est déjà normalisée)
        assert_eq!(t.to_string(), s, "expr={s:?}");

        // équivalence préfixe/postfixe
        let retour = parse_prefixe(&t.prefixe())
            .unwrap_or_else(|e| panic!("préfixe refusé: {:?} err={e}", t.prefixe()));
        assert_eq!(retour, t, "expr={s:?}");

        // évaluation déterministe, bit à bit (inf et NaN compris)
        let v1 = t.evaluer(0.5, -2.0, 3.25);
        let v2 = t.evaluer(0.5, -2.0, 3.25);
        assert_eq!(v1.to_bits(), v2.to_bits(), "expr={s:?}");
    }
}

#[test]
fn fuzz_safe_soupe_de_jetons() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let s = gen_soupe(&mut rng);

        match parse(&s) {
            Ok(t) => {
                // une réussite doit se re-analyser vers le MÊME arbre
                let bis = parse(&t.to_string())
                    .unwrap_or_else(|e| panic!("re-analyse refusée: {t} err={e}"));
                assert_eq!(bis, t, "expr={s:?}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }

        // le chemin préfixe ne doit pas paniquer non plus
        let _ = parse_prefixe(&s);
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
    assert!(seen_ok > 0, "aucun succès vu: pool trop hostile ({seen_err} erreurs)");
}

#[test]
fn fuzz_safe_chaines_arbitraires_deterministes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..400 {
        budget(t0, max);

        let s = gen_chaine(&mut rng);

        // jamais de panique, et deux appels identiques => même résultat
        assert_eq!(parse(&s), parse(&s), "entrée {s:?}");
        assert_eq!(parse_prefixe(&s), parse_prefixe(&s), "entrée {s:?}");

        // le découpage est une partition exacte de l'entrée
        assert_eq!(decouper(&s).concat(), s, "entrée {s:?}");
    }
}
