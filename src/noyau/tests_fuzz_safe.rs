//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs attendues (caractère interdit, parenthèses,
//!   opérande manquante, entrée vide) ; tout AUTRE message est un échec
//! - invariant clé : le pipeline ne panique JAMAIS, quelle que soit l’entrée

use std::time::{Duration, Instant};

use super::cadre::evaluer_cadre;
use super::eval::{eval_expression, Environnement};
use super::repere::{Point, Repere};

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

fn is_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : les familles d’erreurs *normales* du pipeline.
    // (un nom inconnu n’est PAS une erreur : il vaut NaN)
    msg.contains("caractère inattendu")
        || msg.contains("nombre invalide")
        || msg.contains("parenthèse")
        || msg.contains("expression invalide")
        || msg.contains("Entrée vide")
}

fn repere_fuzz() -> Repere {
    Repere::nouveau(Point::new(0.0, 0.0), Point::new(0.01, 0.01), 640.0, 480.0)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "7".to_string(),
        4 => "1.5".to_string(),
        _ => ".5".to_string(),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 => gen_nombre(rng),
        2 => "x".to_string(),
        3 => "a".to_string(),
        // nom inconnu exprès : doit donner NaN, jamais une erreur
        4 => "q".to_string(),
        _ => format!("({})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}^{})", gen_nombre(rng), gen_nombre(rng)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => {
            // multiplication implicite exprès : nombre collé à une valeur
            format!("{}({})", gen_nombre(rng), gen_expr(rng, depth - 1))
        }
    }
}

/// Soupe de caractères tirée de l’alphabet du langage, PLUS quelques
/// intrus ('$', '#', '!') et du blanc. Longueur bornée.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789..++--**//^^(()) xyaq$#!";
    let n = rng.pick(24) as usize;
    let mut s = String::with_capacity(n);
    for _ in 0..n {
        let i = rng.pick(ALPHABET.len() as u32) as usize;
        s.push(ALPHABET[i] as char);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut env = Environnement::new();
    env.insert("x".to_string(), 1.5);
    env.insert("a".to_string(), 2.0);

    let mut seen_fini = 0usize;
    let mut seen_nan = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        // grammaire fermée => le parse réussit TOUJOURS ici
        let v = eval_expression(&expr, &env)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        if v.is_nan() {
            seen_nan += 1; // "q" quelque part : poison normal
        } else {
            seen_fini += 1;
        }
    }

    // On veut voir les deux régimes, sinon le générateur ne balaye rien.
    assert!(seen_fini > 20, "trop peu de valeurs finies: {seen_fini}");
    assert!(seen_nan > 5, "aucun poison NaN vu: {seen_nan}");
}

#[test]
fn fuzz_safe_soupe_jamais_paniquer() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        match eval_expression(&expr, &Environnement::new()) {
            Ok(_) => seen_ok += 1, // NaN/inf compris : une valeur est une valeur
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur hors familles attendues: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // Mix attendu : la soupe produit surtout des erreurs, mais pas que
    // (un chiffre isolé, "2x", " 1 2 " une fois le blanc retiré...).
    assert!(seen_err > 100, "trop peu d’erreurs vues: {seen_err}");
    assert!(seen_ok > 0, "aucune soupe évaluable: {seen_ok}");
}

#[test]
fn fuzz_safe_feuille_jamais_paniquer() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xFACADE_u64);
    let r = repere_fuzz();

    for _ in 0..60 {
        budget(t0, max);

        // feuille de 1..6 cellules : formées, cassées, ou soupe
        let nb = 1 + rng.pick(5) as usize;
        let mut textes: Vec<String> = Vec::with_capacity(nb);
        for _ in 0..nb {
            let cellule = match rng.pick(6) {
                0 => format!("let a = {}", gen_expr(&mut rng, 3)),
                1 => format!("let q = {}", gen_soupe(&mut rng)),
                // la fermante de plot(...) est optionnelle : on fuzz les deux formes
                2 if rng.coin() => {
                    format!("plot({}, {})", gen_expr(&mut rng, 2), gen_expr(&mut rng, 2))
                }
                2 => format!("plot({}, {}", gen_expr(&mut rng, 2), gen_expr(&mut rng, 2)),
                3 => format!("graph({})", gen_expr(&mut rng, 3)),
                4 => format!("graph({})", gen_soupe(&mut rng)),
                _ => gen_soupe(&mut rng),
            };
            textes.push(cellule);
        }
        let refs: Vec<&str> = textes.iter().map(|s| s.as_str()).collect();

        let sortie = evaluer_cadre(&refs, &r, 16);

        // contrat de forme : un statut par cellule, messages dans les familles
        assert_eq!(sortie.statuts.len(), refs.len());
        for (i, statut) in sortie.statuts.iter().enumerate() {
            if let Some(e) = statut {
                assert!(
                    is_erreur_attendue(e),
                    "cellule={:?} err={e}",
                    refs[i]
                );
            }
        }
        for courbe in &sortie.courbes {
            assert_eq!(courbe.points.len(), 16);
        }
    }
}

#[test]
fn fuzz_safe_imbrication_et_somme_plate_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // imbrication profonde : itératif partout, pas de débordement
    let mut expr = String::new();
    for _ in 0..600 {
        expr.push('(');
    }
    expr.push('1');
    for _ in 0..600 {
        expr.push(')');
    }
    let v = eval_expression(&expr, &Environnement::new()).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 1.0);
    budget(t0, max);

    // somme plate : la pile RPN reste à 2, quel que soit le nombre de termes
    let mut somme = String::from("1");
    for _ in 0..500 {
        somme.push_str("+1");
    }
    let v = eval_expression(&somme, &Environnement::new()).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 501.0);
    budget(t0, max);
}

#[test]
fn fuzz_safe_determinisme_bit_a_bit() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // deux passes avec la même seed : sorties identiques (Debug compris,
    // pour capturer NaN et ±inf sans piège d’égalité flottante)
    let mut sorties = Vec::new();
    for _ in 0..2 {
        let mut rng = Rng::new(0xD5EED_u64);
        let mut env = Environnement::new();
        env.insert("x".to_string(), 0.25);

        let mut trace = String::new();
        for _ in 0..100 {
            budget(t0, max);
            let expr = gen_expr(&mut rng, 4);
            let res = eval_expression(&expr, &env);
            trace.push_str(&format!("{expr} => {res:?}\n"));
        }
        sorties.push(trace);
    }

    assert_eq!(sorties[0], sorties[1]);
}
