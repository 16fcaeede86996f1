// src/noyau/courbe.rs
//
// Échantillonnage d’une courbe y = f(x)
// -------------------------------------
// Une colonne par pas d’échantillonnage, sur TOUTE la largeur du canevas
// (bords inclus, pas = largeur/(qualite-1)) :
//   colonne écran -> x domaine -> f(x) -> (x, y) -> pixel
//
// Contrats:
// - l’expression est parsée UNE fois (pas une fois par colonne)
// - sortie de longueur EXACTE `qualite` dès que le parse réussit
// - les échantillons non finis (NaN, ±inf) restent dans la sortie,
//   le rendu en fera des trous ; on ne filtre RIEN ici

use super::eval::{eval_rpn, preparer_rpn, Environnement};
use super::repere::{Point, Repere};

/// Échantillonne `expr` (fonction de x) sur la largeur du repère.
/// Retourne les points en PIXELS, prêts à tracer.
pub fn echantillonner_courbe(
    expr: &str,
    env: &Environnement,
    repere: &Repere,
    qualite: usize,
) -> Result<Vec<Point>, String> {
    let rpn = preparer_rpn(expr)?;

    // Copie locale de l’environnement, avec un slot "x" écrasé à chaque
    // colonne. OPTI: une seule insertion de la clé, zéro alloc par colonne.
    let mut env_x = env.clone();
    env_x.insert("x".to_string(), f64::NAN);

    let pas = if qualite > 1 {
        repere.largeur / (qualite - 1) as f64
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(qualite);
    for i in 0..qualite {
        let sx = i as f64 * pas;
        let x = repere.vers_domaine(Point::new(sx, 0.0)).x;

        if let Some(slot) = env_x.get_mut("x") {
            *slot = x;
        }

        let y = eval_rpn(&rpn, &env_x)?;
        points.push(repere.vers_ecran(Point::new(x, y)));
    }

    Ok(points)
}

/// Découpe une polyligne en tronçons finis : les échantillons NaN/±inf
/// font des trous visuels, jamais des segments aberrants. Tranches sur le
/// vecteur d’entrée, zéro copie.
pub fn segments_finis(points: &[Point]) -> Vec<&[Point]> {
    let mut segments = Vec::new();
    let mut debut: Option<usize> = None;

    for (i, p) in points.iter().enumerate() {
        let fini = p.x.is_finite() && p.y.is_finite();
        match (fini, debut) {
            (true, None) => debut = Some(i),
            (false, Some(d)) => {
                segments.push(&points[d..i]);
                debut = None;
            }
            _ => {}
        }
    }
    if let Some(d) = debut {
        segments.push(&points[d..]);
    }

    segments
}

/* ------------------------ tests ------------------------ */
