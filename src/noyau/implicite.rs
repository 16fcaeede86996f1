// src/noyau/implicite.rs
//
// Multiplication implicite
// ------------------------
// "2x" vaut "2*x", "(x)(y)" vaut "x*y", "3(x+1)" vaut "3*(x+1)".
//
// Règle (sur jetons, jamais sur texte) : on insère un Star entre deux jetons
// adjacents (a, b) quand a TERMINE une valeur et b en COMMENCE une.
//   a ∈ { Num, Ident, RPar }
//   b ∈ { Num, Ident, LPar }
// Tout le reste passe tel quel. Fonction pure : nouveau vecteur.

use super::jetons::Tok;

/// a termine-t-il une valeur ? (un Star inséré peut le suivre)
fn termine_valeur(t: &Tok) -> bool {
    matches!(t, Tok::Num(_) | Tok::Ident(_) | Tok::RPar)
}

/// b commence-t-il une valeur ? (un Star inséré peut le précéder)
fn commence_valeur(t: &Tok) -> bool {
    matches!(t, Tok::Num(_) | Tok::Ident(_) | Tok::LPar)
}

/// Insère les Star implicites entre valeurs adjacentes.
pub fn inserer_mult_implicite(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());

    for t in tokens {
        if let Some(prec) = out.last() {
            if termine_valeur(prec) && commence_valeur(t) {
                out.push(Tok::Star);
            }
        }
        out.push(t.clone());
    }

    out
}

/* ------------------------ tests ------------------------ */
