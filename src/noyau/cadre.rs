// src/noyau/cadre.rs
//
// Un cadre = une frame
// --------------------
// Point d’entrée du noyau pour la vue : à chaque frame, la feuille entière
// est ré-interprétée contre le repère courant, et on ressort du DONNÉ À
// TRACER en pixels + un statut par cellule. Aucun état conservé entre deux
// cadres : mêmes textes + même repère => même sortie.
//
// Les erreurs restent confinées à LEUR cellule : une cellule cassée ne
// retire jamais les tracés des autres.

use super::courbe::echantillonner_courbe;
use super::eval::eval_expression;
use super::feuille::{interpreter_feuille, Trace};
use super::repere::{Point, Repere};

/// Un point à tracer (pixels), rattaché à sa cellule.
#[derive(Clone, Debug, PartialEq)]
pub struct PointTrace {
    pub cellule: usize,
    pub position: Point,
}

/// Une courbe à tracer (pixels), rattachée à sa cellule.
#[derive(Clone, Debug, PartialEq)]
pub struct CourbeTrace {
    pub cellule: usize,
    pub points: Vec<Point>,
}

/// Sortie d’un cadre : tout ce que la vue doit dessiner, plus les statuts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortieCadre {
    pub points: Vec<PointTrace>,
    pub courbes: Vec<CourbeTrace>,
    /// Un statut par cellule, même ordre que la feuille (None = saine).
    pub statuts: Vec<Option<String>>,
}

/// Évalue la feuille entière pour UN cadre.
pub fn evaluer_cadre(textes: &[&str], repere: &Repere, qualite: usize) -> SortieCadre {
    let it = interpreter_feuille(textes);

    let mut statuts = it.statuts;
    let mut points = Vec::new();
    let mut courbes = Vec::new();

    for trace in &it.traces {
        match trace {
            Trace::Point {
                cellule,
                expr_x,
                expr_y,
            } => {
                // Un point NaN/inf est ÉMIS quand même (la vue le sautera) :
                // seule une erreur de pipeline marque la cellule.
                let resultat = eval_expression(expr_x, &it.env)
                    .and_then(|x| eval_expression(expr_y, &it.env).map(|y| Point::new(x, y)));

                match resultat {
                    Ok(p) => points.push(PointTrace {
                        cellule: *cellule,
                        position: repere.vers_ecran(p),
                    }),
                    Err(e) => statuts[*cellule] = Some(e),
                }
            }

            Trace::Courbe { cellule, expr } => {
                match echantillonner_courbe(expr, &it.env, repere, qualite) {
                    Ok(pts) => courbes.push(CourbeTrace {
                        cellule: *cellule,
                        points: pts,
                    }),
                    Err(e) => statuts[*cellule] = Some(e),
                }
            }
        }
    }

    SortieCadre {
        points,
        courbes,
        statuts,
    }
}

/* ------------------------ tests ------------------------ */
