// src/noyau/feuille.rs
//
// Feuille de cellules
// -------------------
// Chaque cellule est UNE ligne du petit langage :
//   let <nom> = <expr>     définition (nom = un seul caractère [a-zA-Z_])
//   plot(<ex>, <ey>)       un point
//   graph(<expr>)          une courbe de x
// Tout le reste est ignoré sans erreur (commentaire de fait).
//
// Le blanc ne compte JAMAIS : "l e t a = 2" est une définition valide.
// Les mots-clés sont en minuscules.
//
// Interprétation en DEUX passes par frame :
//   1) les définitions, dans l’ordre de la feuille, dans UN environnement
//      partagé (une définition ratée marque SA cellule et ne lie rien) ;
//   2) les tracés, émis contre l’environnement COMPLET.
// Une redéfinition écrase la précédente ; en pratique la dernière gagne
// pour tous les tracés, où qu’ils soient dans la feuille.

use super::eval::{eval_expression, Environnement};

/// Une cellule classée.
#[derive(Clone, Debug, PartialEq)]
pub enum Enonce {
    Definition { nom: String, expr: String },
    TracePoint { expr_x: String, expr_y: String },
    TraceCourbe { expr: String },
    Inconnu,
}

/// Demande de tracé (les expressions restent à évaluer, voir cadre.rs).
/// `cellule` = index dans la feuille, pour router erreurs et couleurs.
#[derive(Clone, Debug, PartialEq)]
pub enum Trace {
    Point {
        cellule: usize,
        expr_x: String,
        expr_y: String,
    },
    Courbe {
        cellule: usize,
        expr: String,
    },
}

/// Résultat d’interprétation d’une feuille.
#[derive(Clone, Debug, Default)]
pub struct Interpretation {
    pub env: Environnement,
    pub traces: Vec<Trace>,
    /// Un statut par cellule, même ordre que la feuille (None = saine).
    pub statuts: Vec<Option<String>>,
}

fn sans_blanc(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Classe une cellule d’après son préfixe (après retrait du blanc).
pub fn classer_cellule(texte: &str) -> Enonce {
    let s = sans_blanc(texte);

    if let Some(reste) = s.strip_prefix("let") {
        // "let" + UN caractère de nom + "=" + expr, sinon cellule ignorée
        let mut it = reste.chars();
        return match (it.next(), it.next()) {
            (Some(nom), Some('=')) if nom.is_ascii_alphabetic() || nom == '_' => {
                Enonce::Definition {
                    nom: nom.to_string(),
                    expr: it.as_str().to_string(),
                }
            }
            _ => Enonce::Inconnu,
        };
    }

    if let Some(reste) = s.strip_prefix("plot(") {
        // parenthèse fermante optionnelle ; virgules = séparateurs d’arguments
        let interieur = reste.strip_suffix(')').unwrap_or(reste);
        let morceaux: Vec<&str> = interieur.split(',').collect();
        // les deux premiers morceaux comptent, le reste est ignoré ;
        // un morceau manquant devient l’expression vide (échouera à l’éval)
        return Enonce::TracePoint {
            expr_x: morceaux.first().copied().unwrap_or("").to_string(),
            expr_y: morceaux.get(1).copied().unwrap_or("").to_string(),
        };
    }

    if let Some(reste) = s.strip_prefix("graph(") {
        let interieur = reste.strip_suffix(')').unwrap_or(reste);
        return Enonce::TraceCourbe {
            expr: interieur.to_string(),
        };
    }

    Enonce::Inconnu
}

/// Interprète la feuille entière : définitions (passe 1) puis tracés (passe 2).
pub fn interpreter_feuille(textes: &[&str]) -> Interpretation {
    let enonces: Vec<Enonce> = textes.iter().map(|t| classer_cellule(t)).collect();

    let mut env = Environnement::new();
    let mut statuts: Vec<Option<String>> = vec![None; textes.len()];

    // Passe 1 : définitions, dans l’ordre de la feuille.
    for (i, enonce) in enonces.iter().enumerate() {
        if let Enonce::Definition { nom, expr } = enonce {
            match eval_expression(expr, &env) {
                // NaN est une VALEUR (variable inconnue à droite) : on lie quand même
                Ok(v) => {
                    env.insert(nom.clone(), v);
                }
                Err(e) => {
                    statuts[i] = Some(e);
                }
            }
        }
    }

    // Passe 2 : tracés, contre l’environnement complet.
    let mut traces = Vec::new();
    for (i, enonce) in enonces.into_iter().enumerate() {
        match enonce {
            Enonce::TracePoint { expr_x, expr_y } => {
                traces.push(Trace::Point {
                    cellule: i,
                    expr_x,
                    expr_y,
                });
            }
            Enonce::TraceCourbe { expr } => {
                traces.push(Trace::Courbe { cellule: i, expr });
            }
            Enonce::Definition { .. } | Enonce::Inconnu => {}
        }
    }

    Interpretation {
        env,
        traces,
        statuts,
    }
}

/* ------------------------ tests ------------------------ */
