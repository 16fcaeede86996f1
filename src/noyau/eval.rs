//! Noyau — évaluation (pipeline réel)
//!
//! retrait du blanc -> tokenize -> multiplication implicite -> RPN -> f64
//!
//! Remarque : tout est IEEE f64. Une variable absente de l’environnement
//! vaut NaN (poison silencieux) : l’évaluation aboutit toujours, le NaN se
//! propage, et le rendu saura quoi en faire (pas de point, trou de courbe).

use std::collections::HashMap;

use super::implicite::inserer_mult_implicite;
use super::jetons::{tokenize, Tok};
use super::rpn::to_rpn;

/// Environnement d’évaluation : nom de variable -> valeur.
pub type Environnement = HashMap<String, f64>;

/// Moitié “parse” du pipeline : retrait du blanc, jetons, '*' implicites, RPN.
/// courbe.rs la réutilise telle quelle pour ne parser qu’UNE fois par courbe.
pub fn preparer_rpn(expr_str: &str) -> Result<Vec<Tok>, String> {
    // 1) Retrait de TOUT le blanc (contrat : tokenize n’en voit jamais)
    let s: String = expr_str.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 2) Jetons
    let jetons = tokenize(&s)?;

    // 3) Multiplication implicite ("2x" => "2*x")
    let jetons = inserer_mult_implicite(&jetons);

    // 4) RPN
    to_rpn(&jetons)
}

/// Évalue une RPN contre un environnement.
///
/// - Num : empile
/// - Ident : valeur de l’environnement, NaN si absente (poison silencieux)
/// - MinusU : dépile 1, empile l’opposé
/// - binaires : dépile b PUIS a, empile a op b
/// - '/' : division IEEE (1/0 = +inf, 0/0 = NaN) ; '^' : powf
pub fn eval_rpn(rpn: &[Tok], env: &Environnement) -> Result<f64, String> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Ident(name) => {
                st.push(env.get(name).copied().unwrap_or(f64::NAN));
            }

            Tok::MinusU => {
                let a = st.pop().ok_or("expression invalide")?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}

/// API publique : évalue une expression contre un environnement.
pub fn eval_expression(expr_str: &str, env: &Environnement) -> Result<f64, String> {
    let rpn = preparer_rpn(expr_str)?;
    eval_rpn(&rpn, env)
}

/* ------------------------ tests ------------------------ */
