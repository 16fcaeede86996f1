//! Noyau du traceur
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation
//! - implicite.rs : multiplication implicite ("2x" => "2*x")
//! - rpn.rs       : shunting-yard (moins unaire compris)
//! - eval.rs      : évaluation RPN + pipeline expression -> f64
//! - feuille.rs   : cellules (let / plot / graph), deux passes
//! - repere.rs    : caméra + échelle, domaine <-> pixels
//! - courbe.rs    : échantillonnage y = f(x) sur la largeur du canevas
//! - cadre.rs     : une frame complète (feuille -> tracés + statuts)

pub mod cadre;
pub mod courbe;
pub mod eval;
pub mod feuille;
pub mod implicite;
pub mod jetons;
pub mod repere;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use cadre::evaluer_cadre;
pub use eval::eval_expression;
