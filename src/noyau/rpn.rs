// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), prête pour eval.rs
//
// Règles:
// - Moins unaire:
//    - un '-' en position préfixe (début, ou après un opérateur ou '(')
//      est requalifié en MinusU, opérateur unaire à part entière
//    - MinusU prime sur '^' : "-3^2" vaut 9, comme "(-3)^2"
// - Précédences: MinusU(5, droite) > Caret(4, droite) > Star/Slash(3) > Plus/Minus(2)
// - Parenthèses déséquilibrées (dans les deux sens) => erreur

use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 2,
        Tok::Star | Tok::Slash => 3,
        Tok::Caret => 4,
        Tok::MinusU => 5,
        _ => 0,
    }
}

fn is_associatif_droite(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::MinusU)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(3), Caret, Num(2)]
///   rpn:    [Num(3), MinusU, Num(2), Caret]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à requalifier le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        // Requalification AVANT tout : '-' préfixe => MinusU
        let tok = match tok {
            Tok::Minus if !prev_was_value => Tok::MinusU,
            autre => autre,
        };

        match tok {
            Tok::Num(_) | Tok::Ident(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus | Tok::MinusU | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_associatif_droite(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/* ------------------------ tests ------------------------ */
