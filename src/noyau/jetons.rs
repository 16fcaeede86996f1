// src/noyau/jetons.rs

/// Jetons du langage d’expressions.
///
/// NOTE: `MinusU` (moins unaire) ne sort jamais de `tokenize` : c’est le
/// parseur (rpn.rs) qui requalifie un `Minus` d’après son contexte.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Variables (tout ce qui n’est pas opérateur / nombre / parenthèse)
    Ident(String),

    Plus,
    Minus,
    MinusU, // moins unaire (posé par le parseur)
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) — au plus UN point par nombre
///   (ex: "1.2.3" => 1.2 puis .3)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (casse conservée)
///
/// IMPORTANT: l’appelant a déjà retiré TOUT le blanc (contrat du pipeline) ;
/// ici, une espace résiduelle est un caractère inattendu comme un autre.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        // Nombre : suite de chiffres avec au plus un '.' consommé.
        // Un deuxième '.' termine le nombre SANS erreur (il ouvrira le suivant).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let num_str: String = chars[start..i].iter().collect();
            let v: f64 = num_str
                .parse()
                .map_err(|_| format!("nombre invalide: '{num_str}'"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (debug/tests) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::MinusU => "u-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

/* ------------------------ tests ------------------------ */
