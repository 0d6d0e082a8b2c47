// src/noyau/jetons.rs
//
// Découpage en jetons par CLASSES DE CARACTÈRES (pas de grammaire, pas de
// table de lexer) : deux caractères adjacents restent dans le même jeton si
// et seulement si
//   - les deux sont des lettres, ou
//   - le premier est un chiffre (ou un '-' collé à un chiffre) et le second
//     un chiffre, ou
//   - les deux sont des blancs.
// Toute autre adjacence est une frontière ; '(' et ')' sortent donc toujours
// seuls.
//
// Les jetons PARTITIONNENT l'entrée : rien n'est filtré, leur concaténation
// redonne l'entrée à l'identique (les suites de blancs sont des jetons).
//
// Cas spécial "atan2" : le nom mélange lettres et chiffre, la règle de classes
// le couperait en "atan" + "2". On calcule donc les frontières sur une COPIE
// masquée où chaque "atan2" devient "atanb" (tout-lettres, même longueur),
// puis on découpe le texte ORIGINAL sur ces frontières. Ainsi "atan2" n'est
// jamais coupé, et une entrée qui contiendrait réellement "atanb" n'est pas
// corrompue (elle restera un jeton inconnu à l'analyse).

/// Découpe `s` en jetons. Entrée d'un seul caractère : un seul jeton,
/// inconditionnellement.
pub fn decouper(s: &str) -> Vec<String> {
    let originaux: Vec<char> = s.chars().collect();
    if originaux.is_empty() {
        return Vec::new();
    }
    if originaux.len() == 1 {
        return vec![s.to_string()];
    }

    let masque: Vec<char> = s.replace("atan2", "atanb").chars().collect();
    // "atan2" et "atanb" font cinq caractères : le masque est aligné.
    debug_assert_eq!(masque.len(), originaux.len());

    let mut jetons = Vec::new();
    let mut debut = 0usize;
    for i in 1..originaux.len() {
        if !meme_jeton(masque[i - 1], masque[i]) {
            jetons.push(originaux[debut..i].iter().collect());
            debut = i;
        }
    }
    jetons.push(originaux[debut..].iter().collect());
    jetons
}

/// Règle d'adjacence : `a` puis `b` appartiennent-ils au même jeton ?
fn meme_jeton(a: char, b: char) -> bool {
    (a.is_alphabetic() && b.is_alphabetic())
        || ((a.is_ascii_digit() || a == '-') && b.is_ascii_digit())
        || (a.is_whitespace() && b.is_whitespace())
}

/// Format utilitaire (démarche / debug) : jetons significatifs séparés par un
/// espace, suites de blancs omises.
pub fn format_jetons(jetons: &[String]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        if j.chars().all(char::is_whitespace) {
            continue;
        }
        out.push(j.as_str());
    }
    out.join(" ")
}
