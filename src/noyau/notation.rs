// src/noyau/notation.rs
//
// Adaptateur de notation : le PRÉFIXE est structurellement du POSTFIXE dont
// l'ordre des jetons est renversé et les parenthèses échangées — renverser
// "(op a b)" donne ")b a op(" lu à l'envers, d'où l'échange '(' <-> ')'.
// Un seul analyseur à pile sert donc les deux notations.

use super::jetons::decouper;

/// Renverse la suite de jetons de `s` et rejoint le tout en échangeant
/// chaque '(' contre ')' et inversement. Le résultat est une entrée
/// postfixe-équivalente, à analyser avec le drapeau "déjà normalisé"
/// (le renversement physique a rétabli l'ordre gauche->droite des opérandes,
/// l'analyseur ne doit PAS re-renverser les groupes dépilés).
pub fn renverser(s: &str) -> String {
    let mut jetons = decouper(s);
    jetons.reverse();

    let mut sortie = String::with_capacity(s.len());
    for jeton in &jetons {
        match jeton.as_str() {
            "(" => sortie.push(')'),
            ")" => sortie.push('('),
            autre => sortie.push_str(autre),
        }
    }
    sortie
}
