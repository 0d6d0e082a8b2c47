// src/noyau/erreurs.rs
//
// Taxonomie FERMÉE des erreurs d'analyse.
// - une seule famille d'erreurs : tout échec interrompt l'analyse et remonte
// - aucun rattrapage interne, aucune reprise
// - l'évaluation, elle, n'échoue JAMAIS (sémantique IEEE-754 : inf / NaN)
//
// NOTE: les jetons ne portent pas de position ; les messages nomment le texte
// du jeton et les comptes, rien d'autre.

use std::fmt;

use thiserror::Error;

/// Genre d'une feuille nue trouvée entre parenthèses (pour le message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreOperande {
    Variable,
    Constante,
}

impl fmt::Display for GenreOperande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreOperande::Variable => write!(f, "variable"),
            GenreOperande::Constante => write!(f, "constante"),
        }
    }
}

/// Toutes les façons dont une analyse peut échouer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurAnalyse {
    /// Entrée "" ou "()" (ou rien d'autre que des blancs / parenthèses).
    #[error("expression vide")]
    ExpressionVide,

    /// Un opérateur a trouvé moins d'opérandes sur la pile que son arité.
    #[error("pour l'opérateur {{{operateur}}} : {attendu} opérande(s) attendue(s), {trouve} trouvée(s)")]
    OperandesInsuffisantes {
        operateur: String,
        attendu: usize,
        trouve: usize,
    },

    /// ')' rencontrée juste après '(' (les blancs ne comptent pas).
    #[error("parenthèses vides")]
    ParenthesesVides,

    /// Plus d'ouvrantes que de fermantes.
    #[error("parenthèse fermante attendue")]
    ParentheseFermanteAttendue,

    /// Plus de fermantes que d'ouvrantes.
    #[error("parenthèse fermante inattendue")]
    ParentheseFermanteInattendue,

    /// Des parenthèses étaient présentes mais le premier élément de pile est
    /// une feuille nue (variable ou constante) — heuristique, voir rpn.rs.
    #[error("entre parenthèses, une opération est attendue ; {genre} {texte} trouvée")]
    OperandeNueEntreParentheses { genre: GenreOperande, texte: String },

    /// Plus d'un nœud restant en fin d'analyse : il manquait un opérateur.
    #[error("opérateur attendu")]
    OperateurAttendu,

    /// Jeton qui n'est ni opérateur, ni variable, ni entier, ni parenthèse.
    #[error("jeton inconnu : {0}")]
    JetonInconnu(String),
}
