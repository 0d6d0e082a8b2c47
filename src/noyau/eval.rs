//! Noyau — pipeline complet
//!
//! jetons -> (renversement si préfixe) -> analyse à pile -> Expr -> évaluation
//!
//! Remarque : parse / parse_prefixe (rpn.rs) suffisent pour construire un
//! arbre ; ici on offre l'appel "tout-en-un" avec la démarche (trace des
//! étapes), pratique pour un hôte ou pour le debug.

use super::erreurs::ErreurAnalyse;
use super::expr::Expr;
use super::jetons::{decouper, format_jetons};
use super::notation::renverser;
use super::rpn::analyser;

/// Notation de l'entrée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Postfixe,
    Prefixe,
}

/// Démarche : les étapes intermédiaires du pipeline, en texte.
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    /// Jetons significatifs de l'entrée, séparés par un espace.
    pub jetons: String,
    /// Forme réellement soumise à l'analyseur à pile (l'entrée elle-même en
    /// postfixe ; la forme renversée/échangée en préfixe).
    pub normalise: String,
    /// Sérialisation postfixe de l'arbre obtenu.
    pub postfixe: String,
    /// Sérialisation préfixe de l'arbre obtenu.
    pub prefixe: String,
}

/// API publique : analyse `expr` selon `notation`, évalue sur (x, y, z) et
/// retourne la valeur avec la démarche. L'évaluation n'échoue jamais (inf /
/// NaN suivent la sémantique f64) ; seules les erreurs d'ANALYSE remontent.
pub fn evaluer_expression(
    expr: &str,
    notation: Notation,
    x: f64,
    y: f64,
    z: f64,
) -> Result<(f64, Demarche), ErreurAnalyse> {
    let jetons_txt = format_jetons(&decouper(expr));

    let (normalise, drapeau_postfixe) = match notation {
        Notation::Postfixe => (expr.to_string(), true),
        Notation::Prefixe => (renverser(expr), false),
    };

    let arbre: Expr = analyser(&normalise, drapeau_postfixe)?;
    let valeur = arbre.evaluer(x, y, z);

    let d = Demarche {
        jetons: jetons_txt,
        normalise,
        postfixe: arbre.to_string(),
        prefixe: arbre.prefixe(),
    };

    Ok((valeur, d))
}
