// src/noyau/rpn.rs
//
// Analyseur à pile (postfixe et postfixe-normalisé).
// Objectif:
// - consommer la suite de jetons de gauche à droite
// - empiler les feuilles, dépiler les opérandes à chaque opérateur
// - valider au vol : arité, équilibre des parenthèses, parenthèses vides,
//   exactement UN résultat en fin d'analyse
//
// Règle CRITIQUE (ordre des opérandes):
// - en POSTFIXE, dépiler renverse l'ordre d'apparition gauche->droite : le
//   groupe dépilé doit être re-renversé avant construction du nœud
// - sur le chemin PRÉFIXE (entrée déjà renversée par notation::renverser),
//   l'ordre de dépilage est déjà le bon : ne PAS re-renverser
// Se tromper de condition transpose silencieusement les opérandes de
// '-', '/' et 'atan2' ; seuls des tests d'évaluation le voient.

use phf::{phf_map, Map};

use super::erreurs::{ErreurAnalyse, GenreOperande};
use super::expr::{Expr, OpBinaire, OpUnaire, Variable};
use super::jetons::decouper;
use super::notation::renverser;

/// Genre d'opérateur référencé par la table : l'arité découle du genre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Unaire(OpUnaire),
    Binaire(OpBinaire),
}

impl Operateur {
    pub fn arite(self) -> usize {
        match self {
            Operateur::Unaire(_) => 1,
            Operateur::Binaire(_) => 2,
        }
    }
}

/// Table symbole -> opérateur, figée à la compilation. Aucune retouche à
/// l'exécution.
static OPERATEURS: Map<&'static str, Operateur> = phf_map! {
    "+" => Operateur::Binaire(OpBinaire::Addition),
    "-" => Operateur::Binaire(OpBinaire::Soustraction),
    "*" => Operateur::Binaire(OpBinaire::Multiplication),
    "/" => Operateur::Binaire(OpBinaire::Division),
    "atan2" => Operateur::Binaire(OpBinaire::ArcTan2),
    "negate" => Operateur::Unaire(OpUnaire::Negation),
    "atan" => Operateur::Unaire(OpUnaire::ArcTan),
    "sinh" => Operateur::Unaire(OpUnaire::SinusHyp),
    "cosh" => Operateur::Unaire(OpUnaire::CosinusHyp),
};

/// Point d'entrée POSTFIXE : "x y +".
pub fn parse(expr: &str) -> Result<Expr, ErreurAnalyse> {
    analyser(expr, true)
}

/// Point d'entrée PRÉFIXE : "(+ x y)".
///
/// Le renversement échange aussi '(' et ')' : un déséquilibre détecté sur la
/// forme normalisée a le sens INVERSE du point de vue de l'entrée. On
/// ré-échange donc les deux erreurs de déséquilibre au retour, pour que
/// "(+ x y" signale bien une fermante attendue.
pub fn parse_prefixe(expr: &str) -> Result<Expr, ErreurAnalyse> {
    analyser(&renverser(expr), false).map_err(|e| match e {
        ErreurAnalyse::ParentheseFermanteAttendue => ErreurAnalyse::ParentheseFermanteInattendue,
        ErreurAnalyse::ParentheseFermanteInattendue => ErreurAnalyse::ParentheseFermanteAttendue,
        autre => autre,
    })
}

/// Analyse `expr` avec une pile d'opérandes. `postfixe` vrai = entrée
/// postfixe brute ; faux = entrée déjà normalisée par notation::renverser.
pub fn analyser(expr: &str, postfixe: bool) -> Result<Expr, ErreurAnalyse> {
    // Garde d'entrée vide, AVANT tout découpage.
    if expr.is_empty() || expr == "()" {
        return Err(ErreurAnalyse::ExpressionVide);
    }

    let jetons = decouper(expr);

    let mut pile: Vec<Expr> = Vec::new();
    let mut ouvrantes = 0usize;
    let mut fermantes = 0usize;
    // Dernier jeton SIGNIFICATIF (les blancs sont sautés sans le toucher),
    // pour détecter "()".
    let mut prec = "";

    for jeton in &jetons {
        let jeton = jeton.as_str();

        if jeton.chars().all(char::is_whitespace) {
            continue;
        }

        if let Some(&op) = OPERATEURS.get(jeton) {
            let arite = op.arite();
            if pile.len() < arite {
                return Err(ErreurAnalyse::OperandesInsuffisantes {
                    operateur: jeton.to_string(),
                    attendu: arite,
                    trouve: pile.len(),
                });
            }

            // La garde d'arité ci-dessus rend ces dépilages infaillibles.
            let mut args: Vec<Expr> = (0..arite).map(|_| pile.pop().unwrap()).collect();
            if postfixe {
                // rétablit l'ordre d'apparition gauche->droite
                args.reverse();
            }
            let mut args = args.into_iter();

            let noeud = match op {
                Operateur::Unaire(u) => Expr::Unaire(u, Box::new(args.next().unwrap())),
                Operateur::Binaire(b) => {
                    let gauche = Box::new(args.next().unwrap());
                    let droite = Box::new(args.next().unwrap());
                    Expr::Binaire(b, gauche, droite)
                }
            };
            pile.push(noeud);
        } else if let Some(v) = Variable::depuis_nom(jeton) {
            pile.push(Expr::Variable(v));
        } else if let Ok(valeur) = jeton.parse::<i64>() {
            pile.push(Expr::Constante(valeur));
        } else if jeton == "(" {
            // marqueur structurel, pas un opérande : on compte seulement
            ouvrantes += 1;
        } else if jeton == ")" {
            fermantes += 1;
            if prec == "(" {
                return Err(ErreurAnalyse::ParenthesesVides);
            }
        } else {
            return Err(ErreurAnalyse::JetonInconnu(jeton.to_string()));
        }

        prec = jeton;
    }

    // Équilibre des parenthèses.
    if ouvrantes != fermantes {
        return Err(if ouvrantes > fermantes {
            ErreurAnalyse::ParentheseFermanteAttendue
        } else {
            ErreurAnalyse::ParentheseFermanteInattendue
        });
    }

    // Heuristique "feuille nue entre parenthèses" : si des parenthèses
    // étaient présentes et que le PREMIER élément de pile (le fond) se rend
    // en postfixe comme une simple variable ou un simple entier, on refuse.
    // C'est volontairement partiel (le cas mal formé le plus courant) : on ne
    // vérifie PAS chaque paire de parenthèses. Ne pas "renforcer".
    if ouvrantes != 0 {
        if let Some(premier) = pile.first() {
            let texte = premier.to_string();
            if Variable::depuis_nom(&texte).is_some() {
                return Err(ErreurAnalyse::OperandeNueEntreParentheses {
                    genre: GenreOperande::Variable,
                    texte,
                });
            }
            if texte.parse::<i64>().is_ok() {
                return Err(ErreurAnalyse::OperandeNueEntreParentheses {
                    genre: GenreOperande::Constante,
                    texte,
                });
            }
        }
    }

    // Exactement un nœud doit rester : la racine.
    if pile.len() > 1 {
        return Err(ErreurAnalyse::OperateurAttendu);
    }
    // Pile vide : entrée faite uniquement de blancs (ou de parenthèses
    // équilibrées) — on la traite comme une expression vide.
    pile.pop().ok_or(ErreurAnalyse::ExpressionVide)
}
