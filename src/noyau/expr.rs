// src/noyau/expr.rs
//
// Arbre d'expression (modèle de nœuds).
// - Constante : feuille entière
// - Variable  : feuille x / y / z (ensemble fermé)
// - Unaire    : negate, atan, sinh, cosh
// - Binaire   : + - * / atan2
//
// IMPORTANT:
// - arbre IMMUABLE une fois construit (possession stricte via Box, pas de partage)
// - l'arité est garantie par construction (un variant unaire porte exactement
//   un enfant, un binaire exactement deux) : pas de validation à l'évaluation
// - evaluer() est une fonction PURE de (nœud, x, y, z) — aucun état global

use std::fmt;

/// Les trois variables admises. Ensemble fermé : pas de table de symboles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    pub fn nom(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        }
    }

    /// Reconnaissance d'un nom de variable ("x" | "y" | "z"), sinon None.
    pub fn depuis_nom(nom: &str) -> Option<Variable> {
        match nom {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            "z" => Some(Variable::Z),
            _ => None,
        }
    }

    fn valeur(self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Variable::X => x,
            Variable::Y => y,
            Variable::Z => z,
        }
    }
}

/// Opérateurs unaires (arité 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Negation,
    ArcTan,
    SinusHyp,
    CosinusHyp,
}

impl OpUnaire {
    /// Symbole d'affichage, commun aux deux sérialisations.
    pub fn symbole(self) -> &'static str {
        match self {
            OpUnaire::Negation => "negate",
            OpUnaire::ArcTan => "atan",
            OpUnaire::SinusHyp => "sinh",
            OpUnaire::CosinusHyp => "cosh",
        }
    }

    pub fn appliquer(self, a: f64) -> f64 {
        match self {
            OpUnaire::Negation => -a,
            OpUnaire::ArcTan => a.atan(),
            OpUnaire::SinusHyp => a.sinh(),
            OpUnaire::CosinusHyp => a.cosh(),
        }
    }
}

/// Opérateurs binaires (arité 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    ArcTan2,
}

impl OpBinaire {
    /// Symbole d'affichage, commun aux deux sérialisations.
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Addition => "+",
            OpBinaire::Soustraction => "-",
            OpBinaire::Multiplication => "*",
            OpBinaire::Division => "/",
            OpBinaire::ArcTan2 => "atan2",
        }
    }

    /// Règle numérique, sémantique f64 native.
    /// La division n'est JAMAIS une erreur : 1/0 -> inf, 0/0 -> NaN.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            OpBinaire::Addition => a + b,
            OpBinaire::Soustraction => a - b,
            OpBinaire::Multiplication => a * b,
            OpBinaire::Division => a / b,
            OpBinaire::ArcTan2 => a.atan2(b),
        }
    }
}

/// Arbre d'expression. Somme FERMÉE : le compilateur garantit que chaque
/// genre de nœud implémente chacune des trois opérations (évaluer,
/// sérialiser postfixe, sérialiser préfixe).
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Constante(i64),
    Variable(Variable),
    Unaire(OpUnaire, Box<Expr>),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation récursive : enfants d'abord, puis la règle du nœud.
    pub fn evaluer(&self, x: f64, y: f64, z: f64) -> f64 {
        use Expr::*;

        match self {
            Constante(v) => *v as f64,
            Variable(v) => v.valeur(x, y, z),
            Unaire(op, a) => op.appliquer(a.evaluer(x, y, z)),
            Binaire(op, a, b) => op.appliquer(a.evaluer(x, y, z), b.evaluer(x, y, z)),
        }
    }

    /// Sérialisation PRÉFIXE, toujours intégralement parenthésée :
    /// feuille telle quelle, "(op a)" en unaire, "(op a b)" en binaire.
    pub fn prefixe(&self) -> String {
        use Expr::*;

        match self {
            Constante(v) => v.to_string(),
            Variable(v) => v.nom().to_string(),
            Unaire(op, a) => format!("({} {})", op.symbole(), a.prefixe()),
            Binaire(op, a, b) => format!("({} {} {})", op.symbole(), a.prefixe(), b.prefixe()),
        }
    }
}

/// Sérialisation POSTFIXE : feuille telle quelle, "a op" en unaire,
/// "a b op" en binaire. Un seul espace entre éléments, pas de parenthèses.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Constante(v) => write!(f, "{v}"),
            Variable(v) => write!(f, "{}", v.nom()),
            Unaire(op, a) => write!(f, "{a} {}", op.symbole()),
            Binaire(op, a, b) => write!(f, "{a} {b} {}", op.symbole()),
        }
    }
}
