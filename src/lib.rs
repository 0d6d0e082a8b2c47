// src/lib.rs
//
// Calculatrice polonaise — bibliothèque seulement (pas d'hôte, pas d'E/S)
// -----------------------------------------------------------------------
// But:
// - analyser une expression en notation POSTFIXE ("x y +") ou PRÉFIXE ("(+ x y)")
// - construire un arbre immuable (Expr)
// - évaluer l'arbre sur (x, y, z) en f64, sérialiser en postfixe et en préfixe
//
// IMPORTANT (structure projet):
// - tout le vrai travail vit dans src/noyau/ (jetons, rpn, notation, expr)
// - ici: façade publique seulement

pub mod noyau;

pub use noyau::{
    evaluer_expression, parse, parse_prefixe, Demarche, ErreurAnalyse, Expr, Notation,
};
