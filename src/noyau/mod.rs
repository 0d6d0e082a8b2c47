//! Noyau polonais
//!
//! Organisation interne :
//! - expr.rs     : arbre d'expression immuable + évaluation + sérialisations
//! - jetons.rs   : découpage par classes de caractères (partition de l'entrée)
//! - rpn.rs      : analyseur à pile + table d'opérateurs + parse/parse_prefixe
//! - notation.rs : adaptateur préfixe (renversement + échange de parenthèses)
//! - erreurs.rs  : taxonomie fermée des erreurs d'analyse
//! - eval.rs     : pipeline complet + démarche

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod notation;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurAnalyse, GenreOperande};
pub use eval::{evaluer_expression, Demarche, Notation};
pub use expr::{Expr, OpBinaire, OpUnaire, Variable};
pub use rpn::{parse, parse_prefixe};
