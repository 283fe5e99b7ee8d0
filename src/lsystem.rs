//! L-system definition and generational rewriting
//!
//! One generation replaces every symbol of the current string at once;
//! replacements are not re-expanded within the same pass.

use serde::Serialize;

use crate::grammar::Grammar;

/// Axiom, production rules and turn angle of one fractal family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LSystem {
    pub axiom: String,
    pub grammar: Grammar,
    /// Turn angle in radians for every `+` / `-`
    pub theta: f64,
}

impl LSystem {
    pub fn new(axiom: impl Into<String>, grammar: Grammar, theta: f64) -> Self {
        LSystem {
            axiom: axiom.into(),
            grammar,
            theta,
        }
    }

    /// String after `generations` rewrites of the axiom.
    /// Generation 0 is the axiom itself.
    pub fn expand(&self, generations: usize) -> String {
        let mut s = self.axiom.clone();
        for _ in 0..generations {
            s = rewrite(&s, &self.grammar);
        }
        s
    }
}

/// Apply one generation of `grammar` to `s`
pub fn rewrite(s: &str, grammar: &Grammar) -> String {
    let mut next = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match grammar.get(c) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(c),
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn dragon() -> LSystem {
        let grammar = [('A', "A+B"), ('B', "A-B")].into_iter().collect();
        LSystem::new("A", grammar, PI / 2.0)
    }

    #[test]
    fn test_rewrite_single_pass() {
        let l = dragon();
        assert_eq!(rewrite("A", &l.grammar), "A+B");
        // B's replacement contains A, which must not be expanded again
        assert_eq!(rewrite("A+B", &l.grammar), "A+B+A-B");
    }

    #[test]
    fn test_terminals_pass_through() {
        let l = dragon();
        assert_eq!(rewrite("+-[]xyz", &l.grammar), "+-[]xyz");
        assert_eq!(rewrite("", &l.grammar), "");
    }

    #[test]
    fn test_expand_generation_zero_is_axiom() {
        assert_eq!(dragon().expand(0), "A");
        assert_eq!(dragon().expand(1), "A+B");
        assert_eq!(dragon().expand(2), "A+B+A-B");
    }

    #[test]
    fn test_empty_grammar_is_identity() {
        let l = LSystem::new("A", Grammar::new(), PI / 2.0);
        for n in [0, 1, 5, 20] {
            assert_eq!(l.expand(n), "A");
        }
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let l = dragon();
        let s = l.expand(6);
        assert_eq!(rewrite(&s, &l.grammar), rewrite(&s, &l.grammar));
    }

    #[test]
    fn test_dragon_length_growth() {
        // Each A/B becomes 3 symbols, each turn stays 1: len(n) = 2^(n+1) - 1
        let l = dragon();
        let mut s = l.axiom.clone();
        for n in 1..=10 {
            let next = rewrite(&s, &l.grammar);
            assert!(next.len() >= s.len());
            assert_eq!(next.len(), (1usize << (n + 1)) - 1);
            s = next;
        }
    }
}
