//! L-System Presets - canonical fractals
//!
//! Each preset is an axiom, its production rules and the turn angle.

use std::f64::consts::PI;

use crate::grammar::Grammar;
use crate::lsystem::LSystem;

/// Named L-system definition
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    /// Turn angle in radians
    pub theta: f64,
}

impl Preset {
    pub fn grammar(&self) -> Grammar {
        self.rules.iter().copied().collect()
    }

    pub fn lsystem(&self) -> LSystem {
        LSystem::new(self.axiom, self.grammar(), self.theta)
    }
}

pub const PRESETS: &[Preset] = &[
    // Fractal binary tree
    Preset {
        name: "tree",
        axiom: "A",
        rules: &[('A', "B[+A]-A"), ('B', "BB")],
        theta: 2.0 * PI / 8.0,
    },
    Preset {
        name: "sierpinski_regular",
        axiom: "A-B-B",
        rules: &[('A', "A-B+A+B-A"), ('B', "BB")],
        theta: 2.0 * PI / 3.0,
    },
    Preset {
        name: "sierpinski_arrowhead",
        axiom: "A",
        rules: &[('A', "B-A-B"), ('B', "A+B+A")],
        theta: 2.0 * PI / 6.0,
    },
    // Heighway dragon
    Preset {
        name: "dragon",
        axiom: "A",
        rules: &[('A', "A+B"), ('B', "A-B")],
        theta: 2.0 * PI / 4.0,
    },
    Preset {
        name: "crystal",
        axiom: "A",
        rules: &[('A', "AA-A--A-A")],
        theta: 2.0 * PI / 4.0,
    },
    // Koch curve
    Preset {
        name: "snowflake",
        axiom: "A",
        rules: &[('A', "A+A--A+A")],
        theta: 2.0 * PI / 6.0,
    },
    // Flowsnake
    Preset {
        name: "gosper",
        axiom: "A",
        rules: &[('A', "A-B--B+A++AA+B-"), ('B', "+A-BB--B-A++A+B")],
        theta: 2.0 * PI / 6.0,
    },
];

/// Look up a preset by name
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(preset("dragon").map(|p| p.axiom), Some("A"));
        assert!(preset("Dragon").is_none());
        assert!(preset("hilbert").is_none());
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            assert!(PRESETS[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn test_tree_growth() {
        let tree = preset("tree").unwrap().lsystem();
        assert_eq!(tree.expand(1), "B[+A]-A");
        assert_eq!(tree.expand(2), "BB[+B[+A]-A]-B[+A]-A");
    }

    #[test]
    fn test_snowflake_length_growth() {
        // 4 A's and 4 turns per A: len(n + 1) = len(n) + 7 * 4^n
        let koch = preset("snowflake").unwrap().lsystem();
        let mut expected = 1;
        for n in 0..6u32 {
            assert_eq!(koch.expand(n as usize).len(), expected);
            expected += 7 * 4usize.pow(n);
        }
    }

    #[test]
    fn test_replacements_never_empty() {
        for p in PRESETS {
            assert!(p.rules.iter().all(|(_, r)| !r.is_empty()), "preset {}", p.name);
        }
    }
}
