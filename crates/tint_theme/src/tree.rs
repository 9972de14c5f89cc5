//! Ordered traversal over token structures
//!
//! Every token struct exposes its fields, in declaration order, through
//! [`TokenNode`]. Flattening, dotted-path lookup and leaf enumeration are
//! all visitors over that walk, so they can never disagree about which
//! tokens a [`Theme`](crate::Theme) contains or in what order.

use std::fmt;

/// Receives the nodes of a token tree in declaration order
pub trait TokenVisitor {
    /// A nested group named `key` begins
    fn enter(&mut self, key: &'static str);

    /// A scalar token
    fn leaf(&mut self, key: &'static str, value: &dyn fmt::Display);

    /// The most recently entered group ends
    fn exit(&mut self);
}

/// A structure of design tokens that can be walked
pub trait TokenNode {
    fn visit(&self, visitor: &mut dyn TokenVisitor);
}

/// Walk `node` as a nested group named `key`
pub fn visit_group(visitor: &mut dyn TokenVisitor, key: &'static str, node: &dyn TokenNode) {
    visitor.enter(key);
    node.visit(visitor);
    visitor.exit();
}

/// Implement [`TokenNode`] for a struct whose fields are all scalar leaves.
macro_rules! token_leaves {
    ($ty:ty { $($field:ident => $key:literal),+ $(,)? }) => {
        impl $crate::tree::TokenNode for $ty {
            fn visit(&self, visitor: &mut dyn $crate::tree::TokenVisitor) {
                $( visitor.leaf($key, &self.$field); )+
            }
        }
    };
}

pub(crate) use token_leaves;

/// Convert a camelCase token key to kebab-case (`borderRadius` -> `border-radius`)
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Collects every leaf as `(dotted.path, value)`
#[derive(Default)]
pub(crate) struct LeafCollector {
    stack: Vec<&'static str>,
    pub leaves: Vec<(String, String)>,
}

impl TokenVisitor for LeafCollector {
    fn enter(&mut self, key: &'static str) {
        self.stack.push(key);
    }

    fn leaf(&mut self, key: &'static str, value: &dyn fmt::Display) {
        let mut path = self.stack.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        self.leaves.push((path, value.to_string()));
    }

    fn exit(&mut self) {
        self.stack.pop();
    }
}

/// Finds the leaf addressed by a dotted path
pub(crate) struct PathLookup<'a> {
    target: Vec<&'a str>,
    stack: Vec<&'static str>,
    pub found: Option<String>,
}

impl<'a> PathLookup<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            target: path.split('.').collect(),
            stack: Vec::new(),
            found: None,
        }
    }

    fn on_target_branch(&self) -> bool {
        self.stack.len() < self.target.len()
            && self.stack.iter().zip(&self.target).all(|(a, b)| a == b)
    }
}

impl TokenVisitor for PathLookup<'_> {
    fn enter(&mut self, key: &'static str) {
        self.stack.push(key);
    }

    fn leaf(&mut self, key: &'static str, value: &dyn fmt::Display) {
        if self.found.is_some() || !self.on_target_branch() {
            return;
        }
        if self.stack.len() + 1 == self.target.len() && self.target[self.stack.len()] == key {
            self.found = Some(value.to_string());
        }
    }

    fn exit(&mut self) {
        self.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        first: u16,
        second: &'static str,
    }

    token_leaves!(Pair {
        first => "first",
        second => "secondValue",
    });

    struct Outer {
        pair: Pair,
        flag: i32,
    }

    impl TokenNode for Outer {
        fn visit(&self, visitor: &mut dyn TokenVisitor) {
            visit_group(visitor, "pair", &self.pair);
            visitor.leaf("flag", &self.flag);
        }
    }

    fn sample() -> Outer {
        Outer {
            pair: Pair {
                first: 7,
                second: "x",
            },
            flag: -1,
        }
    }

    #[test]
    fn kebab_cases_camel_keys() {
        assert_eq!(kebab_case("borderRadius"), "border-radius");
        assert_eq!(kebab_case("easeInOut"), "ease-in-out");
        assert_eq!(kebab_case("2xl"), "2xl");
        assert_eq!(kebab_case("zIndex"), "z-index");
        assert_eq!(kebab_case("primary"), "primary");
    }

    #[test]
    fn collects_leaves_in_declaration_order() {
        let mut collector = LeafCollector::default();
        sample().visit(&mut collector);
        assert_eq!(
            collector.leaves,
            vec![
                ("pair.first".to_string(), "7".to_string()),
                ("pair.secondValue".to_string(), "x".to_string()),
                ("flag".to_string(), "-1".to_string()),
            ]
        );
    }

    #[test]
    fn lookup_finds_leaves_only() {
        let tree = sample();
        for (path, expected) in [
            ("pair.secondValue", Some("x")),
            ("flag", Some("-1")),
            ("pair", None),
            ("pair.first.extra", None),
            ("missing", None),
        ] {
            let mut lookup = PathLookup::new(path);
            tree.visit(&mut lookup);
            assert_eq!(lookup.found.as_deref(), expected, "path {path}");
        }
    }
}
