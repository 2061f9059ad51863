//! How Jelly groups the links of a monadic chain.
//!
//! A chain is resolved left to right. The links seen so far collapse into an
//! accumulator, and each step matches the accumulator's arity together with
//! the arities of the next one or two links against [`RULES`]. The matched
//! nodes become a group named after the combinator it behaves as, and that
//! group is the accumulator for the rest of the chain.

use tracing::debug;
use vec1::Vec1;

use crate::atom::Arity::{self, Dyad as D, Monad as M, Nilad as N};
use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Rule {
    /// Arity of the accumulator followed by the arities of the next links.
    pub(crate) pattern: &'static [Arity],
    /// How many nodes of the pattern, accumulator included, the group takes.
    pub(crate) consumes: usize,
    pub(crate) name: &'static str,
    /// Arity of the resulting group: `Monad` if it still needs the argument.
    pub(crate) yields: Arity,
}

const fn rule(
    pattern: &'static [Arity],
    consumes: usize,
    name: &'static str,
    yields: Arity,
) -> Rule {
    Rule {
        pattern,
        consumes,
        name,
        yields,
    }
}

/// Tried in order, three-element patterns first. A dyad only ever heads a
/// window at the start of a chain, where the argument is the current value.
pub(crate) const RULES: &[Rule] = &[
    rule(&[M, D, M], 3, "Φ", M), // f x ⊕ g x
    rule(&[M, D, N], 3, "B", M), // f x ⊕ c
    rule(&[M, N, D], 3, "B", M), // c ⊕ f x
    rule(&[N, D, M], 3, "B", M), // c ⊕ g x
    rule(&[N, D, N], 3, "∘", N), // c ⊕ d
    rule(&[N, N, D], 3, "∘", N), // d ⊕ c
    rule(&[D, D, M], 3, "Φ", M), // (x ⊕ x) ⊗ g x
    rule(&[D, D, N], 3, "B", M), // (x ⊕ x) ⊗ c
    rule(&[D, M], 2, "S", M),    // x ⊕ g x
    rule(&[D, N], 2, "∘", M),    // x ⊕ c
    rule(&[D, D], 2, "Σ", M),    // (x ⊕ x) ⊗ x
    rule(&[M, D], 2, "Σ", M),    // f x ⊕ x
    rule(&[M, M], 2, "B", M),    // g (f x)
    rule(&[M, N], 2, "K", N),    // c
    rule(&[N, D], 2, "∘", M),    // c ⊕ x
    rule(&[N, M], 2, "B", N),    // g c
    rule(&[N, N], 2, "K", N),    // d
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    /// The link at `index` in the chain.
    Leaf { index: usize, arity: Arity },
    Group {
        rule: &'static Rule,
        children: Vec1<Node>,
    },
}

impl Node {
    pub(crate) fn arity(&self) -> Arity {
        match self {
            Node::Leaf { arity, .. } => *arity,
            Node::Group { rule, .. } => rule.yields,
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Leaf { arity, .. } => arity.to_string(),
            Node::Group { rule, .. } => rule.name.to_string(),
        }
    }

    fn collect_names(&self, names: &mut Vec<&'static str>) {
        if let Node::Group { rule, children } = self {
            for child in children {
                child.collect_names(names);
            }
            names.push(rule.name);
        }
    }

    fn render(&self, indent: usize, out: &mut String) {
        if let Node::Group { rule, children } = self {
            let labels: Vec<String> = children.iter().map(Node::label).collect();
            out.push_str(&format!("{:indent$}{}  {}\n", "", rule.name, labels.join(" ")));
            for child in children {
                child.render(indent + 2, out);
            }
        }
    }
}

/// The combinator tree of one chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grouping {
    root: Node,
}

impl Grouping {
    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Combinator names in the order Jelly applies them.
    pub(crate) fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.root.collect_names(&mut names);
        names
    }

    pub(crate) fn name_sequence(&self) -> String {
        self.names().join(" ")
    }

    /// One line per group, outermost first, each level indented two more spaces.
    pub(crate) fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.root.render(indent, &mut out);
        out
    }
}

/// `1-2-1`
pub(crate) fn arity_label(arities: &[Arity]) -> String {
    let digits: Vec<String> = arities.iter().map(Arity::to_string).collect();
    digits.join("-")
}

/// Jelly starts a chain from its first link when that link is a nilad, unless
/// the chain reads as `0 2` pairs, in which case the nilad is the left argument
/// of the dyad after it.
fn leading_nilad(arities: &[Arity]) -> bool {
    let padded = arities.iter().copied().chain([M]);
    let pairs = [N, D].into_iter().cycle().take(2 * arities.len());
    padded.lt(pairs)
}

pub(crate) fn group(arities: &Vec1<Arity>) -> Result<Grouping> {
    group_with(RULES, arities)
}

pub(crate) fn group_with(rules: &'static [Rule], arities: &Vec1<Arity>) -> Result<Grouping> {
    let first = Node::Leaf {
        index: 0,
        arity: *arities.first(),
    };
    let root = fold(rules, arities, first, 1)?;
    Ok(Grouping { root })
}

/// Combines `acc`, which covers `arities[..next]`, with the links after it.
fn fold(rules: &'static [Rule], arities: &[Arity], acc: Node, next: usize) -> Result<Node> {
    if next >= arities.len() {
        return Ok(acc);
    }

    let leading = matches!(acc, Node::Leaf { .. });
    let mut window = vec![acc.arity()];
    window.extend(arities[next..].iter().take(2));
    let pairs_only = leading && acc.arity() == N && !leading_nilad(arities);

    let rule = rules
        .iter()
        .filter(|rule| !pairs_only || rule.pattern.len() == 2)
        .find(|rule| window.starts_with(rule.pattern))
        .ok_or_else(|| Error::NoMatchingRule {
            position: next - 1,
            window: window.clone(),
        })?;
    debug!(
        window = %arity_label(&window),
        combinator = rule.name,
        position = next - 1,
        "grouped links"
    );

    let taken = rule.consumes - 1;
    let mut children = Vec1::new(acc);
    children.extend((next..next + taken).map(|index| Node::Leaf {
        index,
        arity: arities[index],
    }));
    fold(rules, arities, Node::Group { rule, children }, next + taken)
}
