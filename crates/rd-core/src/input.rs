use core::str::FromStr;

use crate::{Edge, Error};

/// Node count plus edges in caller order, prior to any graph validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeList {
    pub node_count: usize,
    pub edges: Vec<Edge>,
}

/// Parses `node_count edge_count` followed by `edge_count` triples of
/// `weight first_node second_node`, all whitespace separated.
///
/// `#` comments out the rest of a line.
pub fn parse_edge_list(text: &str) -> Result<EdgeList, Error> {
    let mut tokens = Tokens::new(text);

    let node_count = tokens.next_parsed::<usize>("node count")?;
    let declared = tokens.next_parsed::<usize>("edge count")?;

    let mut edges = Vec::with_capacity(declared.min(1 << 16));
    for found in 0..declared {
        if tokens.at_end() {
            return Err(Error::TruncatedInput { declared, found });
        }
        let weight = tokens.next_parsed::<f32>("edge weight")?;
        let a = tokens.next_parsed::<usize>("node index")?;
        let b = tokens.next_parsed::<usize>("node index")?;
        edges.push(Edge { weight, a, b });
    }

    if !tokens.at_end() {
        return Err(Error::TrailingInput {
            token_index: tokens.consumed,
        });
    }

    Ok(EdgeList { node_count, edges })
}

/// Inverse of [`parse_edge_list`].
pub fn format_edge_list(list: &EdgeList) -> String {
    let mut out = format!("{} {}\n", list.node_count, list.edges.len());
    for e in &list.edges {
        out.push_str(&format!("{} {} {}\n", e.weight, e.a, e.b));
    }
    out
}

struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = &'a str> + 'a>,
    peeked: Option<&'a str>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter = text
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(head, _)| head))
            .flat_map(str::split_whitespace);
        let mut tokens = Self {
            iter: Box::new(iter),
            peeked: None,
            consumed: 0,
        };
        tokens.peeked = tokens.iter.next();
        tokens
    }

    fn at_end(&self) -> bool {
        self.peeked.is_none()
    }

    fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> Result<T, Error> {
        let token_index = self.consumed;
        let Some(tok) = self.peeked else {
            return Err(Error::Parse {
                token_index,
                expected,
                found: "end of input".to_owned(),
            });
        };
        let value = tok.parse::<T>().map_err(|_| Error::Parse {
            token_index,
            expected,
            found: tok.to_owned(),
        })?;
        self.peeked = self.iter.next();
        self.consumed += 1;
        Ok(value)
    }
}
