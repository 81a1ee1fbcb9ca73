// src/noyau/ast.rs
//
// AST fermé, immuable, construit par évaluation puis jeté (pas de cache).
// Chaque noeud possède ses enfants (Box / Vec).

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(f64),
    UnaryOp(UnaryOp, Box<Node>),
    BinaryOp(BinaryOp, Box<Node>, Box<Node>),
    Identifier(String),
    Call(String, Vec<Node>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

impl Node {
    pub fn unaire(op: UnaryOp, x: Node) -> Node {
        Node::UnaryOp(op, Box::new(x))
    }

    pub fn binaire(op: BinaryOp, a: Node, b: Node) -> Node {
        Node::BinaryOp(op, Box::new(a), Box::new(b))
    }
}

/// Forme entièrement parenthésée (journalisation / tests).
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(v) => write!(f, "{v}"),
            Node::Identifier(name) => write!(f, "{name}"),
            Node::UnaryOp(op, x) => match op {
                UnaryOp::Plus => write!(f, "(+{x})"),
                UnaryOp::Minus => write!(f, "(-{x})"),
            },
            Node::BinaryOp(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            Node::Call(name, args) => {
                write!(f, "{name}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
