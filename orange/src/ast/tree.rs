// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use crate::{ImportDecl, Node, PackageDecl, StatementKind};

#[derive(Debug, Default, Clone)]
pub struct ParseTree {
    path: PathBuf,
    nodes: Vec<Node>,
}

impl ParseTree {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// The first `package` declaration of the file, if any.
    #[must_use]
    pub fn package(&self) -> Option<&PackageDecl> {
        self.statement_kinds().find_map(|kind| match kind {
            StatementKind::Package(package) => Some(package),
            _ => None,
        })
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.statement_kinds().filter_map(|kind| match kind {
            StatementKind::Import(import) => Some(import),
            _ => None,
        })
    }

    fn statement_kinds(&self) -> impl Iterator<Item = &StatementKind> {
        self.nodes.iter()
            .filter_map(Node::as_statement)
            .map(|statement| &statement.kind)
    }
}
