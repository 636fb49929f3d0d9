//! Depth-first, pre-order traversal of the topic tree.

use std::io::Write;

use crate::document::Topic;
use crate::emitter::Emitter;
use crate::error::Error;
use crate::ip::IpPattern;
use crate::naming::{IdentifierRegistry, NameNormalizer};
use crate::record::{HostKind, HostRecord};

/// Traversal context: every piece of state the walk touches lives here,
/// threaded explicitly instead of sitting in process globals.
pub struct Walker<W> {
    emitter: Emitter<W>,
    ip: IpPattern,
    names: NameNormalizer,
    registry: IdentifierRegistry,
}

impl<W: Write> Walker<W> {
    pub fn new(sink: W) -> Self {
        return Self {
            emitter: Emitter::new(sink),
            ip: IpPattern::new(),
            names: NameNormalizer::new(),
            registry: IdentifierRegistry::new(),
        };
    }

    /// Consume the walker and hand back the output sink.
    #[cfg(test)]
    fn into_sink(self) -> W {
        return self.emitter.into_inner();
    }

    /// Emit the tree root as the top-level hub and return its resolved
    /// identifier, which seeds the `parents` chain for the whole walk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the block cannot be written.
    pub fn emit_root(&mut self, root: &Topic) -> Result<String, Error> {
        let host_name = self.registry.resolve(&self.names.host_name(&root.title));
        self.emitter.emit(&HostRecord {
            address: None,
            display_name: self.names.display_name(&root.title),
            host_name: host_name.clone(),
            kind: HostKind::Hub,
            parents: None,
        })?;
        return Ok(host_name);
    }

    /// Visit each topic in input order, emit its record, then recurse into
    /// its children with the topic's fresh identifier as the new parent.
    /// The input is a tree by construction, so there is no cycle handling.
    ///
    /// # Errors
    ///
    /// Returns emission errors; the first one aborts the remaining walk.
    pub fn walk(&mut self, topics: &[Topic], parent: &str) -> Result<(), Error> {
        for topic in topics {
            let host_name = self.registry.resolve(&self.names.host_name(&topic.title));
            let record = self.build_record(topic, &host_name, parent);
            self.emitter.emit(&record)?;

            if !topic.children.is_empty() {
                self.walk(&topic.children, &host_name)?;
            }
        }
        return Ok(());
    }

    /// Decide hub or node. A label with a full dotted-quad match makes a
    /// node; a labeled topic without one downgrades to a hub with a stdout
    /// diagnostic; an unlabeled topic is a hub directly.
    fn build_record(&self, topic: &Topic, host_name: &str, parent: &str) -> HostRecord {
        let address = if topic.labels.is_empty() {
            None
        } else {
            let found = self.ip.first_in_labels(&topic.labels);
            if found.is_none() {
                println!("{} has no ip", topic.title);
            }
            found.map(str::to_string)
        };

        let kind = if address.is_some() {
            HostKind::Node
        } else {
            HostKind::Hub
        };

        return HostRecord {
            address,
            display_name: self.names.display_name(&topic.title),
            host_name: host_name.to_string(),
            kind,
            parents: Some(parent.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::Walker;
    use crate::document::Topic;

    fn topic(title: &str, labels: &[&str], children: Vec<Topic>) -> Topic {
        Topic {
            children,
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
            title: title.to_string(),
        }
    }

    fn run_walk(root: &Topic) -> String {
        let mut walker = Walker::new(Vec::new());
        let root_name = walker.emit_root(root).unwrap();
        walker.walk(&root.children, &root_name).unwrap();
        String::from_utf8(walker.into_sink()).unwrap()
    }

    #[test]
    fn lone_root_is_a_single_hub_block() {
        let root = topic("Офис", &[], Vec::new());
        let out = run_walk(&root);

        assert_eq!(out.matches("define host{").count(), 1);
        assert!(out.contains("\thost_name\t\tOfis"));
        assert!(out.contains("\tuse\t\t\t\thub"));
        assert!(!out.contains("parents"));
        assert!(!out.contains("address"));
    }

    #[test]
    fn labeled_child_with_ip_becomes_a_node() {
        let root = topic(
            "core",
            &[],
            vec![topic("edge", &["note", "10.0.0.5"], Vec::new())],
        );
        let out = run_walk(&root);

        assert!(out.contains("\tuse\t\t\t\tgeneric-switch"));
        assert!(out.contains("\taddress\t\t\t10.0.0.5"));
        assert!(out.contains("\tparents\t\t\tcore"));
    }

    #[test]
    fn labeled_child_without_ip_falls_back_to_hub() {
        let root = topic(
            "core",
            &[],
            vec![topic("closet", &["note only, no ip here"], Vec::new())],
        );
        let out = run_walk(&root);

        let blocks: Vec<&str> = out.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].contains("\tuse\t\t\t\thub"));
        assert!(!blocks[1].contains("address"));
    }

    #[test]
    fn duplicate_sibling_titles_get_distinct_identifiers() {
        let root = topic(
            "core",
            &[],
            vec![
                topic("Switch", &[], Vec::new()),
                topic("Switch", &[], Vec::new()),
            ],
        );
        let out = run_walk(&root);

        assert!(out.contains("\thost_name\t\tSwitch\n"));
        assert!(out.contains("\thost_name\t\tSwitch_1\n"));
    }

    #[test]
    fn grandchildren_chain_through_their_parent() {
        let root = topic(
            "Офис",
            &[],
            vec![topic(
                "floor3",
                &[],
                vec![topic("printer", &["10.0.0.9"], Vec::new())],
            )],
        );
        let out = run_walk(&root);

        let blocks: Vec<&str> = out.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].contains("\tparents\t\t\tOfis"));
        assert!(blocks[2].contains("\tparents\t\t\tfloor3"));
        assert!(blocks[2].contains("\taddress\t\t\t10.0.0.9"));
    }

    #[test]
    fn traversal_is_pre_order_in_input_order() {
        let root = topic(
            "root",
            &[],
            vec![
                topic("a", &[], vec![topic("a1", &[], Vec::new())]),
                topic("b", &[], Vec::new()),
            ],
        );
        let out = run_walk(&root);

        let a_at = out.find("\thost_name\t\ta\n").unwrap();
        let a1_at = out.find("\thost_name\t\ta1\n").unwrap();
        let b_at = out.find("\thost_name\t\tb\n").unwrap();
        assert!(a_at < a1_at, "child a1 must follow a");
        assert!(a1_at < b_at, "subtree of a must precede b");
    }
}
