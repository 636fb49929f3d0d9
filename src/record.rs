//! Host record types and their fixed-template rendering.

/// Which host profile an emitted block inherits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Aggregation point with no address of its own.
    Hub,
    /// Addressable network device.
    Node,
}

impl HostKind {
    /// The profile name written on the `use` line.
    fn profile(self) -> &'static str {
        return match self {
            HostKind::Hub => "hub",
            HostKind::Node => "generic-switch",
        };
    }
}

/// One emitted host block. The walker builds these; rendering lives here,
/// so traversal logic never touches the template.
#[derive(Debug, Clone)]
pub struct HostRecord {
    /// IPv4 address; node kind only.
    pub address: Option<String>,
    /// Human-readable name, original script preserved.
    pub display_name: String,
    /// Registry-unique machine identifier.
    pub host_name: String,
    /// Hub or addressable node.
    pub kind: HostKind,
    /// Identifier of the immediate ancestor; absent for the root.
    pub parents: Option<String>,
}

impl HostRecord {
    /// Render the block with fields in fixed order: `use`, `display_name`,
    /// `host_name`, `address`, `parents`. An absent field is omitted
    /// entirely, never printed as a blank value.
    pub fn render(&self) -> String {
        let mut lines = vec![
            "define host{".to_string(),
            format!("\tuse\t\t\t\t{}", self.kind.profile()),
            format!("\tdisplay_name\t{}", self.display_name),
            format!("\thost_name\t\t{}", self.host_name),
        ];
        if let Some(address) = &self.address {
            lines.push(format!("\taddress\t\t\t{address}"));
        }
        if let Some(parents) = &self.parents {
            lines.push(format!("\tparents\t\t\t{parents}"));
        }
        lines.push("}".to_string());
        return lines.join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::{HostKind, HostRecord};

    #[test]
    fn root_hub_has_no_address_or_parents_line() {
        let record = HostRecord {
            address: None,
            display_name: "Офис".to_string(),
            host_name: "Ofis".to_string(),
            kind: HostKind::Hub,
            parents: None,
        };
        let block = record.render();
        assert!(block.starts_with("define host{"));
        assert!(block.contains("\tuse\t\t\t\thub"));
        assert!(block.contains("\tdisplay_name\tОфис"));
        assert!(block.contains("\thost_name\t\tOfis"));
        assert!(!block.contains("address"));
        assert!(!block.contains("parents"));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn node_renders_address_then_parents() {
        let record = HostRecord {
            address: Some("10.0.0.5".to_string()),
            display_name: "edge".to_string(),
            host_name: "edge".to_string(),
            kind: HostKind::Node,
            parents: Some("core".to_string()),
        };
        let block = record.render();
        assert!(block.contains("\tuse\t\t\t\tgeneric-switch"));
        assert!(block.contains("\taddress\t\t\t10.0.0.5"));
        assert!(block.contains("\tparents\t\t\tcore"));

        let address_at = block.find("address").unwrap();
        let parents_at = block.find("parents").unwrap();
        assert!(address_at < parents_at, "address must precede parents");
    }

    #[test]
    fn child_hub_has_parents_but_no_address() {
        let record = HostRecord {
            address: None,
            display_name: "floor3".to_string(),
            host_name: "floor3".to_string(),
            kind: HostKind::Hub,
            parents: Some("Ofis".to_string()),
        };
        let block = record.render();
        assert!(block.contains("\tparents\t\t\tOfis"));
        assert!(!block.contains("address"));
    }
}
