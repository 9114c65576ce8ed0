use crate::error::ConnectorError;
use roxmltree::{Document, Node};

/// Marketo fault codes that mean the signature was bad, stale, or replayed.
const AUTH_FAULT_CODES: [&str; 2] = ["20014", "20016"];

/// Read-only view over a parsed response document.
///
/// Lookups search the whole tree by local element name, which keeps the
/// extraction independent of whatever namespace prefixes the envelope uses.
/// Parsing fails up front on a SOAP fault so every caller gets the typed
/// error instead of a missing-element surprise.
#[derive(Debug)]
pub struct ResponseDocument<'input> {
    doc: Document<'input>,
}

impl<'input> ResponseDocument<'input> {
    pub fn parse(xml: &'input str) -> Result<Self, ConnectorError> {
        let doc = Document::parse(xml)
            .map_err(|err| ConnectorError::InvalidDocument(err.to_string()))?;
        let response = ResponseDocument { doc };
        response.check_fault()?;
        Ok(response)
    }

    fn check_fault(&self) -> Result<(), ConnectorError> {
        let Some(fault) = self.find("Fault") else {
            return Ok(());
        };

        let code = child_text(fault, "faultcode").unwrap_or_default();
        let message = child_text(fault, "faultstring").unwrap_or_default();
        if AUTH_FAULT_CODES
            .iter()
            .any(|c| code.contains(c) || message.contains(c))
        {
            Err(ConnectorError::AuthRejected { code, message })
        } else {
            Err(ConnectorError::ServiceFault { code, message })
        }
    }

    /// First element anywhere in the document with the given local name.
    pub fn find<'a>(&'a self, name: &str) -> Option<Node<'a, 'input>> {
        self.doc
            .root()
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == name)
    }

    pub fn require<'a>(&'a self, name: &str) -> Result<Node<'a, 'input>, ConnectorError> {
        self.find(name).ok_or_else(|| ConnectorError::missing(name))
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.find(name).map(node_text)
    }

    pub fn require_text(&self, name: &str) -> Result<String, ConnectorError> {
        self.require(name).map(node_text)
    }
}

/// First descendant element of `node` with the given local name.
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

pub fn child_text(node: Node, name: &str) -> Option<String> {
    child(node, name).map(node_text)
}

pub fn require_child_text(
    node: Node,
    parent_path: &str,
    name: &str,
) -> Result<String, ConnectorError> {
    child_text(node, name).ok_or_else(|| ConnectorError::missing(&format!("{parent_path}/{name}")))
}

/// Direct child elements of `node` with the given local name, in document
/// order.
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed text content of an element; absent text reads as empty, the same
/// way the service's own clients treat it.
pub fn node_text(node: Node) -> String {
    node.text().unwrap_or("").trim().to_string()
}
