use std::fmt;

/// A fully resolved Terraform import block, ready to print.
///
/// `resource` is a Terraform address and is inserted verbatim; the resolved
/// OCID is always double-quoted.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBlock {
    pub resource: String,
    pub id: String,
}

impl ImportBlock {
    pub fn new(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ImportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "import{{\n    to = {}\n    id = \"{}\"\n}}",
            self.resource, self.id
        )
    }
}
