//! The program's interface description document, bundled at compile time.
//!
//! The document is the legacy Anchor IDL format: camelCase account flags and a `metadata.address`
//! holding the deployed program id. Instruction builders in [`crate::instructions`] are checked
//! against it in tests so the account order can't silently drift from the program.

use std::sync::LazyLock;

use serde::Deserialize;

pub const IDL_JSON: &str = include_str!("../idl/solbank.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlAccountDef>,
    pub metadata: IdlMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlAccountItem>,
    pub args: Vec<IdlField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: String,
    pub is_mut: bool,
    pub is_signer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlAccountDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IdlTypeDef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlTypeDef {
    pub kind: String,
    pub fields: Vec<IdlField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlMetadata {
    pub address: String,
}

impl Idl {
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ixn| ixn.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&IdlAccountDef> {
        self.accounts.iter().find(|acc| acc.name == name)
    }
}

/// The parsed bundled IDL.
///
/// The document is compiled into the crate and covered by tests, so a parse failure here is a
/// build defect rather than a runtime condition.
pub fn solbank_idl() -> &'static Idl {
    static IDL: LazyLock<Idl> =
        LazyLock::new(|| Idl::parse(IDL_JSON).expect("Bundled solbank IDL should parse"));

    LazyLock::force(&IDL)
}
