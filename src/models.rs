use serde::Serialize;

/// One row of the WHOIS history results table.
///
/// Fields are filled by cell position; dates and registrar names are kept
/// exactly as the site renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    /// Row number shown in the first column (0 if it was not numeric)
    pub num: i64,
    /// Registered domain name
    pub domain_name: String,
    /// Registrar name
    pub registrar: String,
    /// Creation date
    pub created: String,
    /// Last-updated date
    pub updated: String,
    /// Expiry date
    pub expiry: String,
}
