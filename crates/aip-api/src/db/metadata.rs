//! Package metadata lookup against the MySQL application database.
//!
//! Queries the `SIPs` table for non-hidden packages, matching either the
//! stored UUID case-insensitively or the stored filename against a
//! name-derived pattern. The filename format is `name.ext` or
//! `name-<uuid>.ext`, so a logical name matches a filename that embeds
//! its own UUID.

use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use aip_core::{
    derive_package_name, single_match, Identifier, LookupError, MetadataSource, PackageRecord,
    Stage,
};

const BY_UUID: &str = "SELECT sipUUID AS sip_uuid, aipFilename AS aip_filename \
     FROM SIPs WHERE hidden = 0 AND LOWER(sipUUID) = ?";

const BY_NAME: &str = "SELECT sipUUID AS sip_uuid, aipFilename AS aip_filename \
     FROM SIPs WHERE hidden = 0 AND aipFilename REGEXP ?";

/// Metadata resolver backed by the application database.
#[derive(Debug, Clone)]
pub struct DbMetadataSource {
    pool: MySqlPool,
}

impl DbMetadataSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SipRow {
    sip_uuid: String,
    aip_filename: String,
}

impl SipRow {
    fn into_record(self) -> Result<PackageRecord, LookupError> {
        let uuid: Uuid = self.sip_uuid.parse().map_err(|e| {
            LookupError::source(
                Stage::Metadata,
                format!("stored identifier [{}] is not a UUID: {e}", self.sip_uuid),
            )
        })?;
        let name = derive_package_name(&self.aip_filename, &uuid);
        Ok(PackageRecord {
            uuid,
            name: Some(name),
        })
    }
}

#[async_trait]
impl MetadataSource for DbMetadataSource {
    async fn resolve_package(&self, id: &Identifier) -> Result<PackageRecord, LookupError> {
        let query = match id {
            Identifier::Uuid(uuid) => {
                sqlx::query_as::<_, SipRow>(BY_UUID).bind(uuid.to_string())
            }
            Identifier::Name(name) => {
                sqlx::query_as::<_, SipRow>(BY_NAME).bind(filename_pattern(name))
            }
        };

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!(identifier = %id, error = %e, "application database query failed");
            LookupError::source(Stage::Metadata, e)
        })?;

        let records = rows
            .into_iter()
            .map(SipRow::into_record)
            .collect::<Result<Vec<_>, _>>()?;

        single_match(records, Stage::Metadata)
    }
}

const UUID_HEX: &str =
    "[[:xdigit:]]{8}-[[:xdigit:]]{4}-[[:xdigit:]]{4}-[[:xdigit:]]{4}-[[:xdigit:]]{12}";

/// Build the REGEXP pattern matching filenames for a logical name:
/// `name.ext` or `name-<uuid>.ext`. The name is escaped first so it can
/// never alter the pattern structure.
fn filename_pattern(name: &str) -> String {
    format!("^{}(-{UUID_HEX}\\.|\\.).*$", escape_regex(name))
}

/// Backslash-escape regex metacharacters in a literal.
fn escape_regex(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(
            c,
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
