//! Address domain types: raw lookup records, candidates and address book entries

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Payload returned by the postcode lookup service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupResponse {
    pub status: String,
    #[serde(default)]
    pub details: Vec<RawAddressRecord>,
    /// Set by the service when `status` is not "ok"
    #[serde(default)]
    pub errormessage: Option<String>,
}

impl LookupResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// One address record as the lookup service returns it.
///
/// The service never reports the house number back, so it is carried over
/// from the request when the record is transformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAddressRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub postcode: String,
}

/// A normalized address pending user selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCandidate {
    pub id: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub city: String,
    pub municipality: String,
    pub province: String,
}

impl AddressCandidate {
    /// One-line rendering, e.g. "Dorpsstraat 60, 1211EP Hilversum"
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street, self.house_number, self.postcode, self.city
        )
    }

    /// Flatten into entry fields keyed by their camelCase names
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        [
            ("id", &self.id),
            ("street", &self.street),
            ("houseNumber", &self.house_number),
            ("postcode", &self.postcode),
            ("city", &self.city),
            ("municipality", &self.municipality),
            ("province", &self.province),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
    }
}

/// Normalize one raw record, injecting the house number from the request.
///
/// Uses the record's own id when it has one; otherwise a UUIDv5 over the
/// postal fields, so equal inputs always produce equal candidates.
pub fn transform(raw: &RawAddressRecord, house_number: &str) -> AddressCandidate {
    let id = match raw.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => synthesize_id(raw, house_number),
    };

    AddressCandidate {
        id,
        street: raw.street.clone(),
        house_number: house_number.to_string(),
        postcode: raw.postcode.clone(),
        city: raw.city.clone(),
        municipality: raw.municipality.clone(),
        province: raw.province.clone(),
    }
}

/// Transform a whole response set, keeping the received order.
///
/// Repeated ids get a suffix (`-2`, `-3`, ...) so every id is unique within
/// the set, including against record ids that already look suffixed.
pub fn transform_all(records: &[RawAddressRecord], house_number: &str) -> Vec<AddressCandidate> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut next_suffix: BTreeMap<String, usize> = BTreeMap::new();

    records
        .iter()
        .map(|raw| {
            let mut candidate = transform(raw, house_number);
            if used.contains(&candidate.id) {
                let suffix = next_suffix.entry(candidate.id.clone()).or_insert(2);
                let mut id = format!("{}-{}", candidate.id, suffix);
                while used.contains(&id) {
                    *suffix += 1;
                    id = format!("{}-{}", candidate.id, suffix);
                }
                *suffix += 1;
                candidate.id = id;
            }
            used.insert(candidate.id.clone());
            candidate
        })
        .collect()
}

fn synthesize_id(raw: &RawAddressRecord, house_number: &str) -> String {
    let name = [
        raw.postcode.as_str(),
        house_number,
        raw.street.as_str(),
        raw.city.as_str(),
        raw.municipality.as_str(),
        raw.province.as_str(),
    ]
    .join("\u{1f}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

/// A finalized record: candidate fields merged with personal info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBookEntry {
    fields: BTreeMap<String, String>,
}

impl AddressBookEntry {
    /// Merge a candidate with personal info. Personal info wins on key collision.
    pub fn merge(candidate: &AddressCandidate, personal_info: &BTreeMap<String, String>) -> Self {
        let mut fields = candidate.to_fields();
        fields.extend(
            personal_info
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// "First Last", falling back to "(no name)" when both are blank
    pub fn full_name(&self) -> String {
        let name = [self.get("firstName"), self.get("lastName")]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            "(no name)".to_string()
        } else {
            name
        }
    }

    pub fn address_line(&self) -> String {
        let field = |key: &str| self.get(key).unwrap_or_default();
        format!(
            "{} {}, {} {}",
            field("street"),
            field("houseNumber"),
            field("postcode"),
            field("city")
        )
    }
}
