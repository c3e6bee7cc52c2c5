//! Interface model.
//!
//! A schema file is first deserialized into the permissive [`RawInterface`]
//! shape, then turned into a validated [`Interface`] by
//! [`Interface::from_raw`]. Only the validated model reaches the renderer.
//!
//! # Classification
//!
//! | Raw field | Function | Outcomes |
//! |-----------|----------|----------|
//! | `type` | [`classify_type`] | [`InterfaceType::Datastream`], [`InterfaceType::Properties`] |
//! | `ownership` | [`classify_ownership`] | [`Ownership::Device`], [`Ownership::Server`] |
//! | `aggregation` | [`classify_aggregation`] | [`Aggregation::Individual`], [`Aggregation::Object`] |

use crate::naming;
use crate::{GenError, GenResult};
use serde::Deserialize;

/// Kind of data exchanged by an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    Datastream,
    Properties,
}

/// Side that originates the data of an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    Device,
    Server,
}

/// Whether mappings are independent values or one grouped object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregation {
    Individual,
    Object,
}

/// Delivery guarantee of a mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reliability {
    Unreliable,
    Guaranteed,
    Unique,
}

/// Data type of a mapping, mirroring `astarte_mapping_type_t`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingType {
    Integer,
    LongInteger,
    Double,
    String,
    BinaryBlob,
    Boolean,
    DateTime,
    IntegerArray,
    LongIntegerArray,
    DoubleArray,
    StringArray,
    BinaryBlobArray,
    BooleanArray,
    DateTimeArray,
}

impl InterfaceType {
    pub fn c_symbol(self) -> &'static str {
        match self {
            InterfaceType::Datastream => "TYPE_DATASTREAM",
            InterfaceType::Properties => "TYPE_PROPERTIES",
        }
    }
}

impl Ownership {
    pub fn c_symbol(self) -> &'static str {
        match self {
            Ownership::Device => "OWNERSHIP_DEVICE",
            Ownership::Server => "OWNERSHIP_SERVER",
        }
    }
}

impl Aggregation {
    pub fn c_symbol(self) -> &'static str {
        match self {
            Aggregation::Individual => "AGGREGATION_INDIVIDUAL",
            Aggregation::Object => "AGGREGATION_OBJECT",
        }
    }
}

/// Entry of the reliability lookup table
struct ReliabilityEntry {
    code: i64,
    name: &'static str,
    c_symbol: &'static str,
    reliability: Reliability,
}

const RELIABILITY_TABLE: &[ReliabilityEntry] = &[
    ReliabilityEntry {
        code: 0,
        name: "unreliable",
        c_symbol: "RELIABILITY_UNRELIABLE",
        reliability: Reliability::Unreliable,
    },
    ReliabilityEntry {
        code: 1,
        name: "guaranteed",
        c_symbol: "RELIABILITY_GUARANTEED",
        reliability: Reliability::Guaranteed,
    },
    ReliabilityEntry {
        code: 2,
        name: "unique",
        c_symbol: "RELIABILITY_UNIQUE",
        reliability: Reliability::Unique,
    },
];

impl Reliability {
    /// Look up a reliability by its integer code (0, 1 or 2)
    pub fn from_code(code: i64) -> Option<Self> {
        RELIABILITY_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.reliability)
    }

    /// Look up a reliability by its schema name
    pub fn from_name(name: &str) -> Option<Self> {
        RELIABILITY_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.reliability)
    }

    pub fn code(self) -> i64 {
        self.entry().code
    }

    pub fn c_symbol(self) -> &'static str {
        self.entry().c_symbol
    }

    fn entry(self) -> &'static ReliabilityEntry {
        match self {
            Reliability::Unreliable => &RELIABILITY_TABLE[0],
            Reliability::Guaranteed => &RELIABILITY_TABLE[1],
            Reliability::Unique => &RELIABILITY_TABLE[2],
        }
    }
}

impl MappingType {
    /// Every mapping type, in `astarte_mapping_type_t` order
    pub const ALL: [MappingType; 14] = [
        MappingType::Integer,
        MappingType::LongInteger,
        MappingType::Double,
        MappingType::String,
        MappingType::BinaryBlob,
        MappingType::Boolean,
        MappingType::DateTime,
        MappingType::IntegerArray,
        MappingType::LongIntegerArray,
        MappingType::DoubleArray,
        MappingType::StringArray,
        MappingType::BinaryBlobArray,
        MappingType::BooleanArray,
        MappingType::DateTimeArray,
    ];

    /// Tag used in schema files
    pub fn tag(self) -> &'static str {
        match self {
            MappingType::Integer => "integer",
            MappingType::LongInteger => "longinteger",
            MappingType::Double => "double",
            MappingType::String => "string",
            MappingType::BinaryBlob => "binaryblob",
            MappingType::Boolean => "boolean",
            MappingType::DateTime => "datetime",
            MappingType::IntegerArray => "integerarray",
            MappingType::LongIntegerArray => "longintegerarray",
            MappingType::DoubleArray => "doublearray",
            MappingType::StringArray => "stringarray",
            MappingType::BinaryBlobArray => "binaryblobarray",
            MappingType::BooleanArray => "booleanarray",
            MappingType::DateTimeArray => "datetimearray",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.tag() == tag)
    }

    /// Enumerator of `astarte_mapping_type_t`, e.g. `TYPE_LONGINTEGER`
    pub fn c_symbol(self) -> String {
        format!("TYPE_{}", self.tag().to_uppercase())
    }
}

/// Classify the raw `type` field of an interface
pub fn classify_type(location: &str, raw: &str) -> GenResult<InterfaceType> {
    match raw {
        "datastream" => Ok(InterfaceType::Datastream),
        "properties" => Ok(InterfaceType::Properties),
        other => Err(unknown_value(location, "type", other)),
    }
}

/// Classify the raw `ownership` field of an interface
pub fn classify_ownership(location: &str, raw: &str) -> GenResult<Ownership> {
    match raw {
        "device" => Ok(Ownership::Device),
        "server" => Ok(Ownership::Server),
        other => Err(unknown_value(location, "ownership", other)),
    }
}

/// Classify the raw `aggregation` field of an interface
pub fn classify_aggregation(location: &str, raw: &str) -> GenResult<Aggregation> {
    match raw {
        "individual" => Ok(Aggregation::Individual),
        "object" => Ok(Aggregation::Object),
        other => Err(unknown_value(location, "aggregation", other)),
    }
}

fn unknown_value(location: &str, field: &str, value: &str) -> GenError {
    GenError::schema(location, format!("unknown {field} {value:?}"))
}

fn missing_field(location: &str, field: &str) -> GenError {
    GenError::schema(location, format!("missing required field `{field}`"))
}

/// Interface record as found in a schema file.
///
/// Fields are optional so that a missing field is reported as a schema error
/// naming it rather than as a JSON error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInterface {
    pub interface_name: Option<String>,
    pub version_major: Option<i64>,
    pub version_minor: Option<i64>,
    #[serde(rename = "type")]
    pub interface_type: Option<String>,
    pub ownership: Option<String>,
    pub aggregation: Option<String>,
    pub mappings: Option<Vec<RawMapping>>,
}

/// Mapping record as found in a schema file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMapping {
    pub endpoint: Option<String>,
    #[serde(rename = "type")]
    pub mapping_type: Option<String>,
    /// Integer code or schema name; absent means unreliable
    pub reliability: Option<serde_json::Value>,
    pub explicit_timestamp: Option<bool>,
    pub allow_unset: Option<bool>,
}

/// A validated interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub version_major: u32,
    pub version_minor: u32,
    pub interface_type: InterfaceType,
    pub ownership: Ownership,
    pub aggregation: Aggregation,
    /// Declaration order, which is the order of the generated array
    pub mappings: Vec<Mapping>,
}

/// A validated mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub endpoint: String,
    pub mapping_type: MappingType,
    pub reliability: Reliability,
    pub explicit_timestamp: bool,
    pub allow_unset: bool,
}

impl Interface {
    /// Build a validated interface from a raw record.
    ///
    /// `origin` names the record (usually its file) in errors raised before
    /// the interface name is known.
    pub fn from_raw(raw: RawInterface, origin: &str) -> GenResult<Self> {
        let name = raw
            .interface_name
            .ok_or_else(|| missing_field(origin, "interface_name"))?;
        if !naming::is_valid_interface_name(&name) {
            let reason = if name.contains('-') {
                "hyphens are not supported because the name becomes a C symbol"
            } else {
                "expected dot-separated segments of ASCII letters, digits and underscores"
            };
            return Err(GenError::schema(
                origin,
                format!("invalid interface name {name:?}: {reason}"),
            ));
        }
        let location = name.as_str();

        let version_major = parse_version(location, "version_major", raw.version_major)?;
        let version_minor = parse_version(location, "version_minor", raw.version_minor)?;

        let raw_type = raw
            .interface_type
            .ok_or_else(|| missing_field(location, "type"))?;
        let interface_type = classify_type(location, &raw_type)?;

        let raw_ownership = raw
            .ownership
            .ok_or_else(|| missing_field(location, "ownership"))?;
        let ownership = classify_ownership(location, &raw_ownership)?;

        let aggregation = match raw.aggregation {
            Some(value) => classify_aggregation(location, &value)?,
            None => Aggregation::Individual,
        };

        let mappings = raw
            .mappings
            .ok_or_else(|| missing_field(location, "mappings"))?
            .into_iter()
            .map(|mapping| Mapping::from_raw(mapping, location))
            .collect::<GenResult<Vec<_>>>()?;

        let interface = Interface {
            name,
            version_major,
            version_minor,
            interface_type,
            ownership,
            aggregation,
            mappings,
        };
        interface.validate()?;

        Ok(interface)
    }

    /// Check cross-field rules of a constructed interface
    pub fn validate(&self) -> GenResult<()> {
        if self.version_major == 0 && self.version_minor == 0 {
            return Err(GenError::schema(
                &self.name,
                "version_major and version_minor cannot both be 0",
            ));
        }

        if self.is_type_properties() && self.is_aggregation_object() {
            return Err(GenError::schema(
                &self.name,
                "properties interfaces cannot use object aggregation",
            ));
        }

        if self.mappings.is_empty() {
            return Err(GenError::schema(
                &self.name,
                "an interface must declare at least one mapping",
            ));
        }

        Ok(())
    }

    pub fn is_type_properties(&self) -> bool {
        self.interface_type == InterfaceType::Properties
    }

    pub fn is_server_owned(&self) -> bool {
        self.ownership == Ownership::Server
    }

    pub fn is_aggregation_object(&self) -> bool {
        self.aggregation == Aggregation::Object
    }

    /// Interface name with dots replaced by underscores
    pub fn symbol_suffix(&self) -> String {
        naming::symbol_suffix(&self.name)
    }
}

impl Mapping {
    fn from_raw(raw: RawMapping, interface: &str) -> GenResult<Self> {
        let endpoint = raw
            .endpoint
            .ok_or_else(|| missing_field(interface, "mappings[].endpoint"))?;
        if !endpoint.starts_with('/') {
            return Err(GenError::schema(
                interface,
                format!("endpoint {endpoint:?} must start with '/'"),
            ));
        }

        let tag = raw
            .mapping_type
            .ok_or_else(|| missing_field(interface, "mappings[].type"))?;
        let mapping_type = MappingType::from_tag(&tag).ok_or_else(|| {
            GenError::schema(
                interface,
                format!("unknown mapping type {tag:?} for endpoint {endpoint}"),
            )
        })?;

        let reliability = parse_reliability(interface, &endpoint, raw.reliability)?;

        Ok(Mapping {
            endpoint,
            mapping_type,
            reliability,
            explicit_timestamp: raw.explicit_timestamp.unwrap_or(false),
            allow_unset: raw.allow_unset.unwrap_or(false),
        })
    }
}

fn parse_version(location: &str, field: &str, value: Option<i64>) -> GenResult<u32> {
    let value = value.ok_or_else(|| missing_field(location, field))?;
    u32::try_from(value)
        .map_err(|_| GenError::schema(location, format!("{field} out of range: {value}")))
}

fn parse_reliability(
    interface: &str,
    endpoint: &str,
    value: Option<serde_json::Value>,
) -> GenResult<Reliability> {
    use serde_json::Value;

    match value {
        None | Some(Value::Null) => Ok(Reliability::Unreliable),
        Some(Value::Number(number)) => {
            let code = number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from))
                .ok_or_else(|| {
                    GenError::schema(
                        interface,
                        format!("reliability {number} of endpoint {endpoint} is not an integer"),
                    )
                })?;
            i64::try_from(code)
                .ok()
                .and_then(Reliability::from_code)
                .ok_or_else(|| GenError::Lookup {
                    interface: interface.to_string(),
                    endpoint: endpoint.to_string(),
                    code,
                })
        }
        Some(Value::String(name)) => Reliability::from_name(&name).ok_or_else(|| {
            GenError::schema(
                interface,
                format!("unknown reliability {name:?} for endpoint {endpoint}"),
            )
        }),
        Some(other) => Err(GenError::schema(
            interface,
            format!("reliability of endpoint {endpoint} must be an integer or a name, got {other}"),
        )),
    }
}
