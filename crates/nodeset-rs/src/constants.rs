// crates/nodeset-rs/src/constants.rs
//! Well-known numeric identifiers from the OPC UA base namespace (namespace 0).
//!
//! The `ID_` constants are the ids the projector references directly. `ALIASES`
//! is the static table written into every document's `<Aliases>` block.

// --- Object and variable types ---
pub const ID_BASE_OBJECT_TYPE: u32 = 58;
pub const ID_FOLDER_TYPE: u32 = 61;
pub const ID_BASE_VARIABLE_TYPE: u32 = 62;
pub const ID_BASE_DATA_VARIABLE_TYPE: u32 = 63;
pub const ID_PROPERTY_TYPE: u32 = 68;

// --- Modelling rules ---
pub const ID_MODELLING_RULE_MANDATORY: u32 = 78;
pub const ID_MODELLING_RULE_OPTIONAL: u32 = 80;

// --- Standard folders ---
pub const ID_ROOT_FOLDER: u32 = 84;
pub const ID_OBJECTS_FOLDER: u32 = 85;

/// Parent name that stands for the top of the address space.
pub const ROOT_PARENT_NAME: &str = "Root";

/// Id the `Root` sentinel maps to.
pub const ID_ROOT_PARENT: u32 = ID_OBJECTS_FOLDER;

// --- Reference types ---
pub const ID_ORGANIZES: u32 = 35;
pub const ID_HAS_MODELLING_RULE: u32 = 37;
pub const ID_HAS_TYPE_DEFINITION: u32 = 40;
pub const ID_HAS_SUBTYPE: u32 = 45;
pub const ID_HAS_PROPERTY: u32 = 46;
pub const ID_HAS_COMPONENT: u32 = 47;

/// Access level written on every variable (CurrentRead | CurrentWrite).
pub const ACCESS_LEVEL_READ_WRITE: u8 = 3;

/// Alias table emitted into the `<Aliases>` block, sorted by alias name.
///
/// The table is static: every entry is written regardless of whether the document uses it.
pub const ALIASES: &[(&str, u32)] = &[
    ("Aggregates", 44),
    ("BaseDataType", 24),
    ("BaseDataVariableType", ID_BASE_DATA_VARIABLE_TYPE),
    ("BaseObjectType", ID_BASE_OBJECT_TYPE),
    ("BaseVariableType", ID_BASE_VARIABLE_TYPE),
    ("Boolean", 1),
    ("Byte", 3),
    ("ByteString", 15),
    ("DataTypesFolder", 90),
    ("DataValue", 23),
    ("DateTime", 13),
    ("DiagnosticInfo", 25),
    ("Double", 11),
    ("Duration", 290),
    ("Enumeration", 29),
    ("ExpandedNodeId", 18),
    ("Float", 10),
    ("FolderType", ID_FOLDER_TYPE),
    ("GeneratesEvent", 41),
    ("Guid", 14),
    ("HasChild", 34),
    ("HasComponent", ID_HAS_COMPONENT),
    ("HasDescription", 39),
    ("HasEncoding", 38),
    ("HasEventSource", 36),
    ("HasModellingRule", ID_HAS_MODELLING_RULE),
    ("HasNotifier", 48),
    ("HasOrderedComponent", 49),
    ("HasProperty", ID_HAS_PROPERTY),
    ("HasSubtype", ID_HAS_SUBTYPE),
    ("HasTypeDefinition", ID_HAS_TYPE_DEFINITION),
    ("HierarchicalReferences", 33),
    ("Image", 30),
    ("Int16", 4),
    ("Int32", 6),
    ("Int64", 8),
    ("Integer", 27),
    ("LocaleId", 295),
    ("LocalizedText", 21),
    ("ModellingRule_Mandatory", ID_MODELLING_RULE_MANDATORY),
    ("ModellingRule_Optional", ID_MODELLING_RULE_OPTIONAL),
    ("NodeId", 17),
    ("NonHierarchicalReferences", 32),
    ("Number", 26),
    ("ObjectTypesFolder", 88),
    ("ObjectsFolder", ID_OBJECTS_FOLDER),
    ("Organizes", ID_ORGANIZES),
    ("PropertyType", ID_PROPERTY_TYPE),
    ("QualifiedName", 20),
    ("ReferenceTypesFolder", 91),
    ("References", 31),
    ("RootFolder", ID_ROOT_FOLDER),
    ("SByte", 2),
    ("StatusCode", 19),
    ("String", 12),
    ("Structure", 22),
    ("TypesFolder", 86),
    ("UInt16", 5),
    ("UInt32", 7),
    ("UInt64", 9),
    ("UInteger", 28),
    ("UtcTime", 294),
    ("VariableTypesFolder", 89),
    ("ViewsFolder", 87),
    ("XmlElement", 16),
];
