//! Built-in option tables: internal option path → external enumeration value.

pub const DATA_ACCESS: &[(&str, &str)] = &[
    ("dataset_sharing_options/69", "open"),
    ("dataset_sharing_options/68", "shared"),
    ("dataset_sharing_options/67", "shared"),
    ("dataset_sharing_options/70", "closed"),
];

/// No questionnaire options are assigned to certification schemes yet, so the
/// built-in table is empty. Accepted external values are listed in
/// [`CERTIFICATION_SCHEMES`]; map options to them through settings overrides.
pub const CERTIFIED_WITH: &[(&str, &str)] = &[];

pub const CERTIFICATION_SCHEMES: &[&str] = &[
    "din31644",
    "dini-zertifikat",
    "dsa",
    "iso16363",
    "iso16919",
    "trac",
    "wds",
    "coretrustseal",
];

pub const PID_SYSTEM: &[(&str, &str)] = &[
    ("pid_types/124", "ark"),
    ("pid_types/123", "doi"),
    ("pid_types/122", "purl"),
    ("pid_types/120", "urn"),
    ("pid_types/154", "other"),
    ("pid_types/121", "other"),
];

pub const LICENSE_REF: &[(&str, &str)] = &[
    (
        "dataset_license_types/71",
        "https://creativecommons.org/licenses/by/4.0/",
    ),
    (
        "dataset_license_types/73",
        "https://creativecommons.org/licenses/by-nc/4.0/",
    ),
    (
        "dataset_license_types/74",
        "https://creativecommons.org/licenses/by-nd/4.0/",
    ),
    (
        "dataset_license_types/75",
        "https://creativecommons.org/licenses/by-sa/4.0/",
    ),
    (
        "dataset_license_types/cc0",
        "https://creativecommons.org/publicdomain/zero/1.0/deed.de",
    ),
];
