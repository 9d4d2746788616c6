//! Constants used throughout next-scaffold

/// Manifest file written at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Initial version recorded in the generated manifest
pub const MANIFEST_VERSION: &str = "0.1.0";

/// Package manager invoked for dependency installation
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Packages installed into every generated project.
pub const CORE_PACKAGES: &[&str] = &["next", "react@17.0.2", "react-dom@17.0.2"];

/// Backend service package, installed with `--withFirebase`.
pub const FIREBASE_PACKAGE: &str = "firebase@8";

/// Icon library packages, installed with `--withFontAwesome`.
pub const FONT_AWESOME_PACKAGES: &[&str] = &[
    "@fortawesome/fontawesome-svg-core",
    "@fortawesome/free-solid-svg-icons",
    "@fortawesome/react-fontawesome",
];

/// Firebase client config fields paired with the environment keys that feed them.
pub const FIREBASE_KEYS: &[(&str, &str)] = &[
    ("apiKey", "NEXT_PUBLIC_FIREBASE_API_KEY"),
    ("authDomain", "NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN"),
    ("databaseURL", "NEXT_PUBLIC_FIREBASE_DATABASE_URL"),
    ("projectId", "NEXT_PUBLIC_FIREBASE_PROJECT_ID"),
    ("storageBucket", "NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET"),
    ("messagingSenderId", "NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID"),
    ("appId", "NEXT_PUBLIC_FIREBASE_APP_ID"),
    ("measurementId", "NEXT_PUBLIC_FIREBASE_MEASUREMENT_ID"),
];

/// Legacy multi-letter short flags and the long flags they stand for.
pub const LEGACY_SHORT_FLAGS: &[(&str, &str)] = &[
    ("-fN", "--forNetlify"),
    ("-wF", "--withFirebase"),
    ("-wFA", "--withFontAwesome"),
];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
