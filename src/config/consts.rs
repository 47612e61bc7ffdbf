// src/config/consts.rs

// Net config
pub const RESULT_URL_PREFIX: &str = "https://mycompet.ffme.fr/resultat/resultat_";
pub const RELAY_PATH: &str = "/fetch-html";
pub const USER_AGENT: &str = "ffme_import/0.2";

// The club whose competitors are filtered out of the page.
// Overridable per run (GUI field / --club).
pub const DEFAULT_CLUB_NAME: &str = "AMICALE LAIQUE DE JONAGE";

// Seeded URL for a fresh session; any past competition works as a template.
pub const DEFAULT_RESULT_ID: u32 = 13156;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_RESULTS_SUBDIR: &str = "results";
pub const DEFAULT_MISSING_SUBDIR: &str = "missing";
pub const DEFAULT_FILE: &str = "import";
