// Fixed artifact locations and bundled assets
//
// All transient artifacts live at the same relative names inside the
// pipeline's work directory on every run; nothing here is parameterized
// beyond the work directory itself.

/// Project configuration file consulted for hidden commit types,
/// resolved relative to the repository checkout.
pub const VERSIONRC_FILE: &str = ".versionrc";

/// Transient file holding the title for the spellcheck collaborator.
pub const TITLE_ARTIFACT: &str = "pull_request.title";

/// Destination for the downloaded supplementary word list.
pub const DOWNLOADED_SPELLING: &str = "downloaded.spelling";

/// Base dictionary shipped with the binary, one word per line.
pub const BUNDLED_DICTIONARY: &str = include_str!("../assets/en_us.dic");

/// Supplementary word list used when the remote fetch fails.
pub const BUNDLED_FALLBACK: &str = include_str!("../assets/fallback.spelling");
