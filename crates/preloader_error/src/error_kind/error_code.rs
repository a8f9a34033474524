// --- Placement
pub const UNRESOLVED_PLACEMENT: &str = "UNRESOLVED_PLACEMENT";

// --- Compilation graph contract
pub const UNKNOWN_CHUNK_GROUP: &str = "UNKNOWN_CHUNK_GROUP";
pub const UNKNOWN_CHUNK: &str = "UNKNOWN_CHUNK";
pub const DUPLICATE_ENTRYPOINT: &str = "DUPLICATE_ENTRYPOINT";

// --- Preloader specific
pub const PANIC: &str = "PANIC";
