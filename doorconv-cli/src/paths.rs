//! Fixed source and destination paths, relative to the working directory.

/// `door_gfxs` dump from the L1J seed data.
pub(crate) const GFX_SQL: &str = "l1j_java/db/Taiwan/door_gfxs.sql";

/// `spawnlist_door` dump from the L1J seed data.
pub(crate) const SPAWN_SQL: &str = "l1j_java/db/Taiwan/spawnlist_door.sql";

/// Door graphics catalog read by the server.
pub(crate) const GFX_YAML: &str = "server/data/yaml/door_gfx.yaml";

/// Door spawn catalog read by the server.
pub(crate) const SPAWN_YAML: &str = "server/data/yaml/door_spawn.yaml";
