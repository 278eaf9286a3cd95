//! Content domain: the boss catalog registry, built-in tables, and the RON
//! override loader.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{DataFile, LoreTextDef, LoreTier, PhaseMoveSetDef};
pub use loader::{ContentLoadError, LORE_FILE, MOVES_FILE, load_boss_content};
pub use registry::BossContent;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;

/// Installs the built-in [`BossContent`] registry. A host that ships RON
/// overrides replaces the resource with [`load_boss_content`]'s result
/// before entering its boss scene.
pub struct BossContentPlugin;

impl Plugin for BossContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossContent>()
            .add_systems(Startup, log_content_summary);
    }
}

fn log_content_summary(content: Res<BossContent>) {
    info!("{}", content.summary());
}
