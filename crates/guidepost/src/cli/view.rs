//! View command: opens a guide in the terminal viewer.

use guidepost_content::{ContentStore, load_guide_file};
use guidepost_core::Guide;
use guidepost_tui::App;
use std::path::Path;
use std::sync::Arc;

/// Handles the view command.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_view_command(
    path: &Path,
    guide_id: Option<&str>,
    section: Option<&str>,
) -> anyhow::Result<()> {
    let guide = resolve_guide(path, guide_id)?;
    let mut app = App::new(guide);

    if let Some(section) = section {
        app.enter_section(section)?;
    }

    guidepost_tui::run(&mut app)?;
    Ok(())
}

/// Loads the guide at `path`.
///
/// A directory must hold exactly one guide unless `guide_id` picks one.
pub fn resolve_guide(path: &Path, guide_id: Option<&str>) -> anyhow::Result<Arc<Guide>> {
    if path.is_file() {
        return Ok(Arc::new(load_guide_file(path)?));
    }

    let store = ContentStore::from_dir(path)?;
    let guide = match guide_id {
        Some(id) => store.get(id),
        None => store.single(),
    };

    guide.ok_or_else(|| {
        let ids = store.ids().collect::<Vec<_>>().join(", ");
        match guide_id {
            Some(id) => anyhow::anyhow!("No guide '{}' in {} (found: {})", id, path.display(), ids),
            None => anyhow::anyhow!(
                "{} holds several guides; pick one with --guide (found: {})",
                path.display(),
                ids
            ),
        }
    })
}
