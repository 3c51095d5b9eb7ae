//! Build manifest parsing
//!
//! Official builds ship `build-manifest.xml`, a repo manifest listing every
//! project the build was made from.

use std::collections::BTreeSet;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Element carrying a project
const PROJECT_TAG: &[u8] = b"project";
/// Attribute holding the project name
const NAME_ATTR: &str = "name";

#[derive(Error, Debug)]
enum ManifestError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected end of document, {0} element(s) left open")]
    Truncated(usize),
}

/// Extract the names of `project` elements that contain `marker`.
///
/// Best effort: empty input, malformed XML, or no match yields an empty set.
pub fn extract_projects(xml: &str, marker: &str) -> BTreeSet<String> {
    if xml.trim().is_empty() {
        return BTreeSet::new();
    }

    match scan_projects(xml, marker) {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("Error while parsing build manifest: {}", e);
            BTreeSet::new()
        }
    }
}

fn scan_projects(xml: &str, marker: &str) -> Result<BTreeSet<String>, ManifestError> {
    let mut reader = Reader::from_str(xml);
    let mut projects = BTreeSet::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                collect_project(&e, marker, &mut projects)?;
            }
            Event::Empty(e) => collect_project(&e, marker, &mut projects)?,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof if depth > 0 => return Err(ManifestError::Truncated(depth)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(projects)
}

fn collect_project(
    element: &BytesStart<'_>,
    marker: &str,
    projects: &mut BTreeSet<String>,
) -> Result<(), quick_xml::Error> {
    if element.local_name().as_ref() != PROJECT_TAG {
        return Ok(());
    }
    if let Some(name) = project_name(element)?
        && name.contains(marker)
    {
        projects.insert(name);
    }
    Ok(())
}

/// Read the `name` attribute of a project element (may be absent)
fn project_name(element: &BytesStart<'_>) -> Result<Option<String>, quick_xml::Error> {
    let Some(attr) = element.try_get_attribute(NAME_ATTR)? else {
        return Ok(None);
    };
    Ok(Some(attr.unescape_value()?.into_owned()))
}
