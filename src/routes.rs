use core_types::{RACES, RecordId};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::fmt;

/// Characters escaped when an id is written as a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A resource registered with the shell and the views it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub name: &'static str,
    pub list: bool,
    pub show: bool,
}

/// Everything the admin exposes: races, with a list and a show view.
/// No create, edit or delete.
pub const RESOURCES: &[ResourceDefinition] = &[ResourceDefinition {
    name: RACES,
    list: true,
    show: true,
}];

/// Where the shell currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/races`: the list view.
    Listing,
    /// `/races/{id}`: the detail view for one record.
    Viewing(RecordId),
    /// Any path no resource claims; renders the catch-all page.
    NotFound(String),
}

impl Route {
    /// Resolves a path against the route table. The root path lands on the
    /// list of the first resource.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Listing;
        }

        let mut segments = trimmed.trim_start_matches('/').split('/');
        let resource = segments.next().unwrap_or_default();
        let id = segments.next();
        let extra = segments.next();

        let Some(definition) = RESOURCES.iter().find(|r| r.name == resource) else {
            return Route::NotFound(path.to_string());
        };
        match (id, extra) {
            (None, _) if definition.list => Route::Listing,
            (Some(id), None) if definition.show && !id.is_empty() => {
                match percent_decode_str(id).decode_utf8() {
                    Ok(id) => Route::Viewing(RecordId::new(id.into_owned())),
                    Err(_) => Route::NotFound(path.to_string()),
                }
            }
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Listing => format!("/{RACES}"),
            Route::Viewing(id) => {
                format!("/{RACES}/{}", utf8_percent_encode(id.as_str(), SEGMENT))
            }
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
