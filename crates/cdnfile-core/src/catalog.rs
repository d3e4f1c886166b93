//! Libraries known to be served by Google Hosted Libraries.
//!
//! Informational only: any library name resolves, listed or not.

use serde::Serialize;

use crate::library::normalize_library_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostedLibrary {
    /// Display name.
    pub name: &'static str,
    /// Canonical key as produced by [`normalize_library_key`].
    pub key: &'static str,
    /// Whether a stylesheet is published alongside the script.
    pub has_stylesheet: bool,
}

pub const HOSTED_LIBRARIES: &[HostedLibrary] = &[
    HostedLibrary { name: "AngularJS", key: "angularjs", has_stylesheet: false },
    HostedLibrary { name: "Angular Material", key: "angular_material", has_stylesheet: true },
    HostedLibrary { name: "Dojo", key: "dojo", has_stylesheet: false },
    HostedLibrary { name: "Ext Core", key: "ext-core", has_stylesheet: false },
    HostedLibrary { name: "jQuery", key: "jquery", has_stylesheet: false },
    HostedLibrary { name: "jQuery Mobile", key: "jquerymobile", has_stylesheet: true },
    HostedLibrary { name: "jQuery UI", key: "jqueryui", has_stylesheet: true },
    HostedLibrary { name: "MooTools", key: "mootools", has_stylesheet: false },
    HostedLibrary { name: "Prototype", key: "prototype", has_stylesheet: false },
    HostedLibrary { name: "script.aculo.us", key: "scriptaculous", has_stylesheet: false },
    HostedLibrary { name: "SPF", key: "spf", has_stylesheet: false },
    HostedLibrary { name: "SWFObject", key: "swfobject", has_stylesheet: false },
    HostedLibrary { name: "three.js", key: "threejs", has_stylesheet: false },
    HostedLibrary { name: "Web Font Loader", key: "webfont", has_stylesheet: false },
];

/// Finds the hosted library a user-supplied name refers to.
pub fn lookup(raw: &str) -> Option<&'static HostedLibrary> {
    let key = normalize_library_key(raw);
    HOSTED_LIBRARIES.iter().find(|lib| lib.key == key)
}
