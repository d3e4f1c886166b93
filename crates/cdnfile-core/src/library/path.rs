//! Canonical key → file fragment rules.

use crate::library::FileType;

/// How the file fragment after `<key>/<version>/` is built for a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// `<key without trailing "js">.min.<ext>` (angularjs, threejs).
    StripJsSuffix,
    /// Underscores become dashes, then `.min.<ext>` (angular_material).
    Dashed,
    /// Extra directory named after the key: `<key>/<key>.<ext>` (dojo).
    NestedDir,
    /// `<key>.min.<ext>` (jquery).
    Minified,
    /// `<prefix><connector><part>.min.<ext>` where prefix is the key split on `part`.
    Connector {
        part: &'static str,
        connector: &'static str,
    },
    /// Script is `jquery-ui.min.js`, stylesheet is `themes/<theme>/jquery-ui.css`.
    JqueryUi,
    /// `<key>-yui-compressed.<ext>` (mootools).
    YuiCompressed,
    /// `<key>.<ext>`; used for any key not listed in the table.
    Plain,
}

const RULES: &[(&str, PathRule)] = &[
    ("angularjs", PathRule::StripJsSuffix),
    ("threejs", PathRule::StripJsSuffix),
    ("angular_material", PathRule::Dashed),
    ("dojo", PathRule::NestedDir),
    ("jquery", PathRule::Minified),
    (
        "jquerymobile",
        PathRule::Connector {
            part: "mobile",
            connector: ".",
        },
    ),
    ("jqueryui", PathRule::JqueryUi),
    ("mootools", PathRule::YuiCompressed),
];

/// Looks up the path rule for a canonical key (case-sensitive).
pub fn rule_for(key: &str) -> PathRule {
    RULES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, rule)| *rule)
        .unwrap_or(PathRule::Plain)
}

/// Splits `key` on `part`, keeps the first piece and appends `connector` + `part`.
///
/// `insert_connector("jquerymobile", "mobile", ".")` → `"jquery.mobile"`.
pub fn insert_connector(key: &str, part: &str, connector: &str) -> String {
    let prefix = key.split(part).next().unwrap_or_default();
    format!("{prefix}{connector}{part}")
}

fn minified(name: &str, ext: &str) -> String {
    format!("{name}.min.{ext}")
}

/// Builds the file fragment for a canonical key. `theme` only matters for
/// the jQuery UI stylesheet.
pub fn build_file_path(key: &str, file_type: FileType, theme: &str) -> String {
    let ext = file_type.extension();
    match rule_for(key) {
        PathRule::StripJsSuffix => {
            let base = key.split("js").next().unwrap_or_default();
            minified(base, ext)
        }
        PathRule::Dashed => minified(&key.replace('_', "-"), ext),
        PathRule::NestedDir => format!("{key}/{key}.{ext}"),
        PathRule::Minified => minified(key, ext),
        PathRule::Connector { part, connector } => {
            minified(&insert_connector(key, part, connector), ext)
        }
        PathRule::JqueryUi => {
            let name = insert_connector(key, "ui", "-");
            match file_type {
                FileType::Script => minified(&name, ext),
                FileType::Stylesheet => format!("themes/{theme}/{name}.{ext}"),
            }
        }
        PathRule::YuiCompressed => format!("{key}-yui-compressed.{ext}"),
        PathRule::Plain => format!("{key}.{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JS: FileType = FileType::Script;
    const CSS: FileType = FileType::Stylesheet;

    #[test]
    fn angular_and_three_drop_js_suffix() {
        assert_eq!(build_file_path("angularjs", JS, ""), "angular.min.js");
        assert_eq!(build_file_path("threejs", JS, ""), "three.min.js");
        assert_eq!(build_file_path("angularjs", CSS, ""), "angular.min.css");
    }

    #[test]
    fn angular_material_uses_dash() {
        assert_eq!(
            build_file_path("angular_material", JS, ""),
            "angular-material.min.js"
        );
        assert_eq!(
            build_file_path("angular_material", CSS, ""),
            "angular-material.min.css"
        );
    }

    #[test]
    fn dojo_has_extra_directory() {
        assert_eq!(build_file_path("dojo", JS, ""), "dojo/dojo.js");
        assert_eq!(build_file_path("dojo", CSS, ""), "dojo/dojo.css");
    }

    #[test]
    fn jquery_minified() {
        assert_eq!(build_file_path("jquery", JS, "x"), "jquery.min.js");
        assert_eq!(build_file_path("jquery", CSS, "x"), "jquery.min.css");
    }

    #[test]
    fn jquery_mobile_dotted() {
        assert_eq!(
            build_file_path("jquerymobile", JS, ""),
            "jquery.mobile.min.js"
        );
        assert_eq!(
            build_file_path("jquerymobile", CSS, "smoothness"),
            "jquery.mobile.min.css"
        );
    }

    #[test]
    fn jquery_ui_script_and_themed_stylesheet() {
        assert_eq!(
            build_file_path("jqueryui", JS, "smoothness"),
            "jquery-ui.min.js"
        );
        assert_eq!(
            build_file_path("jqueryui", CSS, "smoothness"),
            "themes/smoothness/jquery-ui.css"
        );
        assert_eq!(
            build_file_path("jqueryui", CSS, "redmond"),
            "themes/redmond/jquery-ui.css"
        );
    }

    #[test]
    fn mootools_yui_suffix() {
        assert_eq!(
            build_file_path("mootools", JS, ""),
            "mootools-yui-compressed.js"
        );
        assert_eq!(
            build_file_path("mootools", CSS, ""),
            "mootools-yui-compressed.css"
        );
    }

    #[test]
    fn unknown_keys_fall_through_to_plain() {
        assert_eq!(build_file_path("prototype", JS, ""), "prototype.js");
        assert_eq!(build_file_path("scriptaculous", JS, ""), "scriptaculous.js");
        assert_eq!(build_file_path("ext-core", JS, ""), "ext-core.js");
        assert_eq!(build_file_path("webfont", JS, ""), "webfont.js");
        assert_eq!(build_file_path("somethingnew", CSS, ""), "somethingnew.css");
    }

    #[test]
    fn theme_ignored_outside_jquery_ui_stylesheet() {
        assert_eq!(
            build_file_path("jquery", CSS, "smoothness"),
            build_file_path("jquery", CSS, "redmond")
        );
        assert_eq!(
            build_file_path("jqueryui", JS, "smoothness"),
            build_file_path("jqueryui", JS, "redmond")
        );
    }

    #[test]
    fn rule_lookup_is_case_sensitive() {
        assert_eq!(rule_for("jquery"), PathRule::Minified);
        assert_eq!(rule_for("jQuery"), PathRule::Plain);
    }

    #[test]
    fn connector_helper() {
        assert_eq!(insert_connector("jquerymobile", "mobile", "."), "jquery.mobile");
        assert_eq!(insert_connector("jqueryui", "ui", "-"), "jquery-ui");
    }
}
