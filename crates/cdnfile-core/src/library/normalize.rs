//! Library name → canonical key.

/// Normalizes a user-supplied library name into the key used on the CDN.
///
/// The name is ASCII lower-cased, then a handful of hosted libraries get special
/// treatment; everything else has dots, dashes and spaces stripped.
///
/// - `"Angular"` → `"angularjs"`, `"three"` → `"threejs"`
/// - `"Web Font Loader"` → `"webfont"`
/// - `"Angular Material"` / `"angular-material"` → `"angular_material"`
/// - `"Ext Core"` / `"ext-core"` → `"ext-core"`
/// - `"jQuery UI"` → `"jqueryui"`, `"Three.js"` → `"threejs"`
pub fn normalize_library_key(raw: &str) -> String {
    let name = raw.to_ascii_lowercase();
    match name.as_str() {
        "angular" | "three" => format!("{name}js"),
        "web font loader" => name.replace(' ', "").replace("loader", ""),
        "angular material" | "angular-material" => name.replace([' ', '-'], "_"),
        "ext core" | "ext-core" => name.replace(' ', "-"),
        _ => name.replace(['.', '-', ' '], ""),
    }
}
