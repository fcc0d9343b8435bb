use crate::index::{PathIndex, WEBJARS_PATH_PREFIX};

pub(crate) const NS: &str = WEBJARS_PATH_PREFIX;

/// Index over a small, fixed set of libraries used throughout the unit tests.
pub(crate) fn sample_index() -> PathIndex {
  let relative = [
    "bootstrap/2.2.2/js/bootstrap.js",
    "bootstrap/2.2.2/css/bootstrap.css",
    "jquery/1.8.3/jquery.js",
    "multiple/1.0.0/multiple.js",
    "multiple/1.0.0/module/multiple_module.js",
    "multiple/2.0.0/multiple.js",
    "multiple/2.0.0/module/multiple_module.js",
    "font-awesome/4.0.3/css/font-awesome.css",
    "font-awesome/4.0.3/css/font-awesome.min.css",
    "font-awesome/4.0.3/fonts/fontawesome-webfont.eot",
    "nested/1.0.0/nested.js",
    "nested/1.0.0/child/nested-child.js",
    "nested/1.0.0/child/grandchild/nested-grandchild.js",
  ];

  PathIndex::build(relative.iter().map(|path| format!("{NS}/{path}")))
}
