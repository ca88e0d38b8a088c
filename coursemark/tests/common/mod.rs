//! Shared fixtures for the integration tests.

/// A document exercising every block and inline construct of the dialect.
///
/// Deliberately written in the renderer's own normal form (two-space list
/// indentation, 1-based ordered items, blank lines between blocks) so it
/// round-trips byte-for-byte.
pub fn kitchen_sink() -> &'static str {
    "# Course Intro\n\
     \n\
     Welcome to the **course**.\n\
     \n\
     ## Topics\n\
     \n\
     - Basics\n\
     \x20 - Setup\n\
     - Practice\n\
     \n\
     1. Read\n\
     2. Try it\n\
     \n\
     > Stay _curious_.\n\
     \n\
     ```\n\
     let x = 1;\n\
     ```\n\
     \n\
     ![diagram](https://img.example.com/d.png)\n\
     \n\
     See [the docs](https://docs.example.com/start)."
}
