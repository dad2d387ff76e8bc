//! Sample item files for tests.

/// Three text items with hints and alternatives.
pub const CAPITALS: &str = "\
Capital of Poland? [Europe] Warsaw | Warszawa
Capital of France? [Europe] Paris // easy one

Capital of Japan? [Asia] Tokyo
";

/// Mixed item types.
pub const MEDIA: &str = "\
@image flag-pl.png [flag] Poland
@sound anthem.ogg [] Mazurek Dabrowskiego | Polish anthem
";

/// Second line is missing its closing hint bracket.
pub const BROKEN: &str = "\
Good line [] fine
Bad line [oops answer
";

/// Generate `n` items of the form `Question i? [] Answer i`.
pub fn numbered_items(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Question {}? [] Answer {}\n", i, i))
        .collect()
}
