// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Table row shorthand: anything `Display` becomes one owned cell.
/// `row!["23A31A4401", 8.5, 0]` → `vec!["23A31A4401", "8.5", "0"]`
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($cell:expr),+ $(,)?) => {
        vec![$(::std::string::ToString::to_string(&$cell)),+]
    };
}
