//! Naming utilities for generated C symbols.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `com.example.Foo` | [`symbol_suffix`] | `com_example_Foo` |
//! | `com.example.Foo` | [`interface_symbol`] | `astarte_interface_com_example_Foo` |
//! | `com.example.Foo` | [`mappings_symbol`] | `astarte_mappings_com_example_Foo` |
//! | `astarte_interface_gen.h` | [`include_guard`] | `_ASTARTE_INTERFACE_GEN_H_` |
//! | `/a"b` | [`c_string_literal`] | `"/a\"b"` |

/// Prefix of the generated interface constant.
pub const INTERFACE_SYMBOL_PREFIX: &str = "astarte_interface";

/// Prefix of the generated mapping array.
pub const MAPPINGS_SYMBOL_PREFIX: &str = "astarte_mappings";

/// Derive the symbol suffix of an interface name.
///
/// # Examples
///
/// ```
/// use astarte_gen_core::naming::symbol_suffix;
///
/// assert_eq!(symbol_suffix("com.example.Foo"), "com_example_Foo");
/// ```
pub fn symbol_suffix(interface_name: &str) -> String {
    interface_name.replace('.', "_")
}

/// Name of the `astarte_interface_t` constant for an interface.
pub fn interface_symbol(interface_name: &str) -> String {
    format!(
        "{INTERFACE_SYMBOL_PREFIX}_{}",
        symbol_suffix(interface_name)
    )
}

/// Name of the static mapping array for an interface.
pub fn mappings_symbol(interface_name: &str) -> String {
    format!("{MAPPINGS_SYMBOL_PREFIX}_{}", symbol_suffix(interface_name))
}

/// Include guard macro for a header file name.
///
/// # Examples
///
/// ```
/// use astarte_gen_core::naming::include_guard;
///
/// assert_eq!(include_guard("astarte_interface_gen.h"), "_ASTARTE_INTERFACE_GEN_H_");
/// ```
pub fn include_guard(header_file_name: &str) -> String {
    let body: String = header_file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("_{body}_")
}

/// Quote a string as a C string literal.
///
/// Backslashes, double quotes and line breaks are escaped; everything else is
/// copied verbatim.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Check that an interface name can be turned into a C symbol.
///
/// The name must start with an ASCII letter and consist of non-empty
/// dot-separated segments of ASCII letters, digits and underscores.
pub fn is_valid_interface_name(name: &str) -> bool {
    let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());

    starts_with_letter
        && name
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_symbol_char))
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
