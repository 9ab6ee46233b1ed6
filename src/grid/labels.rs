// SPDX-License-Identifier: MPL-2.0
//! Label prettying for grid pages.
//!
//! Field names arrive as snake_case identifiers and page titles as fully
//! qualified type names; both are turned into the spaced, capitalized form
//! shown in the tab and column headers.

/// Turns a snake_case field name into a spaced Title Case label.
///
/// A leading `m_` member prefix is dropped.
#[must_use]
pub fn field_label(name: &str) -> String {
    let name = name.strip_prefix("m_").unwrap_or(name);

    name.split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a (possibly fully qualified) type name into a page title: the
/// module path is dropped and CamelCase words and digit runs are separated
/// with spaces.
#[must_use]
pub fn page_title(type_name: &str) -> String {
    let name = type_name.rsplit("::").next().unwrap_or(type_name);

    let mut title = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && (ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
            title.push(' ');
        }
        title.push(ch);
    }
    title
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_label_splits_snake_case() {
        assert_eq!(field_label("motor_speed"), "Motor Speed");
        assert_eq!(field_label("x"), "X");
        assert_eq!(field_label("raw_adc_value"), "Raw Adc Value");
    }

    #[test]
    fn field_label_drops_member_prefix() {
        assert_eq!(field_label("m_voltage"), "Voltage");
    }

    #[test]
    fn page_title_drops_module_path() {
        assert_eq!(page_title("crate::packets::MotorCommand"), "Motor Command");
        assert_eq!(page_title("Position"), "Position");
    }

    #[test]
    fn page_title_splits_digits() {
        assert_eq!(page_title("Position3D"), "Position 3 D");
    }
}
