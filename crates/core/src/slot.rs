use serde_json::Value;

use crate::props::{Props, Slots};

/// Key under which callers pass the default (unnamed) slot content.
pub const DEFAULT_SLOT: &str = "default";

/// Converts a raw slot identifier into the camel-case prop key a component receives.
///
/// Surrounding whitespace, including a byte order mark, is trimmed. Every `-`
/// or `_` directly followed by an ASCII lowercase letter is dropped and the
/// letter is upper-cased. Separators followed by anything else are left alone.
///
/// # Examples
///
/// ```
/// use astro_jsx_core::slot::slot_name;
///
/// assert_eq!(slot_name("my-slot"), "mySlot");
/// assert_eq!(slot_name(" foo_bar "), "fooBar");
/// assert_eq!(slot_name("my-Slot"), "my-Slot");
/// ```
pub fn slot_name(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let mut name = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    while let Some(ch) = chars.next() {
        if matches!(ch, '-' | '_')
            && let Some(next) = chars.next_if(char::is_ascii_lowercase)
        {
            name.push(next.to_ascii_uppercase());
            continue;
        }
        name.push(ch);
    }

    name
}

/// Splits caller-supplied slots into the default content and the named slots.
///
/// The default slot is returned as `children` (`Value::Null` when absent). All
/// other keys are renamed through [`slot_name`]; when two raw names collapse to
/// the same key, the later one in insertion order wins.
pub fn normalize_slots(slots: &Slots) -> (Value, Props) {
    let mut children = Value::Null;
    let mut named = Props::new();

    for (key, value) in slots {
        if key == DEFAULT_SLOT {
            children = value.clone();
            continue;
        }
        named.insert(slot_name(key), value.clone());
    }

    (children, named)
}
